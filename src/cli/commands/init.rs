//! Write a sample roster file

use std::fs;
use std::path::Path;

use anyhow::bail;

use crate::output::{InitReport, OutputMode};
use crate::roster;

/// Write the sample roster to `path`, refusing to overwrite without `force`
pub fn init(path: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }

    fs::write(path, roster::SAMPLE)?;
    log::debug!("wrote sample roster to {}", path.display());

    let report = InitReport {
        created: path.display().to_string(),
    };
    report.render(mode);

    Ok(())
}
