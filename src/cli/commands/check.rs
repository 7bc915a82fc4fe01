//! Validate a roster and report whether it can be drawn

use std::path::Path;

use crate::core::services;
use crate::output::{CheckReport, OutputMode};
use crate::roster;

/// Check the roster at `path`
///
/// Reports structural problems (duplicate or empty ids, too few
/// participants) as errors, odd-but-harmless exclusions as warnings, and
/// dry-runs the draw engine to report whether the roster is drawable.
pub fn check(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let file = roster::load_file(path)?;

    let mut errors = Vec::new();
    for id in file.duplicate_ids() {
        errors.push(format!("duplicate participant id: {id}"));
    }
    if file.participants.iter().any(|p| p.id.trim().is_empty()) {
        errors.push("participant id cannot be empty".to_string());
    }
    if file.participants.len() < 2 {
        errors.push(format!(
            "not enough participants: {} (a draw needs at least 2)",
            file.participants.len()
        ));
    }

    let mut warnings = Vec::new();
    for (participant, excluded) in file.inert_exclusions() {
        warnings.push(format!("{participant} excludes unknown id \"{excluded}\""));
    }
    for entry in &file.participants {
        if entry.exclusions.contains(&entry.id) {
            warnings.push(format!(
                "{} excludes themselves (self-draws are never allowed anyway)",
                entry.id
            ));
        }
    }

    let feasible = if errors.is_empty() {
        let participants = file.to_participants()?;
        Some(services::assign(&participants).is_ok())
    } else {
        None
    };

    let report = CheckReport {
        ok: errors.is_empty() && feasible == Some(true),
        participants: file.participants.len(),
        errors,
        warnings,
        feasible,
    };
    report.render(mode);

    if !report.ok {
        std::process::exit(1);
    }
    Ok(())
}
