//! Draw assignments for a roster file

use std::path::Path;

use crate::core::services::{self, DrawError};
use crate::output::{AssignmentLine, DrawFailure, DrawReport, OutputMode};
use crate::roster;

/// Draw assignments for the roster at `path` and render them
pub fn draw(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let file = roster::load_file(path)?;
    let participants = file.to_participants()?;

    log::debug!("drawing {} participant(s)", participants.len());

    match services::assign(&participants) {
        Ok(assignments) => {
            let report = DrawReport {
                event: file.event.clone(),
                drawn_at: chrono::Utc::now().to_rfc3339(),
                assignments: assignments
                    .into_iter()
                    .map(|a| AssignmentLine {
                        participant: a.participant_id,
                        recipient: a.drawn_id,
                    })
                    .collect(),
            };
            report.render(mode);
            Ok(())
        },
        Err(e) => {
            let failure = DrawFailure {
                error: e.to_string(),
                hint: hint_for(e).to_string(),
            };
            failure.render(mode);
            std::process::exit(1);
        },
    }
}

/// Actionable next step for each engine error
const fn hint_for(error: DrawError) -> &'static str {
    match error {
        DrawError::NotEnoughParticipants { .. } => {
            "Add more participants to the roster (a draw needs at least 2)."
        },
        DrawError::UnsatisfiableConstraints => {
            "Remove an exclusion or add participants, then draw again."
        },
    }
}
