//! Roster file loading
//!
//! A roster is a TOML file listing the participants of one draw:
//!
//! ```toml
//! event = "Office exchange"
//!
//! [[participants]]
//! id = "alice"
//! exclusions = ["bob"]
//!
//! [[participants]]
//! id = "bob"
//! ```
//!
//! `exclusions` is optional and one-directional: it lists the ids this
//! participant must not draw, and says nothing about who may draw them.
//! Exclusion ids that match no participant are inert - the draw ignores
//! them - but `tombola check` reports them so typos stay visible.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::Participant;

/// Default roster file name
pub const DEFAULT_FILE: &str = "tombola.toml";

/// Template roster written by `tombola init`
pub const SAMPLE: &str = r#"# tombola roster
#
# One [[participants]] entry per person. `exclusions` lists the ids this
# person must not draw (their partner, last year's match, ...). It is
# optional and one-directional.

event = "Gift exchange"

[[participants]]
id = "alice"
exclusions = ["bob"]

[[participants]]
id = "bob"

[[participants]]
id = "carol"
"#;

/// Errors that can occur while loading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    /// Roster file does not exist
    #[error("roster file not found: {0}")]
    NotFound(PathBuf),

    /// IO error while reading the file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or shape error
    #[error("invalid roster file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two participants share an id
    #[error("duplicate participant id: {0}")]
    DuplicateId(String),

    /// A participant has an empty id
    #[error("participant id cannot be empty")]
    EmptyId,
}

/// A parsed roster file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterFile {
    /// Display name for the gift exchange
    pub event: Option<String>,

    /// The entrants of the draw
    #[serde(default)]
    pub participants: Vec<ParticipantEntry>,
}

/// One `[[participants]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantEntry {
    /// Unique identifier (name, email, whatever the organizer uses)
    pub id: String,

    /// Ids this entrant must not draw
    #[serde(default)]
    pub exclusions: Vec<String>,
}

/// Load and parse a roster file
pub fn load_file(path: &Path) -> Result<RosterFile, RosterError> {
    if !path.exists() {
        return Err(RosterError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let roster: RosterFile = toml::from_str(&content)?;

    log::debug!(
        "loaded {} participant(s) from {}",
        roster.participants.len(),
        path.display()
    );

    Ok(roster)
}

impl RosterFile {
    /// Convert entries into core participants
    ///
    /// Enforces the draw engine's preconditions: every id non-empty and
    /// unique within the roster.
    pub fn to_participants(&self) -> Result<Vec<Participant>, RosterError> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut participants = Vec::with_capacity(self.participants.len());

        for entry in &self.participants {
            if entry.id.trim().is_empty() {
                return Err(RosterError::EmptyId);
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(RosterError::DuplicateId(entry.id.clone()));
            }
            participants.push(Participant::with_exclusions(
                &entry.id,
                entry.exclusions.iter().cloned(),
            ));
        }

        Ok(participants)
    }

    /// Ids that appear more than once across entries
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<String> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut dups = Vec::new();

        for entry in &self.participants {
            if !seen.insert(entry.id.as_str()) && !dups.contains(&entry.id) {
                dups.push(entry.id.clone());
            }
        }

        dups
    }

    /// Exclusion ids that match no participant in this roster
    ///
    /// Returns (participant id, inert exclusion id) pairs. Inert ids are
    /// harmless to the draw; they usually mean a typo or someone who left
    /// the event.
    #[must_use]
    pub fn inert_exclusions(&self) -> Vec<(String, String)> {
        let ids: BTreeSet<&str> = self.participants.iter().map(|e| e.id.as_str()).collect();
        let mut inert = Vec::new();

        for entry in &self.participants {
            for excl in &entry.exclusions {
                if !ids.contains(excl.as_str()) {
                    inert.push((entry.id.clone(), excl.clone()));
                }
            }
        }

        inert
    }
}
