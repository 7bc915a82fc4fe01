//! Draw verification - audits a finished draw against its roster
//!
//! Checks the guarantees every draw must satisfy: each participant gives
//! exactly once and receives exactly once, nobody draws themselves, and
//! nobody draws someone on their exclusion list.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::models::{Assignment, Participant};

/// A single way in which a draw fails its guarantees
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A roster participant has no assignment
    MissingGiver(String),

    /// A participant appears as giver more than once
    DuplicateGiver(String),

    /// An assignment names a giver that is not in the roster
    UnknownGiver(String),

    /// A roster participant is never drawn by anyone
    NeverDrawn(String),

    /// A participant is drawn more than once
    DuplicateRecipient(String),

    /// An assignment names a recipient that is not in the roster
    UnknownRecipient(String),

    /// A participant drew themselves
    SelfAssignment(String),

    /// A participant drew someone on their exclusion list
    ExcludedRecipient {
        /// The giver whose exclusion list was violated
        participant: String,
        /// The excluded id that was drawn anyway
        drawn: String,
    },
}

/// List every violation in a draw for the given roster
///
/// An empty result means the draw is a valid constrained derangement:
/// a bijection over the roster with no fixed points that respects every
/// exclusion list.
#[must_use]
pub fn verify_draw(participants: &[Participant], assignments: &[Assignment]) -> Vec<Violation> {
    let mut violations = Vec::new();

    let by_id: BTreeMap<&str, &Participant> =
        participants.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut givers: BTreeSet<&str> = BTreeSet::new();
    let mut drawn: BTreeSet<&str> = BTreeSet::new();

    for a in assignments {
        match by_id.get(a.participant_id.as_str()) {
            None => violations.push(Violation::UnknownGiver(a.participant_id.clone())),
            Some(giver) => {
                if a.drawn_id == a.participant_id {
                    violations.push(Violation::SelfAssignment(a.participant_id.clone()));
                } else if giver.exclusions.contains(&a.drawn_id) {
                    violations.push(Violation::ExcludedRecipient {
                        participant: a.participant_id.clone(),
                        drawn: a.drawn_id.clone(),
                    });
                }
            },
        }

        if !givers.insert(a.participant_id.as_str()) {
            violations.push(Violation::DuplicateGiver(a.participant_id.clone()));
        }

        if !by_id.contains_key(a.drawn_id.as_str()) {
            violations.push(Violation::UnknownRecipient(a.drawn_id.clone()));
        }

        if !drawn.insert(a.drawn_id.as_str()) {
            violations.push(Violation::DuplicateRecipient(a.drawn_id.clone()));
        }
    }

    for p in participants {
        if !givers.contains(p.id.as_str()) {
            violations.push(Violation::MissingGiver(p.id.clone()));
        }
        if !drawn.contains(p.id.as_str()) {
            violations.push(Violation::NeverDrawn(p.id.clone()));
        }
    }

    violations
}

/// Whether a draw satisfies every guarantee for the given roster
#[must_use]
pub fn is_valid_draw(participants: &[Participant], assignments: &[Assignment]) -> bool {
    verify_draw(participants, assignments).is_empty()
}
