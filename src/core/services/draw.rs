//! Draw service - computes gift assignments for a roster
//!
//! A finished draw is a permutation of the participants with no fixed
//! points that also respects every participant's exclusion list. The
//! search is exhaustive: when it fails, no valid assignment exists for
//! the given roster, and retrying cannot change that.

use thiserror::Error;

use crate::core::models::{Assignment, Participant};

/// Errors the draw engine can produce
///
/// Both are deterministic functions of the roster. The only recovery is
/// editing the roster: adding participants or removing exclusions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    /// Fewer than two participants were supplied
    #[error("not enough participants: {found} (a draw needs at least 2)")]
    NotEnoughParticipants {
        /// How many participants were supplied
        found: usize,
    },

    /// Exhaustive search found no assignment satisfying every constraint
    #[error("no assignment satisfies the exclusion constraints")]
    UnsatisfiableConstraints,
}

/// Compute a full set of assignments for the given participants
///
/// Every participant gives to exactly one other participant, nobody draws
/// themselves, and nobody draws someone on their exclusion list. Ids must
/// be unique within the slice; the roster layer enforces that before
/// calling.
///
/// Participants are placed in ascending order of exclusion-list size
/// (roster order within ties), and the returned assignments follow that
/// order. The same roster always yields the same assignments.
///
/// # Examples
///
/// ```
/// use tombola::core::models::Participant;
/// use tombola::core::services::assign;
///
/// let roster = vec![Participant::new("alice"), Participant::new("bob")];
/// let draw = assign(&roster).unwrap();
/// assert_eq!(draw.len(), 2);
/// ```
pub fn assign(participants: &[Participant]) -> Result<Vec<Assignment>, DrawError> {
    if participants.len() < 2 {
        return Err(DrawError::NotEnoughParticipants {
            found: participants.len(),
        });
    }

    // Least-constrained participants first; ties keep roster order.
    let mut ordered: Vec<&Participant> = participants.iter().collect();
    ordered.sort_by_key(|p| p.exclusions.len());

    let mut chosen: Vec<usize> = Vec::with_capacity(ordered.len());
    let mut taken = vec![false; ordered.len()];

    if search(&ordered, &mut chosen, &mut taken) {
        Ok(ordered
            .iter()
            .zip(&chosen)
            .map(|(giver, &idx)| Assignment::new(&giver.id, &ordered[idx].id))
            .collect())
    } else {
        Err(DrawError::UnsatisfiableConstraints)
    }
}

/// Backtracking search for a valid recipient permutation
///
/// `chosen[i]` holds the index in `ordered` of the recipient drawn by
/// `ordered[i]`. Fills positions left to right, trying each recipient that
/// is still free and permitted for the current giver, and undoes the
/// placement when the remainder cannot be completed. Returns true once
/// every position is filled.
fn search(ordered: &[&Participant], chosen: &mut Vec<usize>, taken: &mut [bool]) -> bool {
    let Some(giver) = ordered.get(chosen.len()) else {
        return true;
    };

    for (idx, candidate) in ordered.iter().enumerate() {
        if taken[idx] || !giver.may_draw(candidate) {
            continue;
        }

        taken[idx] = true;
        chosen.push(idx);

        if search(ordered, chosen, taken) {
            return true;
        }

        chosen.pop();
        taken[idx] = false;
    }

    false
}
