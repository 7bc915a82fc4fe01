//! Participant model
//!
//! One entrant in a draw: an id plus the set of people this entrant must
//! not draw. Exclusions are directional - alice excluding bob says nothing
//! about who bob may draw.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One entrant in a draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier, stable for the duration of one draw
    pub id: String,

    /// Ids this participant must not draw
    ///
    /// Ids that match no participant in the draw are inert: they never
    /// match anyone and never cause an error.
    #[serde(default)]
    pub exclusions: BTreeSet<String>,
}

impl Participant {
    /// Create a participant with no exclusions
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            exclusions: BTreeSet::new(),
        }
    }

    /// Create a participant with an exclusion list
    #[must_use]
    pub fn with_exclusions<I, S>(id: impl Into<String>, exclusions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            exclusions: exclusions.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this participant is allowed to draw `other`
    ///
    /// False for themselves and for anyone on their exclusion list.
    #[must_use]
    pub fn may_draw(&self, other: &Self) -> bool {
        self.id != other.id && !self.exclusions.contains(&other.id)
    }
}
