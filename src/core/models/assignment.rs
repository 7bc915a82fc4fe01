//! Assignment model
//!
//! One line of a finished draw: who gives to whom.

use serde::{Deserialize, Serialize};

/// One giver/recipient pair produced by a draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The giver
    pub participant_id: String,

    /// The participant the giver gives a gift to
    pub drawn_id: String,
}

impl Assignment {
    /// Create an assignment
    #[must_use]
    pub fn new(participant_id: impl Into<String>, drawn_id: impl Into<String>) -> Self {
        Self {
            participant_id: participant_id.into(),
            drawn_id: drawn_id.into(),
        }
    }
}
