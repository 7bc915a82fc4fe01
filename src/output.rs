//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a successful draw
#[derive(Debug, Serialize)]
pub struct DrawReport {
    /// Display name of the gift exchange, if the roster names one
    pub event: Option<String>,
    /// When the draw was made (RFC 3339)
    pub drawn_at: String,
    /// Giver/recipient pairs, one per participant
    pub assignments: Vec<AssignmentLine>,
}

/// One rendered giver/recipient pair
#[derive(Debug, Serialize)]
pub struct AssignmentLine {
    /// The giver
    pub participant: String,
    /// Who the giver gives a gift to
    pub recipient: String,
}

impl DrawReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match &self.event {
            Some(event) => println!(
                "Drew {} assignment(s) for \"{event}\":\n",
                self.assignments.len()
            ),
            None => println!("Drew {} assignment(s):\n", self.assignments.len()),
        }

        let width = self
            .assignments
            .iter()
            .map(|a| a.participant.len())
            .max()
            .unwrap_or(0);

        for a in &self.assignments {
            println!("  {:width$} -> {}", a.participant, a.recipient);
        }

        println!("\nEach participant gives to the name on the right.");
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a draw that could not be completed
#[derive(Debug, Serialize)]
pub struct DrawFailure {
    /// What went wrong
    pub error: String,
    /// What the organizer can do about it
    pub hint: String,
}

impl DrawFailure {
    /// Render the failure based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("DRAW FAILED: {}", self.error);
        println!("\n{}", self.hint);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a roster check
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Whether the roster can be drawn as-is
    pub ok: bool,
    /// Number of participants in the roster
    pub participants: usize,
    /// Problems that must be fixed before drawing
    pub errors: Vec<String>,
    /// Harmless oddities worth a look
    pub warnings: Vec<String>,
    /// Whether a valid assignment exists for the current exclusions
    /// (absent when errors prevented the dry run)
    pub feasible: Option<bool>,
}

impl CheckReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Checked roster: {} participant(s)\n", self.participants);

        if !self.warnings.is_empty() {
            println!("Warnings:");
            for w in &self.warnings {
                println!("  {w}");
            }
            println!();
        }

        if !self.errors.is_empty() {
            println!("Errors:");
            for e in &self.errors {
                println!("  {e}");
            }
            println!();
        }

        match self.feasible {
            Some(true) => println!("Roster is drawable."),
            Some(false) => {
                println!("UNDRAWABLE: no assignment satisfies the exclusion constraints.");
                println!("Remove an exclusion or add participants, then check again.");
            },
            None => println!("Fix the errors above, then check again."),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of an init operation
#[derive(Debug, Serialize)]
pub struct InitReport {
    /// Path of the roster file that was written
    pub created: String,
}

impl InitReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Created {}", self.created);
        println!("Edit the participant list, then run 'tombola draw'.");
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
