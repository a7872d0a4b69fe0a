//! Per-file pipeline state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of one file as it moves through the driver.
///
/// Transitions:
/// - Staged -> Validating -> Recorded -> Executed
/// - Staged -> Validating -> Rejected
/// - Staged -> Validating -> Skipped (validation function missing)
///
/// A file whose payload was never staged starts at Validating.
/// Recorded is final when the workflow could not be started, so whether a
/// state is final depends on the outcome (see `FileOutcome::final_state`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileState {
    Staged,
    Validating,
    Recorded,
    Executed,
    Rejected,
    Skipped,
}

impl fmt::Display for FileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileState::Staged => "staged",
            FileState::Validating => "validating",
            FileState::Recorded => "recorded",
            FileState::Executed => "executed",
            FileState::Rejected => "rejected",
            FileState::Skipped => "skipped",
        };
        f.write_str(s)
    }
}
