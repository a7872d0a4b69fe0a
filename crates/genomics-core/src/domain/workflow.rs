//! Workflow definitions and simulated executions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ExecutionId;

/// Structural definition of a workflow: an ordered list of named states.
///
/// The simulation stores it but never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    #[serde(rename = "States")]
    pub states: Vec<String>,
}

impl WorkflowDefinition {
    pub fn new<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            states: states.into_iter().map(Into::into).collect(),
        }
    }

    /// `ValidateFile -> ProcessVariants`
    pub fn genomics() -> Self {
        Self::new(["ValidateFile", "ProcessVariants"])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    Succeeded,
}

/// Result of `start_execution`. Returned to the caller only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowExecution {
    pub execution_id: ExecutionId,
    pub workflow: String,
    pub status: ExecutionStatus,
    pub input: serde_json::Value,
    pub started_at: DateTime<Utc>,
}
