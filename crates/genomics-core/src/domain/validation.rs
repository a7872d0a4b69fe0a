//! Validation event and result.

use serde::{Deserialize, Serialize};

use super::FileType;

/// Event passed to a registered function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub file: String,
}

impl ValidationEvent {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    Valid,
    Invalid,
}

/// Result of one validation call. Produced fresh per invocation.
///
/// `file_type` is `Some` exactly when `status` is `Valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub status: ValidationStatus,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
    pub file: String,
}

impl ValidationResult {
    pub fn valid(file: impl Into<String>, file_type: FileType) -> Self {
        Self {
            status: ValidationStatus::Valid,
            file_type: Some(file_type),
            file: file.into(),
        }
    }

    pub fn invalid(file: impl Into<String>) -> Self {
        Self {
            status: ValidationStatus::Invalid,
            file_type: None,
            file: file.into(),
        }
    }

    /// The validated type, if the file passed.
    pub fn accepted_type(&self) -> Option<FileType> {
        match self.status {
            ValidationStatus::Valid => self.file_type,
            ValidationStatus::Invalid => None,
        }
    }
}
