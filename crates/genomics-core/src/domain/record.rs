//! Records owned by the stores.

use serde::{Deserialize, Serialize};

use super::{FileType, Payload};

/// Status written to the metadata table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordStatus {
    Validated,
}

/// A row in the metadata table.
///
/// Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub sample_id: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub status: RecordStatus,
}

impl MetadataRecord {
    pub fn validated(sample_id: impl Into<String>, file_type: FileType) -> Self {
        Self {
            sample_id: sample_id.into(),
            file_type,
            status: RecordStatus::Validated,
        }
    }
}

/// An object held by the object store, addressed by `(bucket, key)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub payload: Payload,
}
