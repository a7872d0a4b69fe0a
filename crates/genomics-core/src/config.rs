//! Pipeline configuration.
//!
//! Defaults reproduce the local mock deployment; a JSON file can override
//! any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GenomicsError;

pub const DEFAULT_BUCKET: &str = "raw-genomics-bucket";
pub const DEFAULT_TABLE: &str = "genomics-metadata";
pub const DEFAULT_FUNCTION: &str = "validation-handler";
pub const DEFAULT_WORKFLOW: &str = "GenomicsWorkflow";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Bucket the input files are staged into.
    pub bucket: String,
    /// Metadata table validated samples are written to.
    pub table: String,
    /// Registered validation function name.
    pub function: String,
    /// Workflow started for each validated sample.
    pub workflow: String,
    /// Files processed, in order.
    pub files: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            table: DEFAULT_TABLE.to_string(),
            function: DEFAULT_FUNCTION.to_string(),
            workflow: DEFAULT_WORKFLOW.to_string(),
            files: vec![
                "sample.fastq".to_string(),
                "sample.bam".to_string(),
                "sample.vcf".to_string(),
            ],
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, GenomicsError> {
        let config: Self =
            serde_json::from_str(s).map_err(|e| GenomicsError::Config(format!("json decode: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GenomicsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GenomicsError::Config(format!("read {}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Resource names must be non-empty. An empty file list is allowed.
    pub fn validate(&self) -> Result<(), GenomicsError> {
        for (field, value) in [
            ("bucket", &self.bucket),
            ("table", &self.table),
            ("function", &self.function),
            ("workflow", &self.workflow),
        ] {
            if value.trim().is_empty() {
                return Err(GenomicsError::Config(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}
