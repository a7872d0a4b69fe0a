//! Domain model (file types, payloads, records, validation, workflows, reports).

pub mod file_type;
pub mod ids;
pub mod payload;
pub mod record;
pub mod report;
pub mod state;
pub mod validation;
pub mod workflow;

pub use file_type::FileType;
pub use ids::{ExecutionId, RunId};
pub use payload::Payload;
pub use record::{MetadataRecord, RecordStatus, StoredObject};
pub use report::{
    FileOutcome, FileReport, InputSummary, PipelineReport, Stage, StageState, StageStatus,
};
pub use state::FileState;
pub use validation::{ValidationEvent, ValidationResult, ValidationStatus};
pub use workflow::{ExecutionStatus, WorkflowDefinition, WorkflowExecution};
