//! Pipeline run report.
//!
//! Shape follows what the dashboard consumes: `inputs`, `outputs` and
//! `pipeline_status`, plus the per-file detail the driver produced.

use serde::{Deserialize, Serialize};

use super::{FileState, FileType, MetadataRecord, RunId, ValidationResult, WorkflowExecution};

/// How one file left the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Validated, recorded, workflow started.
    Executed {
        record: MetadataRecord,
        execution: WorkflowExecution,
    },
    /// Validated and recorded, but the workflow could not be started.
    RecordedOnly {
        record: MetadataRecord,
        reason: String,
    },
    /// Validation classified the file as INVALID.
    Rejected { result: ValidationResult },
    /// Validation could not run (e.g. function not registered).
    Skipped { reason: String },
}

impl FileOutcome {
    pub fn record(&self) -> Option<&MetadataRecord> {
        match self {
            FileOutcome::Executed { record, .. } | FileOutcome::RecordedOnly { record, .. } => {
                Some(record)
            }
            FileOutcome::Rejected { .. } | FileOutcome::Skipped { .. } => None,
        }
    }

    pub fn execution(&self) -> Option<&WorkflowExecution> {
        match self {
            FileOutcome::Executed { execution, .. } => Some(execution),
            _ => None,
        }
    }

    /// State the file ends in. `Recorded` is final when the workflow did not start.
    pub fn final_state(&self) -> FileState {
        match self {
            FileOutcome::Executed { .. } => FileState::Executed,
            FileOutcome::RecordedOnly { .. } => FileState::Recorded,
            FileOutcome::Rejected { .. } => FileState::Rejected,
            FileOutcome::Skipped { .. } => FileState::Skipped,
        }
    }
}

/// Per-file detail of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    /// Whether a payload was found in the object store.
    pub staged: bool,
    pub size: Option<usize>,
    /// States visited, in order.
    pub trail: Vec<FileState>,
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn final_state(&self) -> Option<FileState> {
        self.trail.last().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSummary {
    pub filename: String,
    #[serde(rename = "type")]
    pub file_type: Option<FileType>,
    pub size: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Staging,
    Validation,
    Metadata,
    Workflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageState {
    Completed,
    Partial,
    Failed,
    NotRun,
}

impl StageState {
    fn grade(done: usize, total: usize) -> Self {
        if total == 0 {
            StageState::NotRun
        } else if done == total {
            StageState::Completed
        } else if done == 0 {
            StageState::Failed
        } else {
            StageState::Partial
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageStatus {
    pub stage: Stage,
    pub status: StageState,
}

/// Summary of one pass over the input files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub run_id: RunId,
    pub inputs: Vec<InputSummary>,
    /// Records this run appended to the metadata table, in append order.
    pub outputs: Vec<MetadataRecord>,
    pub pipeline_status: Vec<StageStatus>,
    pub files: Vec<FileReport>,
}

impl PipelineReport {
    /// `outputs` must hold only the records appended during this run; the
    /// Metadata stage compares them against the files that reached `Recorded`.
    pub fn new(run_id: RunId, files: Vec<FileReport>, outputs: Vec<MetadataRecord>) -> Self {
        let inputs = files
            .iter()
            .map(|f| InputSummary {
                filename: f.file.clone(),
                file_type: f.outcome.record().map(|r| r.file_type),
                size: f.size,
            })
            .collect();

        let total = files.len();
        let staged = files.iter().filter(|f| f.staged).count();
        let validated_calls = files
            .iter()
            .filter(|f| !matches!(f.outcome, FileOutcome::Skipped { .. }))
            .count();
        let recorded = files.iter().filter(|f| f.outcome.record().is_some()).count();
        let executed = files.iter().filter(|f| f.outcome.execution().is_some()).count();

        let pipeline_status = vec![
            StageStatus {
                stage: Stage::Staging,
                status: StageState::grade(staged, total),
            },
            StageStatus {
                stage: Stage::Validation,
                status: StageState::grade(recorded, validated_calls),
            },
            StageStatus {
                stage: Stage::Metadata,
                status: StageState::grade(outputs.len().min(recorded), recorded),
            },
            StageStatus {
                stage: Stage::Workflow,
                status: StageState::grade(executed, recorded),
            },
        ];

        Self {
            run_id,
            inputs,
            outputs,
            pipeline_status,
            files,
        }
    }

    pub fn status_of(&self, stage: Stage) -> Option<StageState> {
        self.pipeline_status
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.status)
    }

    pub fn executions(&self) -> impl Iterator<Item = &WorkflowExecution> {
        self.files.iter().filter_map(|f| f.outcome.execution())
    }

    pub fn rejected_files(&self) -> Vec<&str> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Rejected { .. }))
            .map(|f| f.file.as_str())
            .collect()
    }
}
