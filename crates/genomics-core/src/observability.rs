//! Logging setup and run counters.

use std::sync::Once;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::{FileOutcome, PipelineReport};

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    #[default]
    Pretty,
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info`
/// filter. Later calls are no-ops.
pub fn init_logging(format: LogFormat) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        match format {
            LogFormat::Json => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().json())
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().compact())
                    .init();
            }
        }
    });
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineCounts {
    pub staged: usize,
    pub validated: usize,
    pub rejected: usize,
    pub skipped: usize,
    pub executed: usize,
}

impl PipelineCounts {
    pub fn from_report(report: &PipelineReport) -> Self {
        let mut counts = PipelineCounts::default();
        for file in &report.files {
            if file.staged {
                counts.staged += 1;
            }
            match file.outcome {
                FileOutcome::Executed { .. } => {
                    counts.validated += 1;
                    counts.executed += 1;
                }
                FileOutcome::RecordedOnly { .. } => counts.validated += 1,
                FileOutcome::Rejected { .. } => counts.rejected += 1,
                FileOutcome::Skipped { .. } => counts.skipped += 1,
            }
        }
        counts
    }
}
