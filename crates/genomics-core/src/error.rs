use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenomicsError {
    #[error("function not found: {0}")]
    FunctionNotFound(String),

    #[error("workflow not found: {0}")]
    WorkflowNotFound(String),

    #[error("invalid config: {0}")]
    Config(String),
}
