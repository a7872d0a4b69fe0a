//! InMemoryWorkflowEngine - 常に成功するワークフロー実行のシミュレーション
//!
//! state machine の中身は解釈しません。start_execution は定義の有無だけを
//! 確認し、入力をそのまま持った SUCCEEDED の実行結果を返します。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ExecutionStatus, WorkflowDefinition, WorkflowExecution};
use crate::error::GenomicsError;
use crate::ports::{Clock, IdGenerator, SystemClock, UlidGenerator, WorkflowEngine};

#[derive(Default)]
struct WorkflowState {
    definitions: HashMap<String, WorkflowDefinition>,
    executions: HashMap<String, Vec<WorkflowExecution>>,
}

pub struct InMemoryWorkflowEngine {
    state: Mutex<WorkflowState>,
    clock: Arc<dyn Clock>,
    ids: UlidGenerator<Arc<dyn Clock>>,
}

impl InMemoryWorkflowEngine {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(WorkflowState::default()),
            ids: UlidGenerator::new(Arc::clone(&clock)),
            clock,
        }
    }
}

impl Default for InMemoryWorkflowEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WorkflowEngine for InMemoryWorkflowEngine {
    async fn create_state_machine(&self, name: &str, definition: WorkflowDefinition) {
        tracing::debug!(workflow = name, states = ?definition.states, "created state machine");
        self.state
            .lock()
            .await
            .definitions
            .insert(name.to_string(), definition);
    }

    async fn start_execution(
        &self,
        name: &str,
        input: serde_json::Value,
    ) -> Result<WorkflowExecution, GenomicsError> {
        let mut state = self.state.lock().await;
        if !state.definitions.contains_key(name) {
            return Err(GenomicsError::WorkflowNotFound(name.to_string()));
        }

        let execution = WorkflowExecution {
            execution_id: self.ids.generate_execution_id(),
            workflow: name.to_string(),
            status: ExecutionStatus::Succeeded,
            input,
            started_at: self.clock.now(),
        };
        tracing::debug!(workflow = name, execution_id = %execution.execution_id, "started execution");

        state
            .executions
            .entry(name.to_string())
            .or_default()
            .push(execution.clone());
        Ok(execution)
    }

    async fn definition(&self, name: &str) -> Option<WorkflowDefinition> {
        self.state.lock().await.definitions.get(name).cloned()
    }

    async fn executions(&self, name: &str) -> Vec<WorkflowExecution> {
        self.state
            .lock()
            .await
            .executions
            .get(name)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedClock;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[tokio::test]
    async fn start_always_succeeds_and_echoes_input() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let engine = InMemoryWorkflowEngine::with_clock(Arc::new(FixedClock::new(at)));
        engine
            .create_state_machine("wf", WorkflowDefinition::genomics())
            .await;

        for input in [json!({ "input": "sample.vcf" }), json!(null), json!([1, 2, 3])] {
            let execution = engine.start_execution("wf", input.clone()).await.unwrap();
            assert_eq!(execution.status, ExecutionStatus::Succeeded);
            assert_eq!(execution.input, input);
            assert_eq!(execution.started_at, at);
        }
        assert_eq!(engine.executions("wf").await.len(), 3);
    }

    #[tokio::test]
    async fn start_undefined_workflow_is_not_found() {
        let engine = InMemoryWorkflowEngine::new();
        let err = engine.start_execution("missing", json!({})).await.unwrap_err();
        assert!(matches!(err, GenomicsError::WorkflowNotFound(name) if name == "missing"));
        assert!(engine.executions("missing").await.is_empty());
    }

    #[tokio::test]
    async fn redefinition_overwrites_but_keeps_history() {
        let engine = InMemoryWorkflowEngine::new();
        engine.create_state_machine("wf", WorkflowDefinition::genomics()).await;
        engine.start_execution("wf", json!({})).await.unwrap();

        engine
            .create_state_machine("wf", WorkflowDefinition::new(["OnlyState"]))
            .await;

        assert_eq!(
            engine.definition("wf").await,
            Some(WorkflowDefinition::new(["OnlyState"]))
        );
        assert_eq!(engine.executions("wf").await.len(), 1);
    }
}
