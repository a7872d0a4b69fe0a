//! WorkflowEngine port - state machine の定義と実行
//!
//! 実行は模擬的なもので、定義済みのワークフローなら入力に関係なく
//! 常に SUCCEEDED を返します。

use async_trait::async_trait;

use crate::domain::{WorkflowDefinition, WorkflowExecution};
use crate::error::GenomicsError;

#[async_trait]
pub trait WorkflowEngine: Send + Sync {
    /// `name` で定義を保存（既存の定義は置き換え）
    async fn create_state_machine(&self, name: &str, definition: WorkflowDefinition);

    /// 実行を開始。失敗するのは `name` が未定義のときだけ
    async fn start_execution(
        &self,
        name: &str,
        input: serde_json::Value,
    ) -> Result<WorkflowExecution, GenomicsError>;

    async fn definition(&self, name: &str) -> Option<WorkflowDefinition>;

    /// `name` で開始された実行の履歴（古い順）
    async fn executions(&self, name: &str) -> Vec<WorkflowExecution>;
}
