//! AppBuilder - パイプラインの構築とワイヤリング
//!
//! # Fail-fast 設計
//! - config で指定された検証関数が登録されていなければ build() でエラー
//! - config で指定されたワークフローが定義されていなければ build() でエラー
//! - どちらも実行中に気付くより起動時に気付くほうが分かりやすい

use std::sync::Arc;

use crate::app::PipelineDriver;
use crate::config::PipelineConfig;
use crate::domain::WorkflowDefinition;
use crate::error::GenomicsError;
use crate::functions::{FunctionRegistry, SuffixValidator, Validator};
use crate::impls::{InMemoryMetadataTable, InMemoryObjectStore, InMemoryWorkflowEngine};
use crate::ports::{Clock, MetadataTable, ObjectStore, SystemClock, UlidGenerator, WorkflowEngine};

/// # 使用例
/// ```ignore
/// let driver = AppBuilder::local(PipelineConfig::default())
///     .build()
///     .await?;
/// let report = driver.run().await;
/// ```
pub struct AppBuilder {
    config: PipelineConfig,
    objects: Arc<dyn ObjectStore>,
    metadata: Arc<dyn MetadataTable>,
    workflows: Option<Arc<dyn WorkflowEngine>>,
    functions: FunctionRegistry,
    definitions: Vec<(String, WorkflowDefinition)>,
    clock: Arc<dyn Clock>,
}

impl AppBuilder {
    /// インメモリ実装のみ、関数もワークフローも未登録
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            objects: Arc::new(InMemoryObjectStore::new()),
            metadata: Arc::new(InMemoryMetadataTable::new()),
            workflows: None,
            functions: FunctionRegistry::new(),
            definitions: Vec::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// インメモリ実装 + config の名前で suffix 検証関数と genomics ワークフローを登録
    pub fn local(config: PipelineConfig) -> Self {
        let function = config.function.clone();
        let workflow = config.workflow.clone();
        Self::new(config)
            .register_function(function, SuffixValidator)
            .define_workflow(workflow, WorkflowDefinition::genomics())
    }

    pub fn with_object_store(mut self, objects: Arc<dyn ObjectStore>) -> Self {
        self.objects = objects;
        self
    }

    pub fn with_metadata_table(mut self, metadata: Arc<dyn MetadataTable>) -> Self {
        self.metadata = metadata;
        self
    }

    /// `build()` が作るインメモリエンジンの代わりに使う
    pub fn with_workflow_engine(mut self, workflows: Arc<dyn WorkflowEngine>) -> Self {
        self.workflows = Some(workflows);
        self
    }

    /// run/execution ID と実行時刻に使う Clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn register_function<V: Validator + 'static>(
        mut self,
        name: impl Into<String>,
        validator: V,
    ) -> Self {
        self.functions.register(name, validator);
        self
    }

    /// `build()` まで保留し、呼び出し順に適用
    pub fn define_workflow(mut self, name: impl Into<String>, definition: WorkflowDefinition) -> Self {
        self.definitions.push((name.into(), definition));
        self
    }

    /// バケット・テーブル・ワークフロー定義を作成し、config の関数と
    /// ワークフローが揃っていることを確認してからドライバを返す
    pub async fn build(self) -> Result<PipelineDriver, GenomicsError> {
        self.config.validate()?;

        if !self.functions.contains(&self.config.function) {
            return Err(GenomicsError::FunctionNotFound(self.config.function));
        }

        let workflows = self.workflows.unwrap_or_else(|| {
            Arc::new(InMemoryWorkflowEngine::with_clock(Arc::clone(&self.clock)))
        });
        for (name, definition) in self.definitions {
            workflows.create_state_machine(&name, definition).await;
        }
        if workflows.definition(&self.config.workflow).await.is_none() {
            return Err(GenomicsError::WorkflowNotFound(self.config.workflow));
        }

        self.objects.create_bucket(&self.config.bucket).await;
        self.metadata.create_table(&self.config.table).await;

        tracing::info!(
            bucket = %self.config.bucket,
            table = %self.config.table,
            function = %self.config.function,
            workflow = %self.config.workflow,
            "pipeline wired"
        );

        Ok(PipelineDriver::new(
            self.config,
            self.objects,
            self.metadata,
            Arc::new(self.functions),
            workflows,
            Arc::new(UlidGenerator::new(self.clock)),
        ))
    }
}
