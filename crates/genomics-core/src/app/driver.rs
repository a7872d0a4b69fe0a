//! PipelineDriver - ファイルごとの処理ループ
//!
//! # フロー（ファイル 1 件ごと、入力順）
//! 1. ObjectStore から staged payload を読む（無くても続行）
//! 2. FunctionRegistry の検証関数を `{file}` で呼ぶ
//! 3. VALID: MetadataTable に追記 → WorkflowEngine で実行開始
//! 4. INVALID: 失敗として報告するだけ（テーブルもワークフローも触らない）
//!
//! どのステップの失敗もそのファイルの結果として記録され、
//! ループ自体は止まりません。

use std::sync::Arc;

use serde_json::json;
use tracing::Instrument;

use crate::config::PipelineConfig;
use crate::domain::{
    FileOutcome, FileReport, FileState, MetadataRecord, Payload, PipelineReport, ValidationEvent,
};
use crate::functions::FunctionRegistry;
use crate::ports::{IdGenerator, MetadataTable, ObjectStore, WorkflowEngine};

pub struct PipelineDriver {
    config: PipelineConfig,
    objects: Arc<dyn ObjectStore>,
    metadata: Arc<dyn MetadataTable>,
    functions: Arc<FunctionRegistry>,
    workflows: Arc<dyn WorkflowEngine>,
    ids: Arc<dyn IdGenerator>,
}

impl PipelineDriver {
    pub fn new(
        config: PipelineConfig,
        objects: Arc<dyn ObjectStore>,
        metadata: Arc<dyn MetadataTable>,
        functions: Arc<FunctionRegistry>,
        workflows: Arc<dyn WorkflowEngine>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            config,
            objects,
            metadata,
            functions,
            workflows,
            ids,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn object_store(&self) -> &Arc<dyn ObjectStore> {
        &self.objects
    }

    pub fn metadata_table(&self) -> &Arc<dyn MetadataTable> {
        &self.metadata
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    pub fn workflow_engine(&self) -> &Arc<dyn WorkflowEngine> {
        &self.workflows
    }

    /// 設定されたバケットに `key` で payload を置く
    pub async fn stage(&self, key: &str, payload: Payload) {
        tracing::info!(bucket = %self.config.bucket, key, size = payload.len(), "staged file");
        self.objects
            .put_object(&self.config.bucket, key, payload)
            .await;
    }

    /// config のファイル一覧を処理
    pub async fn run(&self) -> PipelineReport {
        self.run_files(&self.config.files).await
    }

    /// `files` を入力順に 1 件ずつ処理し、各ファイルの結果をまとめて返す
    ///
    /// `outputs` はこの実行で追記されたレコードだけ（以前の実行分は含まない）。
    pub async fn run_files<S: AsRef<str>>(&self, files: &[S]) -> PipelineReport {
        let run_id = self.ids.generate_run_id();
        let span = tracing::info_span!(
            "pipeline",
            run_id = %run_id,
            bucket = %self.config.bucket,
            table = %self.config.table
        );

        async {
            let before = self.metadata.scan(&self.config.table).await.len();

            let mut reports = Vec::with_capacity(files.len());
            for file in files {
                reports.push(self.process_file(file.as_ref()).await);
            }

            let table = self.metadata.scan(&self.config.table).await;
            let total = table.len();
            let outputs: Vec<MetadataRecord> = table.into_iter().skip(before).collect();
            tracing::info!(
                files = reports.len(),
                appended = outputs.len(),
                table_size = total,
                "pipeline finished"
            );
            PipelineReport::new(run_id, reports, outputs)
        }
        .instrument(span)
        .await
    }

    async fn process_file(&self, file: &str) -> FileReport {
        tracing::info!(file, "processing file");
        let mut trail = Vec::new();

        // The payload itself is unused; only its presence and size are reported.
        let payload = self.objects.get_object(&self.config.bucket, file).await;
        let size = payload.as_ref().map(Payload::len);
        if payload.is_some() {
            trail.push(FileState::Staged);
        } else {
            tracing::warn!(file, bucket = %self.config.bucket, "file is not staged, validating by name");
        }

        trail.push(FileState::Validating);
        let event = ValidationEvent::new(file);
        let outcome = match self.functions.invoke(&self.config.function, &event) {
            Err(err) => {
                tracing::warn!(file, error = %err, "validation skipped");
                trail.push(FileState::Skipped);
                FileOutcome::Skipped {
                    reason: err.to_string(),
                }
            }
            Ok(result) => {
                tracing::info!(
                    file,
                    status = ?result.status,
                    file_type = ?result.file_type,
                    "validation result"
                );
                match result.accepted_type() {
                    None => {
                        tracing::warn!(file, "file failed validation");
                        trail.push(FileState::Rejected);
                        FileOutcome::Rejected { result }
                    }
                    Some(file_type) => {
                        let record = MetadataRecord::validated(file, file_type);
                        self.metadata
                            .put_item(&self.config.table, record.clone())
                            .await;
                        trail.push(FileState::Recorded);
                        self.execute(file, record, &mut trail).await
                    }
                }
            }
        };

        tracing::debug!(file, state = %outcome.final_state(), "file done");

        FileReport {
            file: file.to_string(),
            staged: payload.is_some(),
            size,
            trail,
            outcome,
        }
    }

    async fn execute(
        &self,
        file: &str,
        record: MetadataRecord,
        trail: &mut Vec<FileState>,
    ) -> FileOutcome {
        match self
            .workflows
            .start_execution(&self.config.workflow, json!({ "input": file }))
            .await
        {
            Ok(execution) => {
                tracing::info!(
                    file,
                    workflow = %execution.workflow,
                    execution_id = %execution.execution_id,
                    status = ?execution.status,
                    "workflow result"
                );
                trail.push(FileState::Executed);
                FileOutcome::Executed { record, execution }
            }
            Err(err) => {
                tracing::warn!(file, error = %err, "workflow not started");
                FileOutcome::RecordedOnly {
                    record,
                    reason: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::samples::stage_samples;
    use crate::app::AppBuilder;
    use crate::domain::{
        ExecutionStatus, FileType, Stage, StageState, ValidationResult, ValidationStatus,
    };
    use crate::functions::SuffixValidator;
    use crate::impls::{InMemoryMetadataTable, InMemoryObjectStore, InMemoryWorkflowEngine};
    use crate::ports::{SystemClock, UlidGenerator};

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    async fn local_driver() -> PipelineDriver {
        AppBuilder::local(PipelineConfig::default())
            .build()
            .await
            .unwrap()
    }

    /// レジストリを未完成のまま組むための手組みドライバ
    fn bare_driver(functions: FunctionRegistry, workflows: InMemoryWorkflowEngine) -> PipelineDriver {
        PipelineDriver::new(
            PipelineConfig::default(),
            Arc::new(InMemoryObjectStore::new()),
            Arc::new(InMemoryMetadataTable::new()),
            Arc::new(functions),
            Arc::new(workflows),
            Arc::new(UlidGenerator::new(SystemClock)),
        )
    }

    #[tokio::test]
    async fn end_to_end_records_valid_files_in_order() {
        let driver = local_driver().await;
        stage_samples(&driver).await;
        driver.stage("notes.txt", Payload::from("just notes")).await;

        let report = driver
            .run_files(&files(&["sample.fastq", "sample.bam", "sample.vcf", "notes.txt"]))
            .await;

        let types: Vec<FileType> = report.outputs.iter().map(|r| r.file_type).collect();
        assert_eq!(types, vec![FileType::Fastq, FileType::Bam, FileType::Vcf]);
        assert_eq!(
            driver.metadata_table().scan("genomics-metadata").await,
            report.outputs
        );
        assert_eq!(report.rejected_files(), vec!["notes.txt"]);

        let executions = driver.workflow_engine().executions("GenomicsWorkflow").await;
        assert_eq!(executions.len(), 3);
        assert!(executions.iter().all(|e| e.status == ExecutionStatus::Succeeded));
        let inputs: Vec<&serde_json::Value> = executions.iter().map(|e| &e.input).collect();
        assert_eq!(
            inputs,
            vec![
                &json!({ "input": "sample.fastq" }),
                &json!({ "input": "sample.bam" }),
                &json!({ "input": "sample.vcf" }),
            ]
        );
    }

    #[tokio::test]
    async fn rejected_file_leaves_table_and_workflow_untouched() {
        let driver = local_driver().await;

        let report = driver.run_files(&files(&["notes.txt", "readme.md"])).await;

        assert!(report.outputs.is_empty());
        assert!(driver
            .workflow_engine()
            .executions("GenomicsWorkflow")
            .await
            .is_empty());
        match &report.files[0].outcome {
            FileOutcome::Rejected { result } => {
                assert_eq!(result, &ValidationResult::invalid("notes.txt"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert_eq!(report.status_of(Stage::Validation), Some(StageState::Failed));
    }

    #[tokio::test]
    async fn record_order_follows_input_order() {
        let driver = local_driver().await;

        let report = driver
            .run_files(&files(&["c.vcf", "x.txt", "a.bam", "b.fastq"]))
            .await;

        let ids: Vec<&str> = report.outputs.iter().map(|r| r.sample_id.as_str()).collect();
        assert_eq!(ids, vec!["c.vcf", "a.bam", "b.fastq"]);
    }

    #[tokio::test]
    async fn unstaged_file_is_still_validated() {
        let driver = local_driver().await;

        let report = driver.run_files(&files(&["ghost.vcf"])).await;

        let file = &report.files[0];
        assert!(!file.staged);
        assert_eq!(file.size, None);
        assert_eq!(
            file.trail,
            vec![FileState::Validating, FileState::Recorded, FileState::Executed]
        );
        assert_eq!(report.status_of(Stage::Staging), Some(StageState::Failed));
        assert_eq!(report.outputs.len(), 1);
    }

    #[tokio::test]
    async fn staged_file_reports_size_and_full_trail() {
        let driver = local_driver().await;
        stage_samples(&driver).await;

        let report = driver.run().await;

        assert_eq!(report.files.len(), 3);
        assert!(report.files.iter().all(|f| f.staged));
        assert_eq!(report.files[1].size, Some(15));
        assert_eq!(
            report.files[0].trail,
            vec![
                FileState::Staged,
                FileState::Validating,
                FileState::Recorded,
                FileState::Executed
            ]
        );
        assert!(report
            .pipeline_status
            .iter()
            .all(|s| s.status == StageState::Completed));
        assert_eq!(report.executions().count(), 3);
    }

    #[tokio::test]
    async fn missing_function_skips_every_file_without_aborting() {
        let workflows = InMemoryWorkflowEngine::new();
        let driver = bare_driver(FunctionRegistry::new(), workflows);

        let report = driver.run_files(&files(&["a.vcf", "b.bam"])).await;

        assert_eq!(report.files.len(), 2);
        for file in &report.files {
            assert_eq!(file.final_state(), Some(FileState::Skipped));
            assert!(matches!(
                &file.outcome,
                FileOutcome::Skipped { reason } if reason.contains("validation-handler")
            ));
        }
        assert!(report.outputs.is_empty());
        assert_eq!(report.status_of(Stage::Validation), Some(StageState::NotRun));
    }

    #[tokio::test]
    async fn missing_workflow_keeps_the_record() {
        let mut functions = FunctionRegistry::new();
        functions.register("validation-handler", SuffixValidator);
        let driver = bare_driver(functions, InMemoryWorkflowEngine::new());

        let report = driver.run_files(&files(&["a.vcf", "b.bam"])).await;

        assert_eq!(report.outputs.len(), 2);
        for file in &report.files {
            assert_eq!(file.final_state(), Some(FileState::Recorded));
            assert_eq!(file.outcome.final_state(), FileState::Recorded);
            assert!(matches!(file.outcome, FileOutcome::RecordedOnly { .. }));
        }
        assert_eq!(report.status_of(Stage::Workflow), Some(StageState::Failed));
    }

    #[tokio::test]
    async fn valid_status_without_type_is_treated_as_rejected() {
        let mut functions = FunctionRegistry::new();
        functions.register("validation-handler", |event: &ValidationEvent| ValidationResult {
            status: ValidationStatus::Valid,
            file_type: None,
            file: event.file.clone(),
        });
        let driver = bare_driver(functions, InMemoryWorkflowEngine::new());

        let report = driver.run_files(&files(&["a.vcf"])).await;

        assert!(report.outputs.is_empty());
        assert_eq!(report.files[0].final_state(), Some(FileState::Rejected));
    }

    #[tokio::test]
    async fn repeated_runs_append_to_the_table() {
        let driver = local_driver().await;

        let first = driver.run_files(&files(&["a.vcf"])).await;
        let second = driver.run_files(&files(&["b.bam"])).await;

        let ids = |records: &[MetadataRecord]| -> Vec<String> {
            records.iter().map(|r| r.sample_id.clone()).collect()
        };
        assert_eq!(ids(&first.outputs), vec!["a.vcf"]);
        assert_eq!(ids(&second.outputs), vec!["b.bam"]);
        assert_eq!(
            ids(&driver.metadata_table().scan("genomics-metadata").await),
            vec!["a.vcf", "b.bam"]
        );
        assert_eq!(second.status_of(Stage::Metadata), Some(StageState::Completed));
    }

    /// put_item を受け付けても何も保存しないテーブル
    struct DroppingTable;

    #[async_trait::async_trait]
    impl MetadataTable for DroppingTable {
        async fn create_table(&self, _name: &str) {}

        async fn put_item(&self, _table: &str, _record: MetadataRecord) {}

        async fn scan(&self, _table: &str) -> Vec<MetadataRecord> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn lost_writes_fail_the_metadata_stage() {
        let driver = AppBuilder::local(PipelineConfig::default())
            .with_metadata_table(Arc::new(DroppingTable))
            .build()
            .await
            .unwrap();

        let report = driver.run_files(&files(&["a.vcf", "b.bam"])).await;

        assert!(report.outputs.is_empty());
        assert_eq!(report.status_of(Stage::Validation), Some(StageState::Completed));
        assert_eq!(report.status_of(Stage::Metadata), Some(StageState::Failed));
    }

    #[tokio::test]
    async fn empty_input_is_a_no_op() {
        let driver = local_driver().await;

        let report = driver.run_files::<String>(&[]).await;

        assert!(report.files.is_empty());
        assert!(report
            .pipeline_status
            .iter()
            .all(|s| s.status == StageState::NotRun));
    }
}
