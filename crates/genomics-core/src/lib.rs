//! genomics-core
//!
//! ゲノミクスファイル処理パイプラインのローカルシミュレーション。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（FileType, Payload, MetadataRecord, ValidationResult, WorkflowExecution, PipelineReport）
//! - **ports**: 抽象化レイヤー（ObjectStore, MetadataTable, WorkflowEngine, Clock, IdGenerator）
//! - **impls**: ports の in-memory 実装
//! - **functions**: 名前で呼び出す検証関数（FunctionRegistry, Validator）
//! - **app**: AppBuilder と PipelineDriver
//! - **config** / **error** / **observability**: 設定・エラー型・ログ初期化

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod functions;
pub mod impls;
pub mod observability;
pub mod ports;

pub use app::{AppBuilder, PipelineDriver};
pub use config::PipelineConfig;
pub use error::GenomicsError;
