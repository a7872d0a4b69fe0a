//! Ports - 抽象化レイヤー
//!
//! パイプラインが依存するクラウドサービスを trait として定義します。
//! ドライバはこの trait 越しにしか触らないので、テストでは
//! `impls` の in-memory 実装を毎回新しく作って差し込めます。
//!
//! - ObjectStore: バケット → (key → payload)
//! - MetadataTable: テーブル → append-only なレコード列
//! - WorkflowEngine: state machine 定義と（模擬的な）実行
//! - Clock / IdGenerator: 実行記録の時刻と ID

pub mod clock;
pub mod id_generator;
pub mod metadata_table;
pub mod object_store;
pub mod workflow_engine;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::metadata_table::MetadataTable;
pub use self::object_store::ObjectStore;
pub use self::workflow_engine::WorkflowEngine;
