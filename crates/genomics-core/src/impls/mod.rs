//! Impls - ports の in-memory 実装
//!
//! # 含まれる実装
//! - **InMemoryObjectStore**: バケット → key → payload
//! - **InMemoryMetadataTable**: テーブル → Vec<MetadataRecord>
//! - **InMemoryWorkflowEngine**: 定義の保存と常に成功する実行
//!
//! どれもプロセス終了とともに消えます。各ストアは自分の Mutex を
//! 持つので、共有されてもストア単位で排他されます。

pub mod inmem_metadata;
pub mod inmem_object_store;
pub mod inmem_workflow;

pub use self::inmem_metadata::InMemoryMetadataTable;
pub use self::inmem_object_store::InMemoryObjectStore;
pub use self::inmem_workflow::InMemoryWorkflowEngine;
