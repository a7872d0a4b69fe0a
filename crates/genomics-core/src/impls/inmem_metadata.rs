//! InMemoryMetadataTable - append-only テーブルの開発用実装

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::MetadataRecord;
use crate::ports::MetadataTable;

#[derive(Default)]
pub struct InMemoryMetadataTable {
    tables: Mutex<HashMap<String, Vec<MetadataRecord>>>,
}

impl InMemoryMetadataTable {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MetadataTable for InMemoryMetadataTable {
    async fn create_table(&self, name: &str) {
        self.tables.lock().await.entry(name.to_string()).or_default();
        tracing::debug!(table = name, "created table");
    }

    async fn put_item(&self, table: &str, record: MetadataRecord) {
        tracing::debug!(table, sample_id = %record.sample_id, file_type = %record.file_type, "put item");
        self.tables
            .lock()
            .await
            .entry(table.to_string())
            .or_default()
            .push(record);
    }

    async fn scan(&self, table: &str) -> Vec<MetadataRecord> {
        self.tables
            .lock()
            .await
            .get(table)
            .cloned()
            .unwrap_or_default()
    }
}
