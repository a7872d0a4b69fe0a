//! MetadataTable port - append-only なメタデータテーブル

use async_trait::async_trait;

use crate::domain::MetadataRecord;

#[async_trait]
pub trait MetadataTable: Send + Sync {
    /// 空のテーブルを作成（作り直しても既存レコードは残る）
    async fn create_table(&self, name: &str);

    /// `table` の末尾に追記（テーブルが無ければ作成）
    async fn put_item(&self, table: &str, record: MetadataRecord);

    /// 全レコードのコピーを挿入順で返す（テーブルが無ければ空）
    async fn scan(&self, table: &str) -> Vec<MetadataRecord>;
}
