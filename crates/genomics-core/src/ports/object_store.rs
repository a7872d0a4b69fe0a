//! ObjectStore port - バケット単位のオブジェクトストア
//!
//! NotFound はエラーではなく `None` で表現します。

use async_trait::async_trait;

use crate::domain::Payload;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// 空のバケットを作成（作り直しても既存オブジェクトは残る）
    async fn create_bucket(&self, name: &str);

    /// `key` を追加または上書き（バケットが無ければ作成）
    async fn put_object(&self, bucket: &str, key: &str, payload: Payload);

    /// バケットが無くても key が無くても `None`
    async fn get_object(&self, bucket: &str, key: &str) -> Option<Payload>;

    async fn bucket_exists(&self, name: &str) -> bool;

    /// `bucket` 内のオブジェクト数（無ければ 0）
    async fn object_count(&self, bucket: &str) -> usize;
}
