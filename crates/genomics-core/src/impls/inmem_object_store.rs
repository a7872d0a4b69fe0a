//! InMemoryObjectStore - 開発用のオブジェクトストア

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Payload, StoredObject};
use crate::ports::ObjectStore;

/// HashMap<bucket, HashMap<key, payload>> を Mutex で守るだけの実装
#[derive(Default)]
pub struct InMemoryObjectStore {
    buckets: Mutex<HashMap<String, HashMap<String, Payload>>>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 バケット分のスナップショット（key 順）
    pub async fn list_objects(&self, bucket: &str) -> Vec<StoredObject> {
        let buckets = self.buckets.lock().await;
        let mut objects: Vec<StoredObject> = buckets
            .get(bucket)
            .into_iter()
            .flat_map(|objects| objects.iter())
            .map(|(key, payload)| StoredObject {
                bucket: bucket.to_string(),
                key: key.clone(),
                payload: payload.clone(),
            })
            .collect();
        objects.sort_by(|a, b| a.key.cmp(&b.key));
        objects
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn create_bucket(&self, name: &str) {
        let mut buckets = self.buckets.lock().await;
        buckets.entry(name.to_string()).or_default();
        tracing::debug!(bucket = name, "created bucket");
    }

    async fn put_object(&self, bucket: &str, key: &str, payload: Payload) {
        let size = payload.len();
        let mut buckets = self.buckets.lock().await;
        buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), payload);
        tracing::debug!(bucket, key, size, "put object");
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Option<Payload> {
        let buckets = self.buckets.lock().await;
        buckets.get(bucket)?.get(key).cloned()
    }

    async fn bucket_exists(&self, name: &str) -> bool {
        self.buckets.lock().await.contains_key(name)
    }

    async fn object_count(&self, bucket: &str) -> usize {
        self.buckets
            .lock()
            .await
            .get(bucket)
            .map_or(0, HashMap::len)
    }
}
