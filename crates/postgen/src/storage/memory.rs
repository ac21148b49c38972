use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::ObjectStore;
use crate::Result;

/// Keeps objects in process memory. Clones share the same objects.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bucket: String,
    objects: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            objects: Arc::default(),
        }
    }

    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().await.get(key).cloned()
    }

    pub async fn keys(&self) -> Vec<String> {
        self.objects.lock().await.keys().cloned().collect()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn put_object(&self, key: &str, body: &[u8]) -> Result<()> {
        self.objects
            .lock()
            .await
            .insert(key.to_string(), body.to_vec());
        Ok(())
    }
}
