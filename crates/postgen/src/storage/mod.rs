pub mod memory;
pub mod s3;

use std::fmt;

use crate::Result;
use async_trait::async_trait;
use dyn_clone::DynClone;

/// A key-addressed store that accepts opaque bodies into a single bucket.
#[async_trait]
pub trait ObjectStore: DynClone + Send + Sync {
    fn bucket(&self) -> &str;

    async fn put_object(&self, key: &str, body: &[u8]) -> Result<()>;
}

dyn_clone::clone_trait_object!(ObjectStore);

/// Location of an object written through an [`ObjectStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
}

impl fmt::Display for StoredObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}
