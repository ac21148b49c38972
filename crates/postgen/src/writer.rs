use uuid::Uuid;

use crate::Result;
use crate::storage::{ObjectStore, StoredObject};

pub const OBJECT_KEY_PREFIX: &str = "blog_post_";
pub const OBJECT_KEY_SUFFIX: &str = ".txt";

/// A fresh `blog_post_<uuid>.txt` key. Uniqueness rests on the random v4
/// identifier alone.
pub fn object_key() -> String {
    format!("{OBJECT_KEY_PREFIX}{}{OBJECT_KEY_SUFFIX}", Uuid::new_v4())
}

/// Writes `content` verbatim as a new object under a fresh key.
pub async fn write_content<S: ObjectStore + ?Sized>(
    store: &S,
    content: &str,
) -> Result<StoredObject> {
    let key = object_key();
    store.put_object(&key, content.as_bytes()).await?;

    let object = StoredObject {
        bucket: store.bucket().to_string(),
        key,
    };
    tracing::info!("Blog post written to {object}");

    Ok(object)
}
