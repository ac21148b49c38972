use serde::{Deserialize, Serialize};

use crate::Result;
use crate::clients::Client;
use crate::config::DEFAULT_MAX_TOKENS;
use crate::generator::generate_content;
use crate::prompt::BLOG_POST_PROMPT;
use crate::storage::ObjectStore;
use crate::writer::write_content;

pub const SUCCESS_STATUS_CODE: u16 = 200;
pub const SUCCESS_MESSAGE: &str = "Post generated and saved to S3";

/// Result returned to the function host after a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationStatus {
    pub status_code: u16,
    pub body: String,
}

impl InvocationStatus {
    pub fn success() -> Self {
        Self {
            status_code: SUCCESS_STATUS_CODE,
            body: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Generates one post and stores it. Built once per process and shared by
/// every invocation it serves.
#[derive(Clone)]
pub struct Pipeline {
    client: Box<dyn Client>,
    store: Box<dyn ObjectStore>,
    model: String,
    prompt: String,
    max_tokens: u32,
}

impl Pipeline {
    pub fn new(
        client: Box<dyn Client>,
        store: Box<dyn ObjectStore>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            store,
            model: model.into(),
            prompt: BLOG_POST_PROMPT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Runs generate then write. Any failure is returned untouched and
    /// nothing after the failing step runs.
    pub async fn invoke(&self) -> Result<InvocationStatus> {
        let content =
            generate_content(&*self.client, &self.model, &self.prompt, self.max_tokens).await?;
        write_content(&*self.store, &content).await?;

        Ok(InvocationStatus::success())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;
    use crate::generator::test::StubCompletion;
    use crate::storage::memory::MemoryStore;
    use crate::writer::test::FailingStore;

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&InvocationStatus::success()).unwrap(),
            r#"{"statusCode":200,"body":"Post generated and saved to S3"}"#
        );
    }

    #[tokio::test]
    async fn test_invoke_generates_and_stores() {
        let client = StubCompletion::answering(&["A post about Lambda"]);
        let store = MemoryStore::new("bucket-name");
        let pipeline = Pipeline::new(Box::new(client.clone()), Box::new(store.clone()), "m");

        let status = pipeline.invoke().await.unwrap();

        assert_eq!(status, InvocationStatus::success());
        assert_eq!(client.requests()[0].prompt, BLOG_POST_PROMPT);
        assert_eq!(client.requests()[0].max_tokens, Some(2000));
        let keys = store.keys().await;
        assert_eq!(keys.len(), 1);
        assert_eq!(
            store.get(&keys[0]).await,
            Some(b"A post about Lambda".to_vec())
        );
    }

    #[tokio::test]
    async fn test_each_invocation_writes_a_new_object() {
        let store = MemoryStore::new("bucket-name");
        let pipeline = Pipeline::new(
            Box::new(StubCompletion::answering(&["same"])),
            Box::new(store.clone()),
            "m",
        )
        .with_prompt("short prompt")
        .with_max_tokens(16);

        pipeline.invoke().await.unwrap();
        pipeline.invoke().await.unwrap();

        assert_eq!(store.keys().await.len(), 2);
    }

    #[tokio::test]
    async fn test_generation_failure_skips_write() {
        let store = MemoryStore::new("bucket-name");
        let pipeline = Pipeline::new(
            Box::new(StubCompletion::failing()),
            Box::new(store.clone()),
            "m",
        );

        let err = pipeline.invoke().await.unwrap_err();

        assert!(matches!(err, Error::ApiError { status: 429, .. }));
        assert!(store.keys().await.is_empty());
    }

    #[tokio::test]
    async fn test_write_failure_propagates() {
        let client = StubCompletion::answering(&["post"]);
        let pipeline = Pipeline::new(Box::new(client.clone()), Box::new(FailingStore), "m");

        let err = pipeline.invoke().await.unwrap_err();

        assert!(matches!(err, Error::OtherError(_)));
        assert_eq!(client.requests().len(), 1);
    }
}
