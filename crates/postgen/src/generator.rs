use crate::completions::{Completion, CompletionRequestBuilder};
use crate::{Error, Result};

/// Requests a single completion for `prompt` and returns the text of the
/// first choice exactly as the API produced it. Additional choices are
/// ignored and the text is not inspected.
pub async fn generate_content<C: Completion + ?Sized>(
    client: &C,
    model: &str,
    prompt: &str,
    max_tokens: u32,
) -> Result<String> {
    let request = CompletionRequestBuilder::default()
        .model(model)
        .prompt(prompt)
        .max_tokens(max_tokens)
        .build()?;

    let response = client.completions(&request).await?;

    if let Some(usage) = &response.usage {
        tracing::debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            "completion usage"
        );
    }

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(Error::NoCompletionChoices)?;
    tracing::debug!(finish_reason = ?choice.finish_reason, "completion finished");

    Ok(choice.text)
}

#[cfg(test)]
pub(crate) mod test {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::completions::{
        CompletionChoice, CompletionRequest, CompletionResponse, FinishReason,
    };

    /// Answers every request with fixed choices and records what it was sent.
    #[derive(Clone, Default)]
    pub(crate) struct StubCompletion {
        pub(crate) choices: Vec<String>,
        pub(crate) fail: bool,
        pub(crate) requests: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    impl StubCompletion {
        pub(crate) fn answering(choices: &[&str]) -> Self {
            Self {
                choices: choices.iter().map(|c| c.to_string()).collect(),
                ..Default::default()
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Completion for StubCompletion {
        async fn completions(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(Error::ApiError {
                    status: 429,
                    body: "quota exceeded".to_string(),
                });
            }
            Ok(CompletionResponse {
                id: Some("cmpl-stub".to_string()),
                object: "text_completion".to_string(),
                created: 0,
                model: request.model.clone(),
                choices: self
                    .choices
                    .iter()
                    .enumerate()
                    .map(|(index, text)| CompletionChoice {
                        text: text.clone(),
                        index: index as u32,
                        finish_reason: Some(FinishReason::Stop),
                    })
                    .collect(),
                usage: None,
            })
        }
    }

    impl crate::clients::Client for StubCompletion {}

    #[tokio::test]
    async fn test_sends_prompt_and_max_tokens() {
        let client = StubCompletion::answering(&["post"]);

        generate_content(&client, "gpt-3.5-turbo-instruct", "Write about S3.", 2000)
            .await
            .unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gpt-3.5-turbo-instruct");
        assert_eq!(requests[0].prompt, "Write about S3.");
        assert_eq!(requests[0].max_tokens, Some(2000));
    }

    #[tokio::test]
    async fn test_returns_first_choice_unmodified() {
        let client = StubCompletion::answering(&["\n\n# Amazon S3\n\nBuckets hold objects.  ", "other"]);

        let content = generate_content(&client, "m", "p", 2000).await.unwrap();

        assert_eq!(content, "\n\n# Amazon S3\n\nBuckets hold objects.  ");
    }

    #[tokio::test]
    async fn test_empty_text_is_returned_as_is() {
        let client = StubCompletion::answering(&[""]);

        let content = generate_content(&client, "m", "p", 2000).await.unwrap();

        assert_eq!(content, "");
    }

    #[tokio::test]
    async fn test_no_choices_is_an_error() {
        let client = StubCompletion::answering(&[]);

        let err = generate_content(&client, "m", "p", 2000).await.unwrap_err();

        assert!(matches!(err, Error::NoCompletionChoices));
    }

    #[tokio::test]
    async fn test_api_failure_propagates() {
        let client = StubCompletion::failing();

        let err = generate_content(&client, "m", "p", 2000).await.unwrap_err();

        assert!(matches!(err, Error::ApiError { status: 429, .. }));
    }
}
