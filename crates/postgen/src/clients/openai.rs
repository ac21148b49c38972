use crate::completions::{Completion, CompletionRequest, CompletionResponse};
use crate::config::CompletionConfig;
use crate::utils::uri::ensure_no_trailing_slash;
use crate::{Error, Result};
use async_trait::async_trait;
use derive_builder::Builder;
use secrecy::{ExposeSecret, SecretString};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Builder)]
#[builder(derive(Debug))]
#[builder(setter(into))]
pub struct Client {
    #[builder(default)]
    http_client: reqwest::Client,
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    api_key: SecretString,
}

impl Client {
    pub fn new(api_key: &str) -> Self {
        Self::from_url(api_key, DEFAULT_BASE_URL)
    }

    /// Points the client at any OpenAI compatible server, e.g. a local
    /// proxy or a self-hosted model.
    pub fn from_url(api_key: &str, base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::default(),
            base_url: ensure_no_trailing_slash(base_url),
            api_key: SecretString::from(api_key.to_string()),
        }
    }

    pub fn from_config(config: &CompletionConfig) -> Self {
        Self {
            http_client: reqwest::Client::default(),
            base_url: ensure_no_trailing_slash(config.base_url.as_str()),
            api_key: config.api_key.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Completion for Client {
    async fn completions(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_str(&format!(
                "Bearer {}",
                self.api_key.expose_secret()
            ))
            .map_err(|e| Error::InvalidHeaderValue(reqwest::header::AUTHORIZATION.to_string(), e))?,
        );
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let url = format!("{}/completions", self.base_url);
        tracing::debug!(%url, model = %request.model, "requesting completion");

        let response = self
            .http_client
            .post(url)
            .headers(headers)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ApiError {
                status: status.as_u16(),
                body: response.text().await?,
            });
        }

        let completion_response = response.json::<CompletionResponse>().await?;

        Ok(completion_response)
    }
}

impl super::Client for Client {}
