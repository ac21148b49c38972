use std::env::VarError;

use secrecy::SecretString;

use crate::clients::openai::DEFAULT_BASE_URL;
use crate::{Error, Result};

pub const OPENAI_API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL_ENV_VAR: &str = "OPENAI_BASE_URL";
pub const COMPLETION_MODEL_ENV_VAR: &str = "COMPLETION_MODEL";
pub const MAX_TOKENS_ENV_VAR: &str = "MAX_TOKENS";
pub const BUCKET_NAME_ENV_VAR: &str = "BUCKET_NAME";
pub const AWS_REGION_ENV_VAR: &str = "AWS_REGION";
pub const S3_ENDPOINT_ENV_VAR: &str = "S3_ENDPOINT";

pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_MAX_TOKENS: u32 = 2000;
pub const DEFAULT_BUCKET_NAME: &str = "bucket-name";
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

#[derive(Debug, Clone)]
pub struct Config {
    pub completion: CompletionConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: SecretString,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
    /// Custom S3 compatible endpoint; objects are then addressed path-style.
    pub endpoint: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Reads configuration through `lookup`, which behaves like
    /// [`std::env::var`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let optional = |name: &str| match lookup(name) {
            Ok(value) if !value.trim().is_empty() => Ok(Some(value)),
            Ok(_) | Err(VarError::NotPresent) => Ok(None),
            Err(e) => Err(Error::EnvVarError(name.to_string(), e)),
        };

        let api_key = optional(OPENAI_API_KEY_ENV_VAR)?.ok_or_else(|| {
            Error::EnvVarError(OPENAI_API_KEY_ENV_VAR.to_string(), VarError::NotPresent)
        })?;

        let max_tokens = match optional(MAX_TOKENS_ENV_VAR)? {
            Some(value) => value.trim().parse::<u32>().map_err(|e: std::num::ParseIntError| {
                Error::InvalidConfig(MAX_TOKENS_ENV_VAR.to_string(), e.to_string())
            })?,
            None => DEFAULT_MAX_TOKENS,
        };

        Ok(Self {
            completion: CompletionConfig {
                api_key: SecretString::from(api_key),
                base_url: optional(OPENAI_BASE_URL_ENV_VAR)?
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                model: optional(COMPLETION_MODEL_ENV_VAR)?
                    .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
                max_tokens,
            },
            storage: StorageConfig {
                bucket: optional(BUCKET_NAME_ENV_VAR)?
                    .unwrap_or_else(|| DEFAULT_BUCKET_NAME.to_string()),
                region: optional(AWS_REGION_ENV_VAR)?
                    .unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
                endpoint: optional(S3_ENDPOINT_ENV_VAR)?,
            },
        })
    }
}
