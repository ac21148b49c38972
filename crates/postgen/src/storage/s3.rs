use ::s3::bucket::Bucket;
use ::s3::creds::Credentials;
use ::s3::region::Region;
use async_trait::async_trait;

use super::ObjectStore;
use crate::config::{AWS_REGION_ENV_VAR, StorageConfig};
use crate::{Error, Result};

/// Type S3 records for an object stored without an explicit content type.
pub const DEFAULT_CONTENT_TYPE: &str = "binary/octet-stream";

/// [`ObjectStore`] backed by an S3 (or S3 compatible) bucket.
#[derive(Debug, Clone)]
pub struct S3Store {
    name: String,
    bucket: Box<Bucket>,
}

impl S3Store {
    pub fn new(name: &str, region: Region, credentials: Credentials) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            bucket: Bucket::new(name, region, credentials)?,
        })
    }

    /// Address objects as `{endpoint}/{bucket}/{key}` instead of using a
    /// bucket subdomain.
    pub fn with_path_style(self) -> Self {
        Self {
            bucket: self.bucket.with_path_style(),
            ..self
        }
    }

    /// Builds a store from configuration. Credentials are taken from the
    /// ambient AWS environment: the `AWS_*` variables the Lambda platform
    /// exports for the execution role, then the profile and instance
    /// metadata chain.
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        let credentials = Credentials::default()?;
        Self::with_credentials(config, credentials)
    }

    fn with_credentials(config: &StorageConfig, credentials: Credentials) -> Result<Self> {
        let store = Self::new(&config.bucket, resolve_region(config)?, credentials)?;
        if config.endpoint.is_some() {
            Ok(store.with_path_style())
        } else {
            Ok(store)
        }
    }
}

/// Maps the configured region to a [`Region`] with a reachable endpoint.
///
/// rust-s3 turns region names it does not know into a custom region whose
/// endpoint is the bare name, so those are pointed at the regional AWS
/// endpoint instead.
pub fn resolve_region(config: &StorageConfig) -> Result<Region> {
    if let Some(endpoint) = &config.endpoint {
        return Ok(Region::Custom {
            region: config.region.clone(),
            endpoint: endpoint.clone(),
        });
    }

    let region = config.region.trim();
    if region.is_empty() {
        return Err(Error::InvalidConfig(
            AWS_REGION_ENV_VAR.to_string(),
            "region is empty".to_string(),
        ));
    }

    let parsed = region
        .parse::<Region>()
        .map_err(|e| Error::InvalidConfig(AWS_REGION_ENV_VAR.to_string(), e.to_string()))?;
    match parsed {
        Region::Custom { .. } => Ok(Region::Custom {
            region: region.to_string(),
            endpoint: format!("https://s3.{region}.amazonaws.com"),
        }),
        known => Ok(known),
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    fn bucket(&self) -> &str {
        &self.name
    }

    async fn put_object(&self, key: &str, body: &[u8]) -> Result<()> {
        let response = self
            .bucket
            .put_object_with_content_type(key, body, DEFAULT_CONTENT_TYPE)
            .await?;
        tracing::debug!(
            bucket = %self.name,
            key,
            status = response.status_code(),
            "put object"
        );
        Ok(())
    }
}
