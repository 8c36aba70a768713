//! Blob store client for image artifacts.
//!
//! Implements the ArtifactStore trait against an S3-compatible HTTP
//! gateway (MinIO and friends): one PUT per upload, public-read objects,
//! no retries. Upload failures propagate to the caller as-is.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;

use crate::infrastructure::ports::{ArtifactError, ArtifactStore};

/// Client for the artifact gateway.
#[derive(Clone)]
pub struct BlobStoreClient {
    client: Client,
    base_url: String,
    bucket: String,
    public_base_url: String,
}

impl BlobStoreClient {
    /// `public_base_url` is the prefix baked into stored references; it can
    /// differ from `base_url` when uploads go through an internal endpoint.
    ///
    /// Builder failure is surfaced to the caller; it is a composition-time
    /// fault, not something an upload path can recover from later.
    pub fn new(
        base_url: &str,
        bucket: &str,
        public_base_url: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ArtifactStore for BlobStoreClient {
    async fn upload(&self, payload: Vec<u8>, original_name: &str) -> Result<String, ArtifactError> {
        // Key the object by name plus upload time so re-uploads of the same
        // filename never clobber an existing artifact.
        let key = format!("{}_{}", original_name, Utc::now().timestamp_millis());

        let response = self
            .client
            .put(format!("{}/{}/{}", self.base_url, self.bucket, key))
            .header("x-amz-acl", "public-read")
            .body(payload)
            .send()
            .await
            .map_err(|e| ArtifactError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(%status, "Artifact upload rejected by the gateway");
            return Err(ArtifactError::Upload(error_text));
        }

        Ok(format!("{}/{}/{}", self.public_base_url, self.bucket, key))
    }
}
