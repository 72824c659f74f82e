//! Image byte retrieval behind an injectable seam.
//!
//! The detector talks to `ImageFetcher` rather than reqwest directly so that
//! tests can feed it in-memory images without a network.

use crate::error::{CompareError, CompareResult};
use async_trait::async_trait;

/// Trait for retrieving raw image bytes by URL.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the detector holds an `Arc<dyn ImageFetcher>` for dynamic dispatch).
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch the raw bytes behind `url`.
    async fn fetch(&self, url: &str) -> CompareResult<Vec<u8>>;
}

/// Production fetcher backed by a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> CompareResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CompareError::Load {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompareError::Load {
                url: url.to_string(),
                message: format!("HTTP {status}"),
            });
        }

        let bytes = response.bytes().await.map_err(|e| CompareError::Load {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(bytes.to_vec())
    }
}
