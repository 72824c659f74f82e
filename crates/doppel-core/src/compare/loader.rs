//! Image loading with timeout and cache-busting.
//!
//! One load covers fetch plus decode: the configured timeout bounds the whole
//! operation, and decode runs on a blocking thread so it cannot stall the
//! async runtime.

use image::DynamicImage;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::time::timeout;

use crate::config::LoaderConfig;
use crate::error::{CompareError, CompareResult};

use super::fetch::ImageFetcher;

/// Loads and decodes images by URL.
pub struct ImageLoader {
    fetcher: Arc<dyn ImageFetcher>,
    config: LoaderConfig,
}

impl ImageLoader {
    /// Create a new loader over the given fetcher.
    pub fn new(fetcher: Arc<dyn ImageFetcher>, config: LoaderConfig) -> Self {
        Self { fetcher, config }
    }

    /// Load the image behind `url` into a decoded bitmap.
    ///
    /// Fails with `LoadTimeout` if fetch plus decode does not complete within
    /// `timeout_ms`, and with `Load` for any fetch or decode error. No
    /// retries; the caller decides what a failed load means.
    pub async fn load(&self, url: &str, timeout_ms: u64) -> CompareResult<DynamicImage> {
        let fetch_url = if self.config.cache_bust {
            cache_busted(url)
        } else {
            url.to_string()
        };

        let load = async {
            let bytes = self.fetcher.fetch(&fetch_url).await?;
            let url_owned = url.to_string();
            tokio::task::spawn_blocking(move || decode_bytes(bytes, &url_owned))
                .await
                .map_err(|e| CompareError::Load {
                    url: url.to_string(),
                    message: format!("Task join error: {e}"),
                })?
        };

        match timeout(Duration::from_millis(timeout_ms), load).await {
            Ok(result) => result,
            Err(_) => Err(CompareError::LoadTimeout {
                url: url.to_string(),
                timeout_ms,
            }),
        }
    }
}

/// Synchronous decode from bytes (runs in spawn_blocking).
fn decode_bytes(bytes: Vec<u8>, url: &str) -> CompareResult<DynamicImage> {
    use std::io::Cursor;

    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| CompareError::Load {
            url: url.to_string(),
            message: format!("Cannot detect image format: {e}"),
        })?;

    reader.decode().map_err(|e| CompareError::Load {
        url: url.to_string(),
        message: e.to_string(),
    })
}

/// Append a timestamp query parameter to defeat stale cached responses.
fn cache_busted(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{url}{separator}_t={now_ms}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use image::ImageFormat;

    struct StaticFetcher {
        bytes: Vec<u8>,
    }

    #[async_trait]
    impl ImageFetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> CompareResult<Vec<u8>> {
            Ok(self.bytes.clone())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl ImageFetcher for FailingFetcher {
        async fn fetch(&self, url: &str) -> CompareResult<Vec<u8>> {
            Err(CompareError::Load {
                url: url.to_string(),
                message: "HTTP 404 Not Found".to_string(),
            })
        }
    }

    /// Never completes; models a stalled connection.
    struct HangingFetcher;

    #[async_trait]
    impl ImageFetcher for HangingFetcher {
        async fn fetch(&self, _url: &str) -> CompareResult<Vec<u8>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Vec::new())
        }
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgb8(width, height);
        let mut buffer = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_cache_busted_picks_separator() {
        let plain = cache_busted("https://cdn.example.com/a.png");
        assert!(plain.starts_with("https://cdn.example.com/a.png?_t="));

        let with_query = cache_busted("https://cdn.example.com/a.png?v=2");
        assert!(with_query.starts_with("https://cdn.example.com/a.png?v=2&_t="));
    }

    #[tokio::test]
    async fn test_load_decodes_valid_png() {
        let fetcher = Arc::new(StaticFetcher {
            bytes: png_bytes(8, 8),
        });
        let loader = ImageLoader::new(fetcher, LoaderConfig::default());

        let img = loader.load("https://x/a.png", 5_000).await.unwrap();
        assert_eq!(img.width(), 8);
        assert_eq!(img.height(), 8);
    }

    #[tokio::test]
    async fn test_load_surfaces_fetch_error() {
        let loader = ImageLoader::new(Arc::new(FailingFetcher), LoaderConfig::default());
        let err = loader.load("https://x/missing.png", 5_000).await.unwrap_err();
        assert!(matches!(err, CompareError::Load { .. }));
    }

    #[tokio::test]
    async fn test_load_times_out_on_stalled_fetch() {
        let loader = ImageLoader::new(Arc::new(HangingFetcher), LoaderConfig::default());
        let err = loader.load("https://x/slow.png", 50).await.unwrap_err();
        assert!(matches!(
            err,
            CompareError::LoadTimeout { timeout_ms: 50, .. }
        ));
    }

    #[tokio::test]
    async fn test_load_rejects_garbage_bytes() {
        let fetcher = Arc::new(StaticFetcher {
            bytes: b"not an image at all".to_vec(),
        });
        let loader = ImageLoader::new(fetcher, LoaderConfig::default());
        let err = loader.load("https://x/bad.bin", 5_000).await.unwrap_err();
        assert!(matches!(err, CompareError::Load { .. }));
    }
}
