//! Fetching the two GeoJSON feeds the map overlays are built from

use crate::{
    core::config::FeedLoadingConfig, data::geojson::GeoJson, traits::retry_delay_with_backoff,
    MapError, Result,
};
use async_trait::async_trait;

/// Which overlay a feed feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    Earthquakes,
    TectonicPlates,
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::Earthquakes => write!(f, "earthquakes"),
            FeedKind::TectonicPlates => write!(f, "tectonic plates"),
        }
    }
}

/// Source of GeoJSON documents.
///
/// The map only ever talks to this trait, so tests and offline tools can
/// serve canned documents instead of hitting the network.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, kind: FeedKind, url: &str) -> Result<GeoJson>;
}

/// Fetches feeds over HTTP with a per-request timeout and bounded retries
pub struct HttpFeedFetcher {
    client: reqwest::Client,
    config: FeedLoadingConfig,
}

impl HttpFeedFetcher {
    pub fn new(config: FeedLoadingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("quakemap/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FeedLoadingConfig {
        &self.config
    }

    async fn fetch_once(&self, url: &str) -> Result<GeoJson> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MapError::Timeout {
                    url: url.to_string(),
                    timeout_ms: self.config.timeout_ms,
                }
            } else {
                MapError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MapError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        log::debug!("Downloaded {} bytes from {}", body.len(), url);
        GeoJson::from_str(&body)
    }
}

/// Transport failures and server errors are worth another attempt; a 4xx or
/// a body that is not GeoJSON will not change on retry.
fn is_retryable(error: &MapError) -> bool {
    match error {
        MapError::Network(_) | MapError::Timeout { .. } => true,
        MapError::Http { status, .. } => *status >= 500 || *status == 429,
        _ => false,
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, kind: FeedKind, url: &str) -> Result<GeoJson> {
        log::info!("Loading {} feed from {}", kind, url);
        let mut attempt = 0;

        loop {
            let error = match self.fetch_once(url).await {
                Ok(geojson) => return Ok(geojson),
                Err(e) => e,
            };

            attempt += 1;
            let delay = if is_retryable(&error) {
                retry_delay_with_backoff(
                    attempt,
                    self.config.max_retries,
                    self.config.retry_delay_ms,
                    self.config.exponential_backoff,
                )
            } else {
                None
            };

            match delay {
                Some(delay) => {
                    log::warn!(
                        "Fetching {} feed failed (attempt {}): {}; retrying in {:?}",
                        kind,
                        attempt,
                        error,
                        delay
                    );
                    #[cfg(feature = "tokio-runtime")]
                    tokio::time::sleep(delay).await;
                }
                None => {
                    log::error!("Fetching {} feed failed: {}", kind, error);
                    return Err(error);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    const EMPTY_COLLECTION: &str = r#"{"type": "FeatureCollection", "features": []}"#;

    fn quick_retries(max_retries: u32) -> FeedLoadingConfig {
        FeedLoadingConfig {
            timeout_ms: 2_000,
            max_retries,
            retry_delay_ms: 1,
            exponential_backoff: false,
        }
    }

    /// Answers the n-th connection with the n-th canned response (the last
    /// one repeats) and counts connections. Returns the feed URL.
    async fn serve_responses(responses: Vec<(u16, &'static str)>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/all_week.geojson", listener.local_addr().unwrap());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let n = counter.fetch_add(1, Ordering::SeqCst);
                let (status, body) = responses[n.min(responses.len() - 1)];

                let mut request = Vec::new();
                let mut buf = [0_u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(read) => request.extend_from_slice(&buf[..read]),
                    }
                }

                let response = format!(
                    "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (url, hits)
    }

    #[test]
    fn test_retryable_errors() {
        let server_error = MapError::Http {
            url: "https://example.test".to_string(),
            status: 503,
        };
        let not_found = MapError::Http {
            url: "https://example.test".to_string(),
            status: 404,
        };
        let timeout = MapError::Timeout {
            url: "https://example.test".to_string(),
            timeout_ms: 10,
        };

        assert!(is_retryable(&server_error));
        assert!(is_retryable(&timeout));
        assert!(!is_retryable(&not_found));
        assert!(!is_retryable(&MapError::ParseError("bad".to_string())));
    }

    #[test]
    fn test_feed_kind_display() {
        assert_eq!(FeedKind::Earthquakes.to_string(), "earthquakes");
        assert_eq!(FeedKind::TectonicPlates.to_string(), "tectonic plates");
    }

    #[tokio::test]
    async fn test_unreachable_host_fails_without_panicking() {
        let fetcher = HttpFeedFetcher::new(FeedLoadingConfig {
            timeout_ms: 2_000,
            max_retries: 0,
            retry_delay_ms: 0,
            exponential_backoff: false,
        })
        .unwrap();

        // Port 9 on localhost is the discard service; nothing listens there in CI.
        let result = fetcher
            .fetch(FeedKind::Earthquakes, "http://127.0.0.1:9/all_week.geojson")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_server_errors_are_retried_until_success() {
        let (url, hits) = serve_responses(vec![
            (503, "unavailable"),
            (503, "unavailable"),
            (200, EMPTY_COLLECTION),
        ])
        .await;
        let fetcher = HttpFeedFetcher::new(quick_retries(2)).unwrap();

        let geojson = fetcher.fetch(FeedKind::Earthquakes, &url).await.unwrap();
        assert!(geojson.features().is_empty());
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retries_stop_at_the_configured_limit() {
        let (url, hits) = serve_responses(vec![(503, "unavailable")]).await;
        let fetcher = HttpFeedFetcher::new(quick_retries(2)).unwrap();

        let result = fetcher.fetch(FeedKind::TectonicPlates, &url).await;
        assert!(matches!(result, Err(MapError::Http { status: 503, .. })));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_rate_limit_is_retried() {
        let (url, hits) = serve_responses(vec![(429, "slow down"), (200, EMPTY_COLLECTION)]).await;
        let fetcher = HttpFeedFetcher::new(quick_retries(2)).unwrap();

        assert!(fetcher.fetch(FeedKind::Earthquakes, &url).await.is_ok());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_not_found_fails_after_one_attempt() {
        let (url, hits) = serve_responses(vec![(404, "not found"), (200, EMPTY_COLLECTION)]).await;
        let fetcher = HttpFeedFetcher::new(quick_retries(2)).unwrap();

        let result = fetcher.fetch(FeedKind::Earthquakes, &url).await;
        assert!(matches!(result, Err(MapError::Http { status: 404, .. })));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unparseable_body_is_not_retried() {
        let (url, hits) = serve_responses(vec![(200, "<html>"), (200, EMPTY_COLLECTION)]).await;
        let fetcher = HttpFeedFetcher::new(quick_retries(2)).unwrap();

        let result = fetcher.fetch(FeedKind::Earthquakes, &url).await;
        assert!(matches!(result, Err(MapError::ParseError(_))));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
