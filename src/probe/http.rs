// src/probe/http.rs
// =============================================================================
// This module sends the probe: one plaintext HTTP GET per candidate.
//
// Key behavior:
// - Target is always http://host:port/ (no TLS, no protocol detection)
// - No custom timeout, no retries: the client's defaults apply
// - Any status code counts as an answer; only transport failures are errors
// - The whole body is read and scanned for its <title>
//
// Rust concepts:
// - Traits: Prober lets the worker pool run against a fake in tests
// - async-trait: async fn in a trait used behind Arc<dyn Prober>
// - Send + Sync: required to share the prober across tokio tasks
// =============================================================================

use super::title::extract_title;
use crate::errors::ProbeError;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Something that can fetch the title signal for a host.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, host: &str, port: u16) -> Result<String, ProbeError>;
}

/// The real prober, backed by a reqwest client.
//
// One client is shared by every worker (it pools connections internally).
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Builds a prober with reqwest's default settings.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

// Builds the URL a candidate is probed at
//
// Example:
//   ("example.com", 2083) -> http://example.com:2083/
pub fn probe_target(host: &str, port: u16) -> Result<Url, ProbeError> {
    let target = format!("http://{}:{}/", host, port);
    Url::parse(&target).map_err(|source| ProbeError::InvalidTarget { target, source })
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, host: &str, port: u16) -> Result<String, ProbeError> {
        let url = probe_target(host, port)?;

        tracing::debug!(%url, "probing");
        let response = self.client.get(url).send().await?;
        tracing::debug!(host, status = response.status().as_u16(), "got response");

        // Read raw bytes: the body may not be valid UTF-8 and we only
        // care about an ASCII marker
        let body = response.bytes().await?;
        let html = String::from_utf8_lossy(&body);

        Ok(extract_title(&html).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // Tests talk to 127.0.0.1, so skip any proxy set in the environment
    fn local_prober() -> HttpProber {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpProber::with_client(client)
    }

    // Starts a tiny HTTP server that answers every request with `body`
    async fn serve(status_line: &'static str, body: &'static str) -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let mut buf = [0u8; 4096];
                    let _ = socket.read(&mut buf).await;
                    let response = format!(
                        "{}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status_line,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        port
    }

    #[test]
    fn test_probe_target() {
        let url = probe_target("example.com", 2083).unwrap();
        assert_eq!(url.as_str(), "http://example.com:2083/");
    }

    #[test]
    fn test_probe_target_rejects_bad_host() {
        let result = probe_target("exa mple.com", 2083);
        assert!(matches!(result, Err(ProbeError::InvalidTarget { .. })));
    }

    #[tokio::test]
    async fn test_probe_reads_title() {
        let port = serve(
            "HTTP/1.1 200 OK",
            "<html><head><title>cPanel</title></head><body></body></html>",
        )
        .await;

        let signal = local_prober().probe("127.0.0.1", port).await.unwrap();
        assert_eq!(signal, "cPanel");
    }

    #[tokio::test]
    async fn test_probe_ignores_status_code() {
        let port = serve("HTTP/1.1 401 Unauthorized", "<title> cPanel </title>").await;

        let signal = local_prober().probe("127.0.0.1", port).await.unwrap();
        assert_eq!(signal, "cPanel");
    }

    #[tokio::test]
    async fn test_probe_without_title_is_empty_signal() {
        let port = serve("HTTP/1.1 200 OK", "not html at all").await;

        let signal = local_prober().probe("127.0.0.1", port).await.unwrap();
        assert_eq!(signal, "");
    }

    #[tokio::test]
    async fn test_probe_connection_refused() {
        // Grab a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let result = local_prober().probe("127.0.0.1", port).await;
        assert!(matches!(result, Err(ProbeError::Network(_))));
    }
}
