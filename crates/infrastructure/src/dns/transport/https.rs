//! HTTPS Transport for DNS queries: DNS-over-HTTPS (RFC 8484)
//!
//! Queries go out as HTTP POST with `application/dns-message`; request and
//! response bodies are raw wire-format DNS messages.
//!
//! ```text
//! POST /dns-query HTTP/2
//! Content-Type: application/dns-message
//! Accept: application/dns-message
//!
//! <raw DNS message bytes>
//! ```

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use splitdns_domain::DomainError;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared client with connection pooling, used by every transport without a
/// proxy.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    client_builder()
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

/// Content type for DNS-over-HTTPS bodies (RFC 8484 §6)
const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

fn client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
}

pub struct HttpsTransport {
    url: String,
    client: reqwest::Client,
    proxied: bool,
}

impl HttpsTransport {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: SHARED_CLIENT.clone(),
            proxied: false,
        }
    }

    /// Transport sending every request through `proxy_url`.
    pub fn with_proxy(url: String, proxy_url: &str) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidUpstreamTarget {
            target: url.clone(),
            reason,
        };

        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| invalid(format!("invalid https_proxy '{}': {}", proxy_url, e)))?;
        let client = client_builder()
            .proxy(proxy)
            .build()
            .map_err(|e| invalid(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url,
            client,
            proxied: true,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_proxied(&self) -> bool {
        self.proxied
    }

    fn transport_error(&self, reason: impl ToString) -> DomainError {
        DomainError::TransportError {
            server: self.url.clone(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl DnsTransport for HttpsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        debug!(
            url = %self.url,
            message_len = message_bytes.len(),
            proxied = self.proxied,
            "Sending DoH query"
        );

        let response = tokio::time::timeout(
            timeout,
            self.client
                .post(&self.url)
                .header("Content-Type", DNS_MESSAGE_CONTENT_TYPE)
                .header("Accept", DNS_MESSAGE_CONTENT_TYPE)
                .body(message_bytes.to_vec())
                .send(),
        )
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: self.url.clone(),
        })?
        .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.transport_error(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let response_bytes: bytes::Bytes = tokio::time::timeout(timeout, response.bytes())
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: self.url.clone(),
            })?
            .map_err(|e| self.transport_error(e))?;

        debug!(
            url = %self.url,
            response_len = response_bytes.len(),
            "DoH response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes.to_vec(),
            protocol_used: "HTTPS",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "HTTPS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_transport_creation() {
        let transport = HttpsTransport::new("https://1.1.1.1/dns-query".to_string());
        assert_eq!(transport.url(), "https://1.1.1.1/dns-query");
        assert_eq!(transport.protocol_name(), "HTTPS");
        assert!(!transport.is_proxied());
    }

    #[test]
    fn test_https_transport_with_proxy() {
        let transport = HttpsTransport::with_proxy(
            "https://dns.google/dns-query".to_string(),
            "http://127.0.0.1:3128",
        )
        .unwrap();
        assert!(transport.is_proxied());
        assert_eq!(transport.url(), "https://dns.google/dns-query");
    }
}
