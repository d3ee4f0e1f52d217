use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::forward_target::ForwardTarget;

/// Forwarding rule: one upstream target serving a set of domains.
///
/// Each listed domain covers itself and all of its subdomains, unless a
/// more specific domain is listed by another rule.
///
/// ```toml
/// [[dns.forward]]
/// dns = "doh://cloudflare-dns.com/dns-query"
/// domain = ["."]
/// https_proxy = "http://127.0.0.1:8080"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ForwardRule {
    /// Upstream target (`udp://`, `doh://`, `ipv4://`, `ipv6://`)
    pub dns: String,

    /// Domains this rule applies to
    #[serde(default)]
    pub domain: Vec<String>,

    /// Optional proxy for `doh://` targets
    #[serde(default)]
    pub https_proxy: Option<String>,
}

impl ForwardRule {
    pub fn new(dns: impl Into<String>, domains: &[&str]) -> Self {
        Self {
            dns: dns.into(),
            domain: domains.iter().map(|d| d.to_string()).collect(),
            https_proxy: None,
        }
    }

    pub fn with_https_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.https_proxy = Some(proxy.into());
        self
    }

    /// Parse the `dns` field into a [`ForwardTarget`].
    pub fn target(&self) -> Result<ForwardTarget, DomainError> {
        self.dns.parse()
    }
}

/// DNS resolution configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Upstream query timeout in milliseconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Forwarding rules, in configuration order
    #[serde(default, rename = "forward")]
    pub forwards: Vec<ForwardRule>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            query_timeout: default_query_timeout(),
            forwards: vec![],
        }
    }
}

fn default_query_timeout() -> u64 {
    2000
}
