pub mod https;
pub mod udp;

use async_trait::async_trait;
use splitdns_domain::{DomainError, ForwardTarget};
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Https(https::HttpsTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Https(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Https(_) => "HTTPS",
        }
    }
}

/// Transport for a forwarding target.
///
/// Only `Udp` and `Doh` targets go over the network; asking for any other
/// variant is an error. `https_proxy` applies to DoH only.
pub fn create_transport(
    target: &ForwardTarget,
    https_proxy: Option<&str>,
) -> Result<Transport, DomainError> {
    match target {
        ForwardTarget::Udp { host, port } => {
            Ok(Transport::Udp(udp::UdpTransport::new(host.clone(), *port)))
        }
        ForwardTarget::Doh { url, .. } => Ok(Transport::Https(match https_proxy {
            Some(proxy) => https::HttpsTransport::with_proxy(url.to_string(), proxy)?,
            None => https::HttpsTransport::new(url.to_string()),
        })),
        other => Err(DomainError::InvalidUpstreamTarget {
            target: other.to_string(),
            reason: "target has no network transport".to_string(),
        }),
    }
}
