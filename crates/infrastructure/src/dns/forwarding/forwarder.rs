use super::message_builder::MessageBuilder;
use super::response_parser::{DnsResponse, ResponseParser};
use crate::dns::transport::Transport;
use async_trait::async_trait;
use splitdns_application::ports::UpstreamHandle;
use splitdns_domain::{Answer, DomainError, RecordType};
use std::time::Duration;
use tracing::{debug, warn};

/// Upstream handle forwarding queries over one [`Transport`].
///
/// Failures (timeouts, unreachable servers, undecodable responses) are logged
/// and reported to the resolver as an empty answer list.
pub struct DnsForwarder {
    name: String,
    transport: Transport,
    timeout: Duration,
}

impl DnsForwarder {
    pub fn new(name: impl Into<String>, transport: Transport, timeout: Duration) -> Self {
        Self {
            name: name.into(),
            transport,
            timeout,
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send one query and decode the reply.
    pub async fn query(&self, domain: &str, record_type: u16) -> Result<DnsResponse, DomainError> {
        let (id, request) = MessageBuilder::build_query_with_id(domain, record_type)?;
        let reply = self.transport.send(&request, self.timeout).await?;
        let response = ResponseParser::parse(&reply.bytes)?;

        debug!(
            upstream = %self.name,
            protocol = reply.protocol_used,
            bytes = reply.bytes.len(),
            answers = response.answers.len(),
            "upstream reply decoded"
        );

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response ID {} does not match query ID {}",
                response.id, id
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl UpstreamHandle for DnsForwarder {
    async fn resolve(&self, domain: &str, record_type: u16) -> Vec<Answer> {
        match self.query(domain, record_type).await {
            Ok(response) => {
                if response.truncated {
                    debug!(upstream = %self.name, domain = %domain, "truncated response");
                }
                if response.is_nxdomain() {
                    debug!(upstream = %self.name, domain = %domain, "NXDOMAIN");
                }
                if response.is_server_error() {
                    warn!(
                        upstream = %self.name,
                        domain = %domain,
                        rcode = ?response.rcode,
                        "upstream returned error"
                    );
                }
                response.answers
            }
            Err(e) => {
                warn!(
                    upstream = %self.name,
                    protocol = self.transport.protocol_name(),
                    domain = %domain,
                    record_type = %RecordType::label(record_type),
                    error = %e,
                    "upstream query failed"
                );
                Vec::new()
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
