use async_trait::async_trait;
use splitdns_domain::Answer;

/// A resolution strategy for one routing rule.
///
/// Implementations own their transport, timeout and error handling. A failed
/// or empty lookup is reported as an empty list; the resolver never sees
/// transport errors.
#[async_trait]
pub trait UpstreamHandle: Send + Sync {
    /// Resolve a fully-qualified `domain` for `record_type`.
    async fn resolve(&self, domain: &str, record_type: u16) -> Vec<Answer>;

    /// Short description for logs (e.g. `udp://1.1.1.1:53`).
    fn name(&self) -> &str;
}
