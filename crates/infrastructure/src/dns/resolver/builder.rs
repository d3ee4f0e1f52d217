use crate::dns::cache::AnswerCache;
use crate::dns::forwarding::DnsForwarder;
use crate::dns::transport::create_transport;
use splitdns_application::ports::{AnswerCachePort, UpstreamHandle};
use splitdns_application::services::{RoutingTable, StaticOverrides};
use splitdns_application::use_cases::ResolveQueryUseCase;
use splitdns_domain::{
    normalize_fqdn, DnsConfig, DomainError, ForwardRule, ForwardTarget, UnsupportedReason,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Turns the `[dns]` configuration into a ready [`ResolveQueryUseCase`].
///
/// Rules are applied in configuration order:
/// - `ipv4://` / `ipv6://` fill the static override tables
/// - `udp://` / `doh://` become upstream handles in the routing table
/// - `tcp://`, `dot://`, unknown schemes and rules without domains are
///   skipped with a diagnostic
///
/// A `dns` value that cannot be parsed at all aborts the build.
pub struct ResolverBuilder {
    forwards: Vec<ForwardRule>,
    timeout: Duration,
    cache: Option<Arc<dyn AnswerCachePort>>,
}

impl ResolverBuilder {
    pub fn new(config: &DnsConfig) -> Self {
        Self {
            forwards: config.forwards.clone(),
            timeout: Duration::from_millis(config.query_timeout),
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn AnswerCachePort>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> Result<ResolveQueryUseCase, DomainError> {
        let mut routes = RoutingTable::new();
        let mut overrides = StaticOverrides::new();
        let mut skipped = 0usize;

        for rule in &self.forwards {
            let target = rule.target()?;

            if rule.domain.is_empty() {
                skipped += 1;
                warn!(dns = %rule.dns, "forwarding rule has no domains, skipped");
                continue;
            }

            if rule.https_proxy.is_some() && !matches!(target, ForwardTarget::Doh { .. }) {
                warn!(dns = %rule.dns, "https_proxy ignored for non-DoH target");
            }

            match &target {
                ForwardTarget::StaticV4(ip) => {
                    for domain in &rule.domain {
                        overrides.insert_v4(normalize_fqdn(domain), *ip);
                    }
                }
                ForwardTarget::StaticV6(ip) => {
                    for domain in &rule.domain {
                        overrides.insert_v6(normalize_fqdn(domain), *ip);
                    }
                }
                ForwardTarget::Unsupported { scheme, reason } => {
                    skipped += 1;
                    match reason {
                        UnsupportedReason::NotImplemented => {
                            warn!(scheme = %scheme, dns = %rule.dns, "WIP: forwarding rule skipped")
                        }
                        UnsupportedReason::UnknownScheme => {
                            error!(scheme = %scheme, dns = %rule.dns, "unsupported scheme: forwarding rule skipped")
                        }
                    }
                }
                ForwardTarget::Udp { .. } | ForwardTarget::Doh { .. } => {
                    let transport = create_transport(&target, rule.https_proxy.as_deref())?;
                    let upstream: Arc<dyn UpstreamHandle> =
                        Arc::new(DnsForwarder::new(rule.dns.clone(), transport, self.timeout));
                    for domain in &rule.domain {
                        let domain = normalize_fqdn(domain);
                        debug!(domain = %domain, upstream = %rule.dns, "route registered");
                        routes.add(domain, Arc::clone(&upstream));
                    }
                }
            }
        }

        info!(
            rules = self.forwards.len(),
            routes = routes.len(),
            overrides = overrides.len(),
            skipped = skipped,
            timeout_ms = self.timeout.as_millis() as u64,
            "Building resolver"
        );

        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(AnswerCache::new()) as Arc<dyn AnswerCachePort>);

        Ok(ResolveQueryUseCase::new(routes, overrides, cache))
    }
}
