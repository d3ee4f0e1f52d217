use crate::ports::AnswerCachePort;
use crate::services::{RoutingTable, StaticOverrides};
use splitdns_domain::{normalize_fqdn, Answer};
use std::sync::Arc;
use tracing::{debug, info};

/// TTL reported for answers synthesized from static overrides.
pub const STATIC_OVERRIDE_TTL: u32 = 60;

/// Single entry point for answering a `(domain, record type)` query.
///
/// Precedence, first match wins:
/// 1. static override (A / AAAA only), never cached
/// 2. fresh cache entry
/// 3. upstream handle chosen by longest-suffix routing, result cached
///
/// A query with no route yields an empty list. Errors never reach the caller.
///
/// Concurrent misses for the same key are not coalesced: each one calls the
/// upstream and the last write to the cache wins.
pub struct ResolveQueryUseCase {
    routes: RoutingTable,
    overrides: StaticOverrides,
    cache: Arc<dyn AnswerCachePort>,
}

impl ResolveQueryUseCase {
    pub fn new(
        routes: RoutingTable,
        overrides: StaticOverrides,
        cache: Arc<dyn AnswerCachePort>,
    ) -> Self {
        Self {
            routes,
            overrides,
            cache,
        }
    }

    pub async fn execute(&self, domain: &str, record_type: u16) -> Vec<Answer> {
        info!(domain = %domain, record_type = record_type, "query");

        let name = normalize_fqdn(domain);

        if let Some(addr) = self.overrides.lookup(&name, record_type) {
            debug!(domain = %name, record_type = record_type, "static override hit");
            return vec![Answer::new(
                name.as_str(),
                record_type,
                STATIC_OVERRIDE_TTL,
                Arc::clone(addr),
            )];
        }

        if let Some(cached) = self.cache.get(&name, record_type) {
            debug!(domain = %name, record_type = record_type, "cache hit");
            return cached;
        }

        let Some(upstream) = self.routes.route(&name) else {
            debug!(domain = %name, record_type = record_type, "no route");
            return Vec::new();
        };

        debug!(
            domain = %name,
            record_type = record_type,
            upstream = upstream.name(),
            "forwarding query"
        );

        let answers = upstream.resolve(&name, record_type).await;
        self.cache.set(&name, record_type, &answers);
        answers
    }

    pub fn routes(&self) -> &RoutingTable {
        &self.routes
    }

    pub fn overrides(&self) -> &StaticOverrides {
        &self.overrides
    }

    pub fn cache(&self) -> &Arc<dyn AnswerCachePort> {
        &self.cache
    }
}
