use crate::ports::UpstreamHandle;
use rustc_hash::FxHashMap;
use splitdns_domain::fqdn::{is_normalized, parent_domain};
use std::sync::Arc;

/// Maps fully-qualified domains to the upstream handle serving them.
///
/// A domain registered here also covers all of its subdomains, unless one of
/// them is registered itself. Lookups walk from the queried name towards the
/// root, so the longest registered suffix wins:
///
/// ```text
/// example.com.      -> A
/// mail.example.com. -> B
///
/// route("x.mail.example.com.") == B
/// route("www.example.com.")    == A
/// route("other.com.")          == None
/// ```
///
/// Populated once at startup, then shared read-only across queries.
#[derive(Default)]
pub struct RoutingTable {
    routes: FxHashMap<Arc<str>, Arc<dyn UpstreamHandle>>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` for `domain` and its subdomains.
    ///
    /// `domain` must already be normalized. Registering the same domain
    /// again replaces the previous handle.
    pub fn add(&mut self, domain: impl Into<Arc<str>>, handle: Arc<dyn UpstreamHandle>) {
        let domain = domain.into();
        debug_assert!(
            is_normalized(&domain),
            "routing domain must be normalized: {}",
            domain
        );
        self.routes.insert(domain, handle);
    }

    /// Handle registered for the most specific domain matching `domain`.
    pub fn route(&self, domain: &str) -> Option<&Arc<dyn UpstreamHandle>> {
        let mut candidate = Some(domain);
        while let Some(name) = candidate {
            if let Some(handle) = self.routes.get(name) {
                return Some(handle);
            }
            candidate = parent_domain(name);
        }
        None
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
