use rustc_hash::FxHashMap;
use splitdns_domain::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

/// Exact-match address overrides, one table per address family.
///
/// IPv4 entries answer `A` queries only and IPv6 entries answer `AAAA`
/// queries only; any other record type never matches.
#[derive(Debug, Default)]
pub struct StaticOverrides {
    v4: FxHashMap<Arc<str>, Arc<str>>,
    v6: FxHashMap<Arc<str>, Arc<str>>,
}

impl StaticOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// `domain` must already be normalized.
    pub fn insert_v4(&mut self, domain: impl Into<Arc<str>>, addr: Ipv4Addr) {
        self.v4.insert(domain.into(), addr.to_string().into());
    }

    /// `domain` must already be normalized.
    pub fn insert_v6(&mut self, domain: impl Into<Arc<str>>, addr: Ipv6Addr) {
        self.v6.insert(domain.into(), addr.to_string().into());
    }

    /// Literal address forced for `(domain, record_type)`, if any.
    pub fn lookup(&self, domain: &str, record_type: u16) -> Option<&Arc<str>> {
        match RecordType::from_u16(record_type) {
            Some(RecordType::A) => self.v4.get(domain),
            Some(RecordType::AAAA) => self.v6.get(domain),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v4.is_empty() && self.v6.is_empty()
    }
}
