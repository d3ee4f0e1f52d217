use super::clock::{Clock, SystemClock};
use super::entry::CachedEntry;
use super::key::CacheKey;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use splitdns_application::ports::AnswerCachePort;
use splitdns_domain::{Answer, RecordType};
use std::sync::Arc;
use tracing::debug;

/// TTL-aware answer cache.
///
/// Entries live until the smallest TTL of their answer set runs out. Expired
/// entries are only removed when a read finds them; there is no background
/// sweep. Reads rewrite every answer's TTL to the whole seconds remaining.
pub struct AnswerCache {
    entries: DashMap<CacheKey, CachedEntry, FxBuildHasher>,
    clock: Arc<dyn Clock>,
}

impl AnswerCache {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            clock,
        }
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for AnswerCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerCachePort for AnswerCache {
    fn get(&self, domain: &str, record_type: u16) -> Option<Vec<Answer>> {
        let key = CacheKey::new(domain, record_type);
        let now = self.clock.now();

        let malformed = match self.entries.get(&key) {
            None => return None,
            Some(entry) if entry.is_malformed() => true,
            Some(entry) => match entry.remaining_ttl(now) {
                Some(ttl) => {
                    return Some(entry.answers.iter().map(|a| a.with_ttl(ttl)).collect());
                }
                None => false,
            },
        };

        // Only drop it if it is still unusable; a concurrent set may have replaced it.
        self.entries
            .remove_if(&key, |_, e| e.is_malformed() || e.remaining_ttl(now).is_none());

        let record_type = RecordType::label(record_type);
        if malformed {
            debug!(domain = %domain, record_type = %record_type, "malformed cache entry evicted");
        } else {
            debug!(domain = %domain, record_type = %record_type, "expired");
        }

        None
    }

    fn set(&self, domain: &str, record_type: u16, answers: &[Answer]) {
        let Some(entry) = CachedEntry::new(answers, self.clock.now()) else {
            return;
        };
        self.entries.insert(CacheKey::new(domain, record_type), entry);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
