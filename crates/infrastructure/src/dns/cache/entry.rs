use splitdns_domain::Answer;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Answer set stored under one cache key, valid until `expires_at`.
#[derive(Debug, Clone)]
pub struct CachedEntry {
    pub answers: Arc<[Answer]>,
    pub expires_at: Instant,
}

impl CachedEntry {
    /// Entry expiring after the smallest TTL in `answers`.
    ///
    /// Returns `None` for an empty answer set.
    pub fn new(answers: &[Answer], now: Instant) -> Option<Self> {
        let min_ttl = answers.iter().map(|a| a.ttl).min()?;
        Some(Self {
            answers: Arc::from(answers),
            expires_at: now + Duration::from_secs(u64::from(min_ttl)),
        })
    }

    /// Whole seconds left before expiry, rounded up.
    ///
    /// `None` once the entry has expired.
    pub fn remaining_ttl(&self, now: Instant) -> Option<u32> {
        let left = self.expires_at.checked_duration_since(now)?;
        let secs = left.as_secs() + u64::from(left.subsec_nanos() > 0);
        match secs {
            0 => None,
            s => Some(u32::try_from(s).unwrap_or(u32::MAX)),
        }
    }

    #[inline]
    pub fn is_malformed(&self) -> bool {
        self.answers.is_empty()
    }
}
