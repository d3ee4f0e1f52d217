use splitdns_domain::Answer;

/// Port for the TTL-aware answer cache sitting in front of upstream calls.
///
/// Implementations are internally synchronized; callers never lock.
pub trait AnswerCachePort: Send + Sync {
    /// Fresh answers for `(domain, record_type)` with TTLs rewritten to the
    /// remaining lifetime, or `None` on a miss. Expired entries are evicted.
    fn get(&self, domain: &str, record_type: u16) -> Option<Vec<Answer>>;

    /// Store `answers`, expiring after the smallest TTL among them.
    /// Empty input is ignored.
    fn set(&self, domain: &str, record_type: u16, answers: &[Answer]);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
