use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub domain: Arc<str>,
    pub record_type: u16,
}

impl CacheKey {
    #[inline]
    pub fn new(domain: &str, record_type: u16) -> Self {
        Self {
            domain: Arc::from(domain),
            record_type,
        }
    }
}
