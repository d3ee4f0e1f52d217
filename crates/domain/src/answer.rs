use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One resolved resource record as handed to callers of the resolver.
///
/// The serialized shape (`name`, `type`, `TTL`, `data`) mirrors the JSON
/// answer objects used by public DNS JSON APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Fully-qualified owner name.
    pub name: Arc<str>,

    /// Record type code (RFC 1035 numbering).
    #[serde(rename = "type")]
    pub record_type: u16,

    /// Seconds the answer may still be treated as valid.
    #[serde(rename = "TTL")]
    pub ttl: u32,

    /// Record value in presentation format.
    pub data: Arc<str>,
}

impl Answer {
    pub fn new(
        name: impl Into<Arc<str>>,
        record_type: u16,
        ttl: u32,
        data: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data: data.into(),
        }
    }

    /// Copy of this answer carrying a different remaining TTL.
    #[inline]
    pub fn with_ttl(&self, ttl: u32) -> Self {
        Self {
            name: Arc::clone(&self.name),
            record_type: self.record_type,
            ttl,
            data: Arc::clone(&self.data),
        }
    }
}
