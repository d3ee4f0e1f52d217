mod answer_cache_port;
mod upstream_handle;

pub use answer_cache_port::AnswerCachePort;
pub use upstream_handle::UpstreamHandle;

// Re-export for convenience
pub use splitdns_domain::Answer;
