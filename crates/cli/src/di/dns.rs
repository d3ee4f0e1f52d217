use splitdns_application::ports::AnswerCachePort;
use splitdns_application::use_cases::ResolveQueryUseCase;
use splitdns_domain::Config;
use splitdns_infrastructure::dns::{AnswerCache, ResolverBuilder};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub resolver: Arc<ResolveQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let cache: Arc<dyn AnswerCachePort> = Arc::new(AnswerCache::new());
        let resolver = ResolverBuilder::new(&config.dns)
            .with_cache(cache)
            .build()?;

        Ok(Self {
            resolver: Arc::new(resolver),
        })
    }
}
