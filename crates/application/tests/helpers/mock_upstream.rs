use async_trait::async_trait;
use splitdns_application::ports::UpstreamHandle;
use splitdns_domain::Answer;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Upstream returning canned answers and recording every call.
pub struct MockUpstream {
    name: String,
    responses: Mutex<HashMap<(String, u16), Vec<Answer>>>,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, u16)>>,
}

impl MockUpstream {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            responses: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn set_response(&self, domain: &str, record_type: u16, answers: Vec<Answer>) {
        self.responses
            .lock()
            .unwrap()
            .insert((domain.to_string(), record_type), answers);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(String, u16)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamHandle for MockUpstream {
    async fn resolve(&self, domain: &str, record_type: u16) -> Vec<Answer> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((domain.to_string(), record_type));
        self.responses
            .lock()
            .unwrap()
            .get(&(domain.to_string(), record_type))
            .cloned()
            .unwrap_or_default()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
