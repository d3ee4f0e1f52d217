use splitdns_application::ports::AnswerCachePort;
use splitdns_domain::Answer;
use std::collections::HashMap;
use std::sync::Mutex;

/// Non-expiring in-memory cache that honors the empty-result rule.
#[derive(Default)]
pub struct MockAnswerCache {
    entries: Mutex<HashMap<(String, u16), Vec<Answer>>>,
}

impl MockAnswerCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preload(&self, domain: &str, record_type: u16, answers: Vec<Answer>) {
        self.entries
            .lock()
            .unwrap()
            .insert((domain.to_string(), record_type), answers);
    }

    pub fn contains(&self, domain: &str, record_type: u16) -> bool {
        self.entries
            .lock()
            .unwrap()
            .contains_key(&(domain.to_string(), record_type))
    }
}

impl AnswerCachePort for MockAnswerCache {
    fn get(&self, domain: &str, record_type: u16) -> Option<Vec<Answer>> {
        self.entries
            .lock()
            .unwrap()
            .get(&(domain.to_string(), record_type))
            .cloned()
    }

    fn set(&self, domain: &str, record_type: u16, answers: &[Answer]) {
        if answers.is_empty() {
            return;
        }
        self.entries
            .lock()
            .unwrap()
            .insert((domain.to_string(), record_type), answers.to_vec());
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
