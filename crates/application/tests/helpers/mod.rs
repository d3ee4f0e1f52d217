#![allow(dead_code)]

mod mock_answer_cache;
mod mock_upstream;

pub use mock_answer_cache::MockAnswerCache;
pub use mock_upstream::MockUpstream;

use splitdns_domain::Answer;

pub const TYPE_A: u16 = 1;
pub const TYPE_AAAA: u16 = 28;
pub const TYPE_MX: u16 = 15;

pub fn a_record(name: &str, ttl: u32, ip: &str) -> Answer {
    Answer::new(name, TYPE_A, ttl, ip)
}

pub fn aaaa_record(name: &str, ttl: u32, ip: &str) -> Answer {
    Answer::new(name, TYPE_AAAA, ttl, ip)
}
