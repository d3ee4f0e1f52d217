use splitdns_application::ports::AnswerCachePort;
use splitdns_domain::Answer;
use splitdns_infrastructure::dns::{AnswerCache, ManualClock};
use std::sync::Arc;
use std::time::Duration;

const A: u16 = 1;
const AAAA: u16 = 28;

fn cache() -> (AnswerCache, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    (AnswerCache::with_clock(clock.clone()), clock)
}

fn a(name: &str, ttl: u32, ip: &str) -> Answer {
    Answer::new(name, A, ttl, ip)
}

// ── freshness ────────────────────────────────────────────────────────────────

#[test]
fn test_fresh_entry_is_returned() {
    let (cache, _clock) = cache();
    cache.set("example.com.", A, &[a("example.com.", 300, "1.2.3.4")]);

    let answers = cache.get("example.com.", A).unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].data.as_ref(), "1.2.3.4");
    assert_eq!(answers[0].ttl, 300);
}

#[test]
fn test_missing_key_is_a_miss() {
    let (cache, _clock) = cache();
    assert!(cache.get("example.com.", A).is_none());
}

#[test]
fn test_remaining_ttl_counts_down_and_rounds_up() {
    let (cache, clock) = cache();
    cache.set("example.com.", A, &[a("example.com.", 10, "1.2.3.4")]);

    clock.advance(Duration::from_millis(500));
    assert_eq!(cache.get("example.com.", A).unwrap()[0].ttl, 10);

    clock.advance(Duration::from_millis(3_000));
    assert_eq!(cache.get("example.com.", A).unwrap()[0].ttl, 7);

    clock.advance(Duration::from_millis(6_400));
    assert_eq!(cache.get("example.com.", A).unwrap()[0].ttl, 1);
}

#[test]
fn test_remaining_ttl_never_increases() {
    let (cache, clock) = cache();
    cache.set("example.com.", A, &[a("example.com.", 60, "1.2.3.4")]);

    let mut last = u32::MAX;
    for _ in 0..59 {
        let ttl = cache.get("example.com.", A).unwrap()[0].ttl;
        assert!(ttl <= last);
        last = ttl;
        clock.advance(Duration::from_secs(1));
    }
}

// ── expiry ───────────────────────────────────────────────────────────────────

#[test]
fn test_entry_expires_and_is_evicted() {
    let (cache, clock) = cache();
    cache.set("example.com.", A, &[a("example.com.", 10, "1.2.3.4")]);
    assert_eq!(cache.len(), 1);

    clock.advance(Duration::from_secs(11));

    assert!(cache.get("example.com.", A).is_none());
    assert_eq!(cache.len(), 0);
}

#[test]
fn test_entry_expires_exactly_at_ttl() {
    let (cache, clock) = cache();
    cache.set("example.com.", A, &[a("example.com.", 10, "1.2.3.4")]);

    clock.advance(Duration::from_secs(10));

    assert!(cache.get("example.com.", A).is_none());
}

#[test]
fn test_expiry_is_lazy() {
    let (cache, clock) = cache();
    cache.set("one.example.", A, &[a("one.example.", 5, "1.1.1.1")]);
    cache.set("two.example.", A, &[a("two.example.", 5, "2.2.2.2")]);

    clock.advance(Duration::from_secs(30));
    assert_eq!(cache.len(), 2, "nothing is swept without a read");

    assert!(cache.get("one.example.", A).is_none());
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_zero_ttl_answers_are_never_served() {
    let (cache, _clock) = cache();
    cache.set("example.com.", A, &[a("example.com.", 0, "1.2.3.4")]);

    assert!(cache.get("example.com.", A).is_none());
    assert!(cache.is_empty());
}

// ── min TTL ──────────────────────────────────────────────────────────────────

#[test]
fn test_expiry_follows_smallest_ttl() {
    let (cache, clock) = cache();
    cache.set(
        "www.example.com.",
        A,
        &[
            Answer::new("www.example.com.", 5, 3600, "edge.example.net."),
            a("edge.example.net.", 20, "1.2.3.4"),
            a("edge.example.net.", 300, "1.2.3.5"),
        ],
    );

    let answers = cache.get("www.example.com.", A).unwrap();
    assert_eq!(answers.len(), 3);
    assert!(answers.iter().all(|ans| ans.ttl == 20));
    assert_eq!(answers[0].data.as_ref(), "edge.example.net.");

    clock.advance(Duration::from_secs(21));
    assert!(cache.get("www.example.com.", A).is_none());
}

// ── writes ───────────────────────────────────────────────────────────────────

#[test]
fn test_empty_answers_are_not_stored() {
    let (cache, _clock) = cache();
    cache.set("example.com.", A, &[]);

    assert!(cache.is_empty());
    assert!(cache.get("example.com.", A).is_none());
}

#[test]
fn test_empty_answers_do_not_clear_existing_entry() {
    let (cache, _clock) = cache();
    cache.set("example.com.", A, &[a("example.com.", 300, "1.2.3.4")]);
    cache.set("example.com.", A, &[]);

    assert!(cache.get("example.com.", A).is_some());
}

#[test]
fn test_set_overwrites_existing_entry() {
    let (cache, clock) = cache();
    cache.set("example.com.", A, &[a("example.com.", 5, "1.2.3.4")]);
    clock.advance(Duration::from_secs(3));
    cache.set("example.com.", A, &[a("example.com.", 100, "5.6.7.8")]);

    let answers = cache.get("example.com.", A).unwrap();
    assert_eq!(answers[0].data.as_ref(), "5.6.7.8");
    assert_eq!(answers[0].ttl, 100);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_record_types_are_separate_keys() {
    let (cache, _clock) = cache();
    cache.set("example.com.", A, &[a("example.com.", 300, "1.2.3.4")]);
    cache.set(
        "example.com.",
        AAAA,
        &[Answer::new("example.com.", AAAA, 300, "2001:db8::1")],
    );

    assert_eq!(cache.len(), 2);
    assert_eq!(cache.get("example.com.", AAAA).unwrap()[0].data.as_ref(), "2001:db8::1");
    assert_eq!(cache.get("example.com.", A).unwrap()[0].data.as_ref(), "1.2.3.4");
}

#[test]
fn test_clear_drops_everything() {
    let (cache, _clock) = cache();
    cache.set("example.com.", A, &[a("example.com.", 300, "1.2.3.4")]);
    cache.clear();
    assert!(cache.is_empty());
}

// ── concurrency ──────────────────────────────────────────────────────────────

#[test]
fn test_concurrent_readers_and_writers() {
    let clock = Arc::new(ManualClock::new());
    let cache = Arc::new(AnswerCache::with_clock(clock));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || {
                for i in 0..200 {
                    let name = format!("host{}.example.", i % 50);
                    let ip = format!("10.0.{}.{}", t, i % 250);
                    cache.set(&name, A, &[a(&name, 300, &ip)]);
                    let answers = cache.get(&name, A).unwrap();
                    assert_eq!(answers.len(), 1);
                    assert_eq!(answers[0].name.as_ref(), name);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 50);
}
