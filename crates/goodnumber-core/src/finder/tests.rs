//! Tests for the target finder and family generators.

use super::*;
use crate::digits::{digits_of, num_digits};
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

// Counts events carrying a given message.
struct MessageCounter {
    message: &'static str,
    count: Arc<AtomicUsize>,
}

impl<S: Subscriber> Layer<S> for MessageCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        struct Visitor(Option<String>);
        impl tracing::field::Visit for Visitor {
            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.0 = Some(format!("{:?}", value));
                }
            }
        }
        let mut visitor = Visitor(None);
        event.record(&mut visitor);
        if visitor.0.as_deref() == Some(self.message) {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_events(message: &'static str, f: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(MessageCounter {
        message,
        count: Arc::clone(&count),
    });
    tracing::subscriber::with_default(subscriber, f);
    count.load(Ordering::SeqCst)
}

#[test]
fn test_round() {
    assert_eq!(next_round(0), Some(1));
    assert_eq!(next_round(5), Some(6));
    assert_eq!(next_round(10), Some(20));
    assert_eq!(next_round(999), Some(1000));
    assert_eq!(next_round(1000), Some(2000));
    assert_eq!(next_round(123_456), Some(200_000));
    assert_eq!(next_round(u64::MAX), None);
}

#[test]
fn test_repdigit() {
    assert_eq!(next_repdigit(0), Some(1));
    assert_eq!(next_repdigit(9), Some(11));
    assert_eq!(next_repdigit(50), Some(55));
    assert_eq!(next_repdigit(55), Some(66));
    assert_eq!(next_repdigit(99), Some(111));
    assert_eq!(next_repdigit(1234), Some(2222));
    assert_eq!(next_repdigit(99_999), Some(111_111));
    assert_eq!(next_repdigit(u64::MAX), None);
}

#[test]
fn test_seqdigit() {
    assert_eq!(next_seqdigit(0), Some(1));
    assert_eq!(next_seqdigit(1), Some(12));
    assert_eq!(next_seqdigit(100), Some(123));
    assert_eq!(next_seqdigit(122), Some(123));
    assert_eq!(next_seqdigit(123), Some(1234));
    assert_eq!(next_seqdigit(999_999_999), Some(1_234_567_890));
    assert_eq!(next_seqdigit(1_234_567_890), Some(12_345_678_901));
    assert_eq!(
        next_seqdigit(12_345_678_901_234_567_889),
        Some(12_345_678_901_234_567_890)
    );
    assert_eq!(next_seqdigit(12_345_678_901_234_567_890), None);
}

#[test]
fn test_pidigit() {
    assert_eq!(next_pidigit(0), Some(3));
    assert_eq!(next_pidigit(2), Some(3));
    assert_eq!(next_pidigit(3), Some(31));
    assert_eq!(next_pidigit(30), Some(31));
    assert_eq!(next_pidigit(31), Some(314));
    assert_eq!(next_pidigit(3141), Some(31_415));
    assert_eq!(next_pidigit(PI_DIGITS - 1), Some(PI_DIGITS));
}

#[test]
fn test_pidigit_excluded_above_constant() {
    assert_eq!(next_pidigit(PI_DIGITS), None);
    assert_eq!(next_pidigit(u64::MAX), None);

    let finder = TargetFinder::new();
    let families: Vec<Family> = finder
        .candidates(PI_DIGITS)
        .iter()
        .map(|c| c.family)
        .collect();
    assert!(!families.contains(&Family::PiDigit));
}

#[test]
fn test_target_is_minimum() {
    let finder = TargetFinder::new();
    // round 1000, repdigit 1111, seqdigit 1234, pi 3141
    assert_eq!(finder.target(999), Some(1000));
    // round 2000, repdigit 1111, seqdigit 1234, pi 3141
    assert_eq!(finder.target(1000), Some(1111));
    // round 200, repdigit 111, seqdigit 123, pi 314
    assert_eq!(finder.target(100), Some(111));
    // round 200, repdigit 222, seqdigit 1234, pi 314
    assert_eq!(finder.target(123), Some(200));
    assert_eq!(finder.target(0), Some(1));
}

#[test]
fn test_nearest_reports_family() {
    let finder = TargetFinder::new();
    let nearest = finder.nearest(3000).unwrap();
    // round 4000, repdigit 3333, seqdigit 12345, pi 3141
    assert_eq!(nearest.value, 3141);
    assert_eq!(nearest.family, Family::PiDigit);
}

#[test]
fn test_candidates_sorted() {
    let finder = TargetFinder::new();
    let candidates = finder.candidates(999);
    let values: Vec<u64> = candidates.iter().map(|c| c.value).collect();
    assert_eq!(values, vec![1000, 1111, 1234, 3141]);
    assert_eq!(candidates[0].family, Family::Round);
}

#[test]
fn test_candidates_tie_breaks_by_family() {
    let finder = TargetFinder::new();
    // round, repdigit and seqdigit all give 1
    let candidates = finder.candidates(0);
    assert_eq!(
        candidates,
        vec![
            Candidate { value: 1, family: Family::Round },
            Candidate { value: 1, family: Family::RepDigit },
            Candidate { value: 1, family: Family::SeqDigit },
            Candidate { value: 3, family: Family::PiDigit },
        ]
    );
}

#[test]
fn test_restricted_families() {
    let finder = TargetFinder::new().with_families([Family::PiDigit, Family::PiDigit]);
    assert_eq!(finder.families(), &[Family::PiDigit]);
    assert_eq!(finder.target(999), Some(3141));
    assert_eq!(finder.target(PI_DIGITS), None);

    let empty = TargetFinder::new().with_families([]);
    assert_eq!(empty.target(10), None);
    assert!(empty.candidates(10).is_empty());
}

#[test]
fn test_no_target_at_top_of_range() {
    assert_eq!(TargetFinder::new().target(u64::MAX), None);
}

#[test]
fn test_nearest_traces_every_family() {
    // Sequential so every event fires on this thread's subscriber.
    let finder = TargetFinder::new().with_parallel(false);
    let traced = count_events("Family candidate", || {
        assert_eq!(finder.nearest(999).map(|c| c.value), Some(1000));
    });
    assert_eq!(traced, Family::ALL.len());

    let traced = count_events("Family candidate", || {
        finder.candidates(999);
    });
    assert_eq!(traced, Family::ALL.len());
}

#[test]
fn test_family_names() {
    let names: Vec<String> = Family::ALL.iter().map(|f| f.to_string()).collect();
    assert_eq!(names, vec!["round", "rep_digit", "seq_digit", "pi_digit"]);
}

proptest! {
    #[test]
    fn target_exceeds_score(ap in any::<u64>()) {
        if let Some(target) = TargetFinder::new().target(ap) {
            prop_assert!(target > ap, "target={target} ap={ap}");
        }
    }

    #[test]
    fn every_candidate_exceeds_score(ap in 0u64..10_000_000_000_000) {
        for c in TargetFinder::new().candidates(ap) {
            prop_assert!(c.value > ap, "{:?} for ap={}", c, ap);
        }
    }

    #[test]
    fn round_is_multiple_of_power(ap in 0u64..1_000_000_000_000_000_000) {
        let round = next_round(ap).unwrap();
        prop_assert_eq!(round % 10u64.pow(num_digits(ap)), 0);
    }

    #[test]
    fn repdigit_has_identical_digits(ap in 0u64..1_000_000_000_000_000_000) {
        let rep = next_repdigit(ap).unwrap();
        let digits = digits_of(rep);
        prop_assert!(digits.iter().all(|&d| d == digits[0]), "rep={rep}");
    }

    #[test]
    fn seqdigit_follows_cycle(ap in 0u64..1_000_000_000_000_000_000) {
        let seq = next_seqdigit(ap).unwrap();
        for (i, d) in digits_of(seq).into_iter().enumerate() {
            prop_assert_eq!(u64::from(d), (i as u64 + 1) % 10);
        }
    }

    #[test]
    fn parallel_matches_sequential(ap in any::<u64>()) {
        let parallel = TargetFinder::new();
        let sequential = TargetFinder::new().with_parallel(false);
        prop_assert_eq!(parallel.candidates(ap), sequential.candidates(ap));
        prop_assert_eq!(parallel.target(ap), sequential.target(ap));
    }

    #[test]
    fn target_is_idempotent(ap in any::<u64>()) {
        let finder = TargetFinder::new();
        prop_assert_eq!(finder.target(ap), finder.target(ap));
    }
}
