//! Tests for the xoshiro256++ based default source.

use proptest::prelude::*;
use unit_rng::{DefaultSource, Source};

proptest! {
    #[test]
    fn unit_draws_stay_in_range(seed in any::<u64>()) {
        let mut source = DefaultSource::from_seed(seed);

        for _ in 0..1024 {
            let draw = source.next_unit();
            prop_assert!(draw >= 0.0, "draw {draw} is negative");
            prop_assert!(draw < 1.0, "draw {draw} reached the upper bound");
        }
    }

    #[test]
    fn bounded_draws_stay_in_range(seed in any::<u64>(), max in 1i32..10_000) {
        let mut source = DefaultSource::from_seed(seed);

        for _ in 0..256 {
            let draw = source.next_bounded(max);
            prop_assert!((0..max).contains(&draw));
        }
    }

    #[test]
    fn ranged_draws_stay_in_range(seed in any::<u64>()) {
        let mut source = DefaultSource::from_seed(seed);

        for _ in 0..256 {
            let draw = source.next_ranged(-50, 50);
            prop_assert!((-50..50).contains(&draw));
        }
    }
}

#[test]
fn same_seed_same_sequence() {
    let mut a = DefaultSource::from_seed(0xdead_beef);
    let mut b = DefaultSource::from_seed(0xdead_beef);

    for _ in 0..64 {
        assert_eq!(a.next_unit(), b.next_unit());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = DefaultSource::from_seed(1);
    let mut b = DefaultSource::from_seed(2);

    let diverged = (0..16).any(|_| a.next_unit() != b.next_unit());
    assert!(diverged);
}

#[test]
fn entropy_seeded_instances_are_independent() {
    let mut a = DefaultSource::from_entropy();
    let mut b = DefaultSource::from_entropy();

    let diverged = (0..16).any(|_| a.next_unit() != b.next_unit());
    assert!(diverged);
}

#[test]
fn cloned_source_replays_the_sequence() {
    let mut original = DefaultSource::from_seed(42);
    let mut replay = original.clone();

    for _ in 0..32 {
        assert_eq!(original.next_unit(), replay.next_unit());
    }
}
