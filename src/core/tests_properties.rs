//! Property-based tests for core engine data structures

use super::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn nonce_creation_consistency(value in any::<u64>()) {
        let nonce = Nonce::new(value);
        prop_assert_eq!(nonce.value(), value);
    }

    #[test]
    fn nonce_offset_never_negative(value in any::<u64>(), delta in any::<i64>()) {
        // The floor is structural: offsetting cannot underflow past zero.
        let moved = Nonce::new(value).offset(delta);
        prop_assert!(moved.value() <= value.saturating_add(delta.unsigned_abs()));
    }

    #[test]
    fn nonce_offset_roundtrip_above_floor(value in 1_000u64..1_000_000, delta in 1i64..1_000) {
        let nonce = Nonce::new(value);
        prop_assert_eq!(nonce.offset(delta).offset(-delta), nonce);
    }

    #[test]
    fn leading_zeros_bounded_by_length(digest in "[0-9a-f]{0,64}") {
        prop_assert!(leading_zeros(&digest) as usize <= digest.len());
    }

    #[test]
    fn difficulty_matching_is_monotone(digest in "[0-9a-f]{64}", level in 0u32..64) {
        // A digest that satisfies a harder level satisfies every easier one.
        if Difficulty::new(level + 1).matches(&digest) {
            prop_assert!(Difficulty::new(level).matches(&digest));
        }
    }

    #[test]
    fn difficulty_zero_matches_everything(digest in "[0-9a-f]{0,64}") {
        prop_assert!(Difficulty::new(0).matches(&digest));
    }

    #[test]
    fn preimage_preserves_input_prefix(data in prop::collection::vec(any::<u8>(), 0..128), value in any::<u64>()) {
        let puzzle = Puzzle::new(data.clone());
        let preimage = puzzle.preimage(Nonce::new(value));
        prop_assert_eq!(&preimage[..data.len()], &data[..]);
    }

    #[test]
    fn preimage_distinct_per_nonce(data in prop::collection::vec(any::<u8>(), 0..32), a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a != b);
        let puzzle = Puzzle::new(data);
        prop_assert_ne!(puzzle.preimage(Nonce::new(a)), puzzle.preimage(Nonce::new(b)));
    }
}
