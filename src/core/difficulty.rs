//! Leading-zero difficulty matching

use serde::{Deserialize, Serialize};
use std::fmt;

/// Required count of leading zero hex characters in a digest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Difficulty(pub u32);

impl Difficulty {
    /// Create a new difficulty level
    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    /// Get the required leading-zero count
    pub const fn level(self) -> u32 {
        self.0
    }

    /// Check whether a digest satisfies this difficulty.
    ///
    /// Only the prefix is inspected; counting stops at the first non-zero
    /// character. Level 0 matches every digest. A level greater than the
    /// digest length can never match, which is a valid terminal condition
    /// rather than an error.
    pub fn matches(self, digest: &str) -> bool {
        leading_zeros(digest) >= self.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Difficulty {
    fn from(level: u32) -> Self {
        Self(level)
    }
}

/// Count consecutive leading `'0'` characters of a hex digest
pub fn leading_zeros(digest: &str) -> u32 {
    digest.chars().take_while(|&c| c == '0').count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("00ab3f", 2; "two leading zeros")]
    #[test_case("abc123", 0; "no leading zeros")]
    #[test_case("0000", 4; "all zeros")]
    #[test_case("", 0; "empty digest")]
    #[test_case("0a0b0c", 1; "interior zeros ignored")]
    fn test_leading_zeros(digest: &str, expected: u32) {
        assert_eq!(leading_zeros(digest), expected);
    }

    #[test]
    fn test_difficulty_zero_always_matches() {
        let difficulty = Difficulty::new(0);
        assert!(difficulty.matches("ffffffff"));
        assert!(difficulty.matches("00ab"));
        assert!(difficulty.matches(""));
    }

    #[test]
    fn test_difficulty_inspects_prefix_only() {
        let digest = "00ff00ff";
        assert!(Difficulty::new(2).matches(digest));
        assert!(!Difficulty::new(3).matches(digest));
    }

    #[test]
    fn test_difficulty_beyond_digest_length_never_matches() {
        // Unattainable but valid: an all-zero 64-char digest still falls
        // short of level 65.
        let all_zeros = "0".repeat(64);
        assert!(Difficulty::new(64).matches(&all_zeros));
        assert!(!Difficulty::new(65).matches(&all_zeros));
    }

    #[test]
    fn test_difficulty_display_and_level() {
        let difficulty = Difficulty::new(3);
        assert_eq!(difficulty.level(), 3);
        assert_eq!(difficulty.to_string(), "3");
    }
}
