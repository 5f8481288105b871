//! Nonce type for puzzle search operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Candidate counter combined with the puzzle input before hashing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Nonce(pub u64);

impl Nonce {
    /// Create a new Nonce
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Next candidate for an automatic tick
    pub fn incremented(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Move the nonce by a signed delta, clamped to a floor of zero
    pub fn offset(self, delta: i64) -> Self {
        if delta >= 0 {
            Self(self.0.saturating_add(delta as u64))
        } else {
            Self(self.0.saturating_sub(delta.unsigned_abs()))
        }
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Nonce {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Nonce> for u64 {
    fn from(nonce: Nonce) -> Self {
        nonce.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_creation() {
        let nonce = Nonce::new(12345);
        assert_eq!(nonce.value(), 12345);
    }

    #[test]
    fn test_nonce_incremented() {
        assert_eq!(Nonce::new(100).incremented().value(), 101);

        // Wrapping at the top of the range
        assert_eq!(Nonce::new(u64::MAX).incremented().value(), 0);
    }

    #[test]
    fn test_nonce_offset_positive() {
        assert_eq!(Nonce::new(5).offset(10).value(), 15);
        assert_eq!(Nonce::new(0).offset(1).value(), 1);
    }

    #[test]
    fn test_nonce_offset_clamps_at_zero() {
        // Moving back past zero lands on zero, never negative
        assert_eq!(Nonce::new(5).offset(-10).value(), 0);
        assert_eq!(Nonce::new(0).offset(-1).value(), 0);
        assert_eq!(Nonce::new(10).offset(-10).value(), 0);
    }

    #[test]
    fn test_nonce_display() {
        assert_eq!(Nonce::new(42).to_string(), "42");
    }

    #[test]
    fn test_nonce_conversions() {
        let nonce: Nonce = 999u64.into();
        assert_eq!(nonce.value(), 999);

        let value: u64 = nonce.into();
        assert_eq!(value, 999);
    }

    #[test]
    fn test_nonce_default() {
        assert_eq!(Nonce::default().value(), 0);
    }
}
