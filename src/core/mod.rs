//! Core types and structures for the puzzle engine
//!
//! This module contains the fundamental types used throughout the engine:
//! the nonce being searched, the difficulty matcher, the digest provider
//! seam, the puzzle input, the search state machine, and the derived
//! statistics and history surfaces.

mod difficulty;
mod digest;
mod history;
mod nonce;
mod puzzle;
mod state;
mod stats;

pub use difficulty::{Difficulty, leading_zeros};
pub use digest::{DigestProvider, Sha256DigestProvider};
pub use history::{HistoryBuffer, HistoryEntry};
pub use nonce::Nonce;
pub use puzzle::Puzzle;
pub use state::{SearchState, SearchStatus, StateSnapshot};
pub use stats::SearchStats;

/// Constants for the search engine
pub mod constants {
    /// Hex characters in a SHA-256 digest
    pub const DIGEST_HEX_CHARS: u32 = 64;

    /// Attempt history entries retained for display
    pub const HISTORY_CAPACITY: usize = 8;

    /// Slowest allowed automatic speed
    pub const MIN_AUTO_SPEED: u32 = 10;

    /// Fastest allowed automatic speed
    pub const MAX_AUTO_SPEED: u32 = 100;

    /// Floor for the automatic tick interval in milliseconds
    pub const MIN_TICK_MILLIS: u64 = 10;

    /// Numerator of the speed-to-interval mapping in milliseconds
    pub const TICK_BUDGET_MILLIS: u64 = 1_000;
}


#[cfg(test)]
mod tests_properties;
