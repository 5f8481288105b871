//! # Mining Puzzle Engine
//!
//! A framework-free proof-of-work search engine backing interactive
//! mining-puzzle simulators: given arbitrary input data and a difficulty
//! target (leading zero hex characters of a digest), it searches for a
//! satisfying nonce while exposing live progress statistics, manual
//! stepping, automatic continuous search at a configurable speed, and
//! safe cancellation.
//!
//! ## Architecture
//!
//! A [`session::SearchSession`] owns all mutable state for one search
//! and is its only mutation path. The digest primitive is pluggable
//! behind the [`core::DigestProvider`] trait; the engine ships a SHA-256
//! default. Hosts observe progress by polling snapshots and statistics
//! or by subscribing to [`session::SearchEvent`]s; the engine never
//! couples to a rendering cycle.
//!
//! The automatic mode runs as a single cancellable Tokio task. Every
//! candidate evaluation is serialized, and results from a step that was
//! cancelled mid-flight are discarded rather than applied, so state can
//! never move backwards or race with itself.

#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications,
    clippy::all
)]
#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod session;
pub mod utils;

pub use crate::config::SearchConfig;
pub use crate::core::{
    Difficulty, DigestProvider, HistoryBuffer, HistoryEntry, Nonce, Puzzle, SearchState,
    SearchStats, SearchStatus, Sha256DigestProvider, StateSnapshot, leading_zeros,
};
pub use crate::error::{Error, Result};
pub use crate::session::{SearchEvent, SearchSession, StepOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        config::SearchConfig,
        core::{Difficulty, DigestProvider, HistoryEntry, Nonce, SearchStats, SearchStatus,
            Sha256DigestProvider, StateSnapshot},
        error::{Error, Result},
        session::{SearchEvent, SearchSession, StepOutcome},
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
