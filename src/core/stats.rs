//! Statistics derived on demand from a session's counters

use crate::core::SearchState;
use serde::{Deserialize, Serialize};

/// Point-in-time statistics for a search session.
///
/// Nothing here is stored redundantly; both fields derive from the
/// state's counters and timestamps at the moment of the call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchStats {
    /// Seconds since the search began, 0.0 before the first start
    pub elapsed_seconds: f64,
    /// Evaluations credited since the last reset
    pub attempt_count: u64,
    /// Attempts per second, 0.0 until time has elapsed
    pub hash_rate: f64,
}

impl SearchStats {
    /// Derive statistics from the current state
    pub fn from_state(state: &SearchState) -> Self {
        let elapsed_seconds = state.elapsed_seconds();
        let hash_rate = if elapsed_seconds > 0.0 {
            state.attempt_count as f64 / elapsed_seconds
        } else {
            0.0
        };

        Self {
            elapsed_seconds,
            attempt_count: state.attempt_count,
            hash_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_stats_before_start() {
        let state = SearchState::new();
        let stats = SearchStats::from_state(&state);
        assert_eq!(stats.elapsed_seconds, 0.0);
        assert_eq!(stats.attempt_count, 0);
        assert_eq!(stats.hash_rate, 0.0);
    }

    #[test]
    fn test_stats_after_attempts() {
        let mut state = SearchState::new();
        state.begin_searching();
        state.attempt_count = 50;
        std::thread::sleep(Duration::from_millis(20));

        let stats = SearchStats::from_state(&state);
        assert_eq!(stats.attempt_count, 50);
        assert!(stats.elapsed_seconds > 0.0);
        assert!(stats.hash_rate > 0.0);
        assert!(stats.hash_rate <= 50.0 / stats.elapsed_seconds + 1.0);
    }
}
