//! Search state machine and snapshots

use crate::core::{Difficulty, Nonce};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Lifecycle of a search session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    /// No search has run since construction or the last reset
    #[default]
    Idle,
    /// Candidates are being evaluated
    Searching,
    /// The current digest satisfies the difficulty
    Found,
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStatus::Idle => "idle",
            SearchStatus::Searching => "searching",
            SearchStatus::Found => "found",
        };
        write!(f, "{}", name)
    }
}

/// Mutable search progress, owned exclusively by one session
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current candidate counter
    pub nonce: Nonce,
    /// Digest of the most recent evaluation, if any
    pub current_digest: Option<String>,
    /// Lifecycle status
    pub status: SearchStatus,
    /// Evaluations credited since the last reset
    pub attempt_count: u64,
    /// Set on the first transition into `Searching`, cleared on reset
    pub started_at: Option<Instant>,
}

impl SearchState {
    /// Create a fresh idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the session searching, recording the start time once
    pub(crate) fn begin_searching(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
        self.status = SearchStatus::Searching;
    }

    /// Seconds since the search began, 0.0 before the first start
    pub fn elapsed_seconds(&self) -> f64 {
        self.started_at
            .map(|at| at.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// Read-only view of a session handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Current candidate counter
    pub nonce: Nonce,
    /// Digest of the most recent evaluation, if any
    pub digest: Option<String>,
    /// Lifecycle status
    pub status: SearchStatus,
    /// Evaluations credited since the last reset
    pub attempt_count: u64,
    /// Seconds since the search began
    pub elapsed_seconds: f64,
    /// Difficulty the session is searching against
    pub difficulty: Difficulty,
}
