//! Search session controller
//!
//! A [`SearchSession`] owns the mutable state and history for one puzzle
//! search and is the only mutation path into them. It drives manual
//! stepping and the automatic tick loop, serializes every candidate
//! evaluation so at most one digest is in flight, and discards stale
//! in-flight results after a pause, reset, difficulty change, or
//! solution via a monotonically increasing generation token.

use crate::config::{SearchConfig, validate_auto_speed};
use crate::core::{
    Difficulty, DigestProvider, HistoryBuffer, HistoryEntry, Nonce, Puzzle, SearchState,
    SearchStats, SearchStatus, Sha256DigestProvider, StateSnapshot,
};
use crate::error::{Error, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Notification sent to the host after an observable session change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The session entered `Searching`
    Started,
    /// A candidate was evaluated without matching
    Attempt {
        /// Evaluated nonce
        nonce: Nonce,
        /// Its digest
        digest: String,
    },
    /// The search completed
    Found {
        /// Winning nonce
        nonce: Nonce,
        /// Matching digest
        digest: String,
        /// Attempts credited over the whole session
        attempts: u64,
    },
    /// Automatic scheduling was suspended
    Paused,
    /// Automatic scheduling resumed
    Resumed,
    /// The session returned to `Idle`
    Reset,
    /// The digest provider failed for one step
    DigestFailed {
        /// Provider error message
        message: String,
    },
}

/// Result of one candidate evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Evaluated and did not match
    Missed,
    /// Evaluated and matched; the session is now `Found`
    Matched,
    /// A newer generation cancelled the step before its result applied
    Discarded,
}

/// Kind of step being evaluated
enum StepKind {
    /// Automatic tick: nonce advances by one, one attempt credited
    Auto,
    /// Manual step by a signed delta, `|delta|` attempts credited
    Manual(i64),
}

/// Session data guarded by the state lock
struct Inner {
    config: SearchConfig,
    puzzle: Puzzle,
    state: SearchState,
    history: HistoryBuffer,
}

/// State shared between the session handle and the auto-search task
struct Shared {
    inner: Mutex<Inner>,
    /// Bumped on pause, reset, difficulty change, and solution; a step
    /// whose ticket no longer matches at apply time is discarded.
    generation: AtomicU64,
    /// True while a spawned task owns the tick loop
    auto_running: AtomicBool,
    /// Held across the digest await so at most one evaluation is in
    /// flight and results apply in initiation order.
    step_gate: tokio::sync::Mutex<()>,
    provider: Arc<dyn DigestProvider>,
    events: Mutex<Option<mpsc::Sender<SearchEvent>>>,
}

impl Shared {
    /// Evaluate one candidate and apply the result unless cancelled.
    async fn step(&self, kind: StepKind) -> Result<StepOutcome> {
        let _gate = self.step_gate.lock().await;
        let ticket = self.generation.load(Ordering::SeqCst);

        // Stage the candidate without mutating state; nothing changes if
        // the provider fails or the step is cancelled mid-flight.
        let (candidate, message, credited) = {
            let inner = self.inner.lock();
            if inner.state.status == SearchStatus::Found {
                return Err(Error::invalid_transition("found", "step"));
            }
            let (candidate, credited) = match kind {
                StepKind::Auto => {
                    // A tick that raced past the loop condition while the
                    // session was being paused or reset must not evaluate.
                    if !self.auto_running.load(Ordering::SeqCst) {
                        return Ok(StepOutcome::Discarded);
                    }
                    (inner.state.nonce.incremented(), 1)
                }
                StepKind::Manual(delta) => {
                    (inner.state.nonce.offset(delta), delta.unsigned_abs())
                }
            };
            (candidate, inner.puzzle.preimage(candidate), credited)
        };

        let digest = self.provider.digest(&message).await?;

        let mut inner = self.inner.lock();
        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(nonce = %candidate, "discarding stale step result");
            return Ok(StepOutcome::Discarded);
        }

        // A manual step from Idle begins the session.
        if inner.state.status == SearchStatus::Idle {
            inner.state.begin_searching();
        }

        let matched = inner.config.difficulty.matches(&digest);
        inner.state.nonce = candidate;
        inner.state.current_digest = Some(digest.clone());
        inner.state.attempt_count += credited;
        inner.history.push(HistoryEntry {
            nonce: candidate,
            digest: digest.clone(),
            matched,
        });

        if matched {
            inner.state.status = SearchStatus::Found;
            let attempts = inner.state.attempt_count;
            drop(inner);

            // Solved: stop scheduling and invalidate anything in flight.
            self.auto_running.store(false, Ordering::SeqCst);
            self.generation.fetch_add(1, Ordering::SeqCst);

            info!(nonce = %candidate, attempts, "solution found");
            self.emit(SearchEvent::Found {
                nonce: candidate,
                digest,
                attempts,
            });
            Ok(StepOutcome::Matched)
        } else {
            drop(inner);
            self.emit(SearchEvent::Attempt {
                nonce: candidate,
                digest,
            });
            Ok(StepOutcome::Missed)
        }
    }

    /// Best-effort event delivery; a slow or closed receiver never
    /// blocks a step.
    fn emit(&self, event: SearchEvent) {
        if let Some(sender) = self.events.lock().as_ref() {
            let _ = sender.try_send(event);
        }
    }
}

/// Controller for one proof-of-work search session.
///
/// Owns [`SearchState`] and [`HistoryBuffer`] exclusively; hosts read
/// progress through [`snapshot`](Self::snapshot),
/// [`stats`](Self::stats), and [`history`](Self::history), or subscribe
/// to [`SearchEvent`]s. Lifecycle methods that schedule the automatic
/// loop must be called within a Tokio runtime.
pub struct SearchSession {
    shared: Arc<Shared>,
}

impl SearchSession {
    /// Create a session over the given configuration and digest provider
    pub fn new(config: SearchConfig, provider: Arc<dyn DigestProvider>) -> Result<Self> {
        config.validate()?;
        let puzzle = Puzzle::new(config.data.clone());

        Ok(Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    config,
                    puzzle,
                    state: SearchState::new(),
                    history: HistoryBuffer::new(),
                }),
                generation: AtomicU64::new(0),
                auto_running: AtomicBool::new(false),
                step_gate: tokio::sync::Mutex::new(()),
                provider,
                events: Mutex::new(None),
            }),
        })
    }

    /// Create a session backed by the built-in SHA-256 provider
    pub fn with_default_provider(config: SearchConfig) -> Result<Self> {
        Self::new(config, Arc::new(Sha256DigestProvider))
    }

    /// Register an event sink.
    ///
    /// Delivery is best effort; polling accessors remain authoritative.
    pub fn set_event_sink(&self, sender: mpsc::Sender<SearchEvent>) {
        *self.shared.events.lock() = Some(sender);
    }

    /// Begin (or continue) searching with automatic stepping enabled.
    ///
    /// From `Idle` this records the start time; from `Searching` it is
    /// equivalent to [`resume`](Self::resume). Rejected once `Found`.
    pub fn start(&self) -> Result<()> {
        {
            let mut inner = self.shared.inner.lock();
            if inner.state.status == SearchStatus::Found {
                return Err(Error::invalid_transition("found", "start"));
            }
            inner.state.begin_searching();
        }

        if self.spawn_auto_loop() {
            info!("automatic search started");
            self.shared.emit(SearchEvent::Started);
        }
        Ok(())
    }

    /// Suspend automatic scheduling, retaining all state.
    ///
    /// Idempotent; manual stepping stays available. Any tick already in
    /// flight is discarded rather than applied.
    pub fn pause(&self) {
        if self.shared.auto_running.swap(false, Ordering::SeqCst) {
            self.shared.generation.fetch_add(1, Ordering::SeqCst);
            debug!("automatic search paused");
            self.shared.emit(SearchEvent::Paused);
        }
    }

    /// Re-enable automatic scheduling after a pause.
    ///
    /// Idempotent; never duplicates the tick loop.
    pub fn resume(&self) -> Result<()> {
        {
            let inner = self.shared.inner.lock();
            match inner.state.status {
                SearchStatus::Searching => {}
                SearchStatus::Idle => return Err(Error::invalid_transition("idle", "resume")),
                SearchStatus::Found => return Err(Error::invalid_transition("found", "resume")),
            }
        }

        if self.spawn_auto_loop() {
            debug!("automatic search resumed");
            self.shared.emit(SearchEvent::Resumed);
        }
        Ok(())
    }

    /// Return to `Idle`, clearing nonce, counters, digest, and history.
    ///
    /// Keeps the current configuration; any in-flight evaluation is
    /// discarded and never reappears.
    pub fn reset(&self) {
        self.apply_reset(None);
    }

    /// Reset and replace the session parameters wholesale
    pub fn reset_with(&self, config: SearchConfig) -> Result<()> {
        config.validate()?;
        self.apply_reset(Some(config));
        Ok(())
    }

    /// Evaluate a single candidate moved by `delta` from the current
    /// nonce.
    ///
    /// The resulting nonce is clamped at zero. The attempt counter is
    /// credited with `|delta|`, following the convention that each unit
    /// of nonce distance stands for one attempt. A step from `Idle`
    /// begins the session without enabling automatic scheduling;
    /// stepping once `Found` is rejected until reset.
    pub async fn manual_step(&self, delta: i64) -> Result<StepOutcome> {
        if delta == 0 {
            return Err(Error::validation("manual step delta must be non-zero"));
        }
        self.shared.step(StepKind::Manual(delta)).await
    }

    /// Change the required difficulty.
    ///
    /// Rejected while the automatic loop is active. Otherwise the
    /// session is implicitly reset: retained history would misreport
    /// `matched` against the new target.
    pub fn set_difficulty(&self, level: u32) -> Result<()> {
        if self.shared.auto_running.load(Ordering::SeqCst) {
            return Err(Error::invalid_transition("searching", "set_difficulty"));
        }

        let mut config = self.shared.inner.lock().config.clone();
        config.difficulty = Difficulty::new(level);
        self.apply_reset(Some(config));
        Ok(())
    }

    /// Adjust the automatic speed; the next scheduled tick picks it up
    pub fn set_auto_speed(&self, level: u32) -> Result<()> {
        validate_auto_speed(level)?;
        self.shared.inner.lock().config.auto_speed = level;
        debug!(level, "auto speed updated");
        Ok(())
    }

    /// Current lifecycle status
    pub fn status(&self) -> SearchStatus {
        self.shared.inner.lock().state.status
    }

    /// Whether the automatic loop is currently scheduled
    pub fn is_auto_running(&self) -> bool {
        self.shared.auto_running.load(Ordering::SeqCst)
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> StateSnapshot {
        let inner = self.shared.inner.lock();
        StateSnapshot {
            nonce: inner.state.nonce,
            digest: inner.state.current_digest.clone(),
            status: inner.state.status,
            attempt_count: inner.state.attempt_count,
            elapsed_seconds: inner.state.elapsed_seconds(),
            difficulty: inner.config.difficulty,
        }
    }

    /// Statistics derived from the current counters
    pub fn stats(&self) -> SearchStats {
        SearchStats::from_state(&self.shared.inner.lock().state)
    }

    /// Retained attempt history, newest first
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.shared.inner.lock().history.to_vec()
    }

    /// Current session configuration
    pub fn config(&self) -> SearchConfig {
        self.shared.inner.lock().config.clone()
    }

    /// Spawn the tick loop unless one is already active.
    ///
    /// Returns true when a new loop was started.
    fn spawn_auto_loop(&self) -> bool {
        if self
            .shared
            .auto_running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return false;
        }

        let shared = Arc::clone(&self.shared);
        tokio::spawn(async move {
            debug!("tick loop started");
            while shared.auto_running.load(Ordering::SeqCst) {
                // Re-read every iteration so speed changes take effect
                // on the next tick.
                let interval = shared.inner.lock().config.tick_interval();

                match shared.step(StepKind::Auto).await {
                    Ok(StepOutcome::Matched) => break,
                    Ok(StepOutcome::Missed) | Ok(StepOutcome::Discarded) => {}
                    Err(Error::InvalidTransition { .. }) => break,
                    Err(err) => {
                        warn!("step failed: {}", err);
                        shared.emit(SearchEvent::DigestFailed {
                            message: err.to_string(),
                        });
                    }
                }

                sleep(interval).await;
            }
            debug!("tick loop stopped");
        });
        true
    }

    fn apply_reset(&self, config: Option<SearchConfig>) {
        // Stop scheduling first, then invalidate in-flight results.
        self.shared.auto_running.store(false, Ordering::SeqCst);
        self.shared.generation.fetch_add(1, Ordering::SeqCst);

        {
            let mut inner = self.shared.inner.lock();
            if let Some(config) = config {
                inner.puzzle = Puzzle::new(config.data.clone());
                inner.config = config;
            }
            inner.state = SearchState::new();
            inner.history.clear();
        }

        info!("session reset");
        self.shared.emit(SearchEvent::Reset);
    }
}
