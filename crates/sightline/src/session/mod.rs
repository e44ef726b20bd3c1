//! Search session orchestration.
//!
//! A session is one run of the search simulation. Three independent timer
//! families drive it: the 250 ms progress/statistics tick, the 3 s status
//! tick, and the 2 s discovery tick. All timers registered for a session are
//! stopped together when the session is cancelled or completes; a leaked
//! timer after cancellation is a defect.
//!
//! The tick logic itself is pure (state + injected random source + injected
//! timestamps); the async driver merely schedules it and publishes events.

pub mod progress;
pub mod stats;
pub mod status;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Local, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{mpsc, Notify};
use tokio::time;
use tracing::debug;

use crate::config::SimulationConfig;
use crate::sighting::SightingLocation;

pub use progress::{format_elapsed, SearchProgress};
pub use stats::SearchStats;
pub use status::{LogEntry, LogKind, StatusFeed, PRIVACY_NOTICE, STATUS_PHRASES};

/// Phase of the search workflow.
///
/// The cycle `Idle -> Searching -> ResultsShown` is restartable
/// indefinitely; there is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// No search has run, or the last one was cancelled.
    Idle,
    /// A session is active.
    Searching,
    /// The last session completed and results are on display.
    ResultsShown,
}

/// An event emitted by a running session.
///
/// Carries the generation of the session that produced it so consumers can
/// discard events from superseded sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    /// Generation of the originating session.
    pub generation: u64,
    /// What happened.
    pub kind: SessionEventKind,
}

/// The payload of a [`SessionEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEventKind {
    /// The completion percentage advanced.
    Progress {
        /// Current percentage in [0, 100].
        percent: f64,
        /// Whole seconds since the session started.
        elapsed_secs: u64,
    },
    /// The current status message changed.
    StatusChanged {
        /// The newly selected status phrase.
        message: String,
    },
    /// An entry was appended to the activity log.
    LogAppended(LogEntry),
    /// A new sighting was discovered.
    SightingDiscovered(SightingLocation),
    /// The search completed. Fires exactly once per session, after the
    /// configured delay, and never after cancellation.
    Completed,
}

/// A transient emphasis on the most recently discovered sighting.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    /// Id of the highlighted sighting.
    pub sighting_id: u32,
    /// When the emphasis lapses.
    pub expires_at: DateTime<Utc>,
}

/// In-memory state of one search session.
///
/// All mutation happens through the tick methods, which take an injected
/// random source and, where relevant, an injected timestamp, so the state
/// machine is fully testable without real timers.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    config: SimulationConfig,
    progress: SearchProgress,
    stats: SearchStats,
    feed: StatusFeed,
    sightings: Vec<SightingLocation>,
    highlight: Option<Highlight>,
    elapsed_secs: u64,
    next_sighting_id: u32,
}

impl SessionState {
    /// Create fresh state for a new session.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        let feed = StatusFeed::new(config.log_capacity);
        Self {
            config,
            progress: SearchProgress::new(),
            stats: SearchStats::new(),
            feed,
            sightings: Vec::new(),
            highlight: None,
            elapsed_secs: 0,
            next_sighting_id: 0,
        }
    }

    /// Current completion progress.
    #[must_use]
    pub fn progress(&self) -> SearchProgress {
        self.progress
    }

    /// Current coverage counters.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Current status message and activity log.
    #[must_use]
    pub fn feed(&self) -> &StatusFeed {
        &self.feed
    }

    /// Sightings discovered so far, in discovery order.
    #[must_use]
    pub fn sightings(&self) -> &[SightingLocation] {
        &self.sightings
    }

    /// Whole seconds the session has been running.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// The sighting currently highlighted, if its emphasis has not lapsed.
    ///
    /// Only the most recently discovered sighting can be highlighted; a new
    /// discovery replaces the previous highlight rather than queueing.
    #[must_use]
    pub fn highlighted(&self, now: DateTime<Utc>) -> Option<&SightingLocation> {
        let highlight = self.highlight.as_ref()?;
        if now >= highlight.expires_at {
            return None;
        }
        self.sightings
            .iter()
            .find(|s| s.id == highlight.sighting_id)
    }

    /// Run one discovery tick.
    ///
    /// With the configured probability, synthesizes a new sighting, appends
    /// it, and makes it the (single-slot) highlight for the configured
    /// lifetime. Returns the new sighting when one was discovered.
    pub fn tick_discovery<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Option<SightingLocation> {
        if rng.gen::<f64>() >= self.config.discovery_probability {
            return None;
        }

        let sighting = SightingLocation::generate(self.next_sighting_id, rng, now);
        self.next_sighting_id += 1;
        self.highlight = Some(Highlight {
            sighting_id: sighting.id,
            expires_at: now
                + chrono::Duration::milliseconds(
                    i64::try_from(self.config.highlight_ms).unwrap_or(i64::MAX),
                ),
        });
        self.sightings.push(sighting.clone());
        Some(sighting)
    }

    /// Run one progress/statistics tick.
    ///
    /// Returns `true` on the tick that first brings progress to 100.
    pub fn tick_progress<R: Rng + ?Sized>(&mut self, rng: &mut R, elapsed_secs: u64) -> bool {
        self.elapsed_secs = elapsed_secs;
        let completed = self.progress.advance(rng);
        self.stats.record_tick(rng);
        completed
    }

    /// Run one status tick. Returns the appended log entry.
    pub fn tick_status<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now: DateTime<Local>,
    ) -> LogEntry {
        self.feed
            .record_tick(rng, self.config.warning_probability, now)
    }
}

/// A handle to a spawned search session.
///
/// Lightweight and cloneable; clones share the same stop signal and state.
/// Cancelling the handle deterministically stops every timer the session
/// registered: the driver observes the signal before any further mutation.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    generation: u64,
    stop: Arc<AtomicBool>,
    notify: Arc<Notify>,
    state: Arc<Mutex<SessionState>>,
}

impl SessionHandle {
    fn new(generation: u64, state: Arc<Mutex<SessionState>>) -> Self {
        Self {
            generation,
            stop: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
            state,
        }
    }

    /// Generation of the session this handle controls.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Signal the session to stop.
    ///
    /// The completion signal will not fire for a cancelled session.
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    /// Check if the session has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    /// Wait until the session is cancelled.
    pub async fn cancelled(&self) {
        loop {
            let notified = self.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }

    /// Take a snapshot of the session state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        lock(&self.state).clone()
    }
}

fn lock(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A spawned, timer-driven search session.
#[derive(Debug)]
pub struct SearchSession;

impl SearchSession {
    /// Spawn the session driver task.
    ///
    /// Events flow through `events` tagged with `generation`; the returned
    /// handle exposes cancellation and state snapshots. The driver owns a
    /// seedable random source (seed from the config, entropy otherwise).
    pub fn spawn(
        config: SimulationConfig,
        generation: u64,
        events: mpsc::Sender<SessionEvent>,
    ) -> SessionHandle {
        let state = Arc::new(Mutex::new(SessionState::new(config.clone())));
        let handle = SessionHandle::new(generation, Arc::clone(&state));

        let driver_handle = handle.clone();
        drop(tokio::spawn(async move {
            run(config, generation, state, events, driver_handle).await;
        }));

        handle
    }
}

async fn emit(events: &mpsc::Sender<SessionEvent>, generation: u64, kind: SessionEventKind) {
    // A dropped receiver just means nobody is watching anymore.
    let _ = events.send(SessionEvent { generation, kind }).await;
}

async fn run(
    config: SimulationConfig,
    generation: u64,
    state: Arc<Mutex<SessionState>>,
    events: mpsc::Sender<SessionEvent>,
    handle: SessionHandle,
) {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let started = time::Instant::now();
    let mut progress_tick =
        time::interval_at(started + config.progress_tick(), config.progress_tick());
    let mut status_tick = time::interval_at(started + config.status_tick(), config.status_tick());
    let mut discovery_tick =
        time::interval_at(started + config.discovery_tick(), config.discovery_tick());

    debug!(generation, "search session started");

    loop {
        tokio::select! {
            () = handle.cancelled() => {
                debug!(generation, "search session cancelled");
                return;
            }
            _ = progress_tick.tick() => {
                if handle.is_cancelled() {
                    return;
                }
                let elapsed_secs = started.elapsed().as_secs();
                let (completed, percent) = {
                    let mut state = lock(&state);
                    let completed = state.tick_progress(&mut rng, elapsed_secs);
                    (completed, state.progress().percent())
                };
                emit(&events, generation, SessionEventKind::Progress { percent, elapsed_secs })
                    .await;
                if completed {
                    break;
                }
            }
            _ = status_tick.tick() => {
                if handle.is_cancelled() {
                    return;
                }
                let (entry, message) = {
                    let mut state = lock(&state);
                    let entry = state.tick_status(&mut rng, Local::now());
                    (entry, state.feed().current().to_string())
                };
                emit(&events, generation, SessionEventKind::StatusChanged { message }).await;
                emit(&events, generation, SessionEventKind::LogAppended(entry)).await;
            }
            _ = discovery_tick.tick() => {
                if handle.is_cancelled() {
                    return;
                }
                let discovered = {
                    let mut state = lock(&state);
                    state.tick_discovery(&mut rng, Utc::now())
                };
                if let Some(sighting) = discovered {
                    emit(&events, generation, SessionEventKind::SightingDiscovered(sighting))
                        .await;
                }
            }
        }
    }

    // Progress hit 100: the recurring timers are done. The completion signal
    // fires once, after the configured delay, unless cancelled meanwhile.
    time::sleep(config.completion_delay()).await;
    if handle.is_cancelled() {
        debug!(generation, "completion suppressed by cancellation");
        return;
    }
    emit(&events, generation, SessionEventKind::Completed).await;
    debug!(generation, "search session complete");
}

/// The parent controller for the search workflow.
///
/// Tracks the `Idle -> Searching -> ResultsShown` phase, the advisory count
/// of staged photos, and the generation counter that guards against stale
/// session events.
#[derive(Debug)]
pub struct SearchOrchestrator {
    config: SimulationConfig,
    events: mpsc::Sender<SessionEvent>,
    phase: SearchPhase,
    generation: u64,
    photos_staged: usize,
    session: Option<SessionHandle>,
}

impl SearchOrchestrator {
    /// Create an orchestrator emitting session events on `events`.
    #[must_use]
    pub fn new(config: SimulationConfig, events: mpsc::Sender<SessionEvent>) -> Self {
        Self {
            config,
            events,
            phase: SearchPhase::Idle,
            generation: 0,
            photos_staged: 0,
            session: None,
        }
    }

    /// Current workflow phase.
    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Whether a session is currently active.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    /// Generation of the most recently started session.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle of the active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&SessionHandle> {
        self.session.as_ref()
    }

    /// Advisory count of staged photos. Does not gate searching.
    #[must_use]
    pub fn photos_staged(&self) -> usize {
        self.photos_staged
    }

    /// Record how many photos are staged.
    pub fn set_photos_staged(&mut self, count: usize) {
        self.photos_staged = count;
    }

    /// Begin a new search.
    ///
    /// Re-entrant from any phase: an active session is cancelled, the
    /// generation advances, prior results are discarded (the new session
    /// starts from empty state), and a fresh session is spawned.
    pub fn begin_search(&mut self) -> SessionHandle {
        if let Some(previous) = self.session.take() {
            previous.cancel();
        }

        self.generation += 1;
        self.phase = SearchPhase::Searching;

        let handle =
            SearchSession::spawn(self.config.clone(), self.generation, self.events.clone());
        self.session = Some(handle.clone());
        handle
    }

    /// React to a session event.
    ///
    /// Events from superseded generations are ignored; a current-generation
    /// completion moves the workflow to [`SearchPhase::ResultsShown`].
    pub fn handle_event(&mut self, event: &SessionEvent) {
        if event.generation != self.generation {
            return;
        }
        if matches!(event.kind, SessionEventKind::Completed) {
            self.phase = SearchPhase::ResultsShown;
            self.session = None;
        }
    }

    /// Cancel the active session, if any, and return to idle.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            session.cancel();
        }
        self.phase = SearchPhase::Idle;
    }
}

impl Drop for SearchOrchestrator {
    fn drop(&mut self) {
        // Teardown must not leak session timers.
        if let Some(session) = self.session.take() {
            session.cancel();
        }
    }
}
