//! Submission guard
//!
//! Mutual exclusion for generation submissions plus a short cooldown after
//! each release, so that an accidental double click right after a result
//! arrives does not start a second cycle.
//!
//! Acquisition is scoped: [`SubmissionGuard::try_acquire`] hands out a
//! [`SubmissionPermit`] that releases the guard exactly once, either through
//! [`SubmissionPermit::release`] or when dropped. Time is read from tokio's
//! monotonic clock so the cooldown never blocks a thread.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Default)]
struct GuardState {
    in_flight: bool,
    released_at: Option<Instant>,
    releases: u64,
}

/// Shared handle to the submission guard
#[derive(Debug, Clone)]
pub struct SubmissionGuard {
    state: Arc<Mutex<GuardState>>,
    cooldown: Duration,
}

impl SubmissionGuard {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(GuardState::default())),
            cooldown,
        }
    }

    /// Try to start a submission.
    ///
    /// Returns `None` while another submission is in flight or the
    /// post-release cooldown has not elapsed.
    pub fn try_acquire(&self) -> Option<SubmissionPermit> {
        let mut state = self.lock();
        if state.in_flight || self.cooling_down(&state) {
            return None;
        }
        state.in_flight = true;
        Some(SubmissionPermit {
            guard: self.clone(),
            released: false,
        })
    }

    pub fn is_in_flight(&self) -> bool {
        self.lock().in_flight
    }

    pub fn is_cooling_down(&self) -> bool {
        let state = self.lock();
        self.cooling_down(&state)
    }

    /// Earliest instant at which a new acquisition can succeed, if it
    /// cannot succeed right now for cooldown reasons
    pub fn ready_at(&self) -> Option<Instant> {
        let state = self.lock();
        if state.in_flight {
            return None;
        }
        state
            .released_at
            .map(|at| at + self.cooldown)
            .filter(|ready| *ready > Instant::now())
    }

    /// Number of completed (released) submissions
    pub fn release_count(&self) -> u64 {
        self.lock().releases
    }

    fn cooling_down(&self, state: &GuardState) -> bool {
        state
            .released_at
            .is_some_and(|at| at.elapsed() < self.cooldown)
    }

    fn release(&self) {
        let mut state = self.lock();
        state.in_flight = false;
        state.released_at = Some(Instant::now());
        state.releases += 1;
    }

    fn lock(&self) -> MutexGuard<'_, GuardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::new(Duration::from_millis(300))
    }
}

/// Proof of an acquired submission; releases the guard once
#[derive(Debug)]
#[must_use = "dropping the permit releases the submission guard"]
pub struct SubmissionPermit {
    guard: SubmissionGuard,
    released: bool,
}

impl SubmissionPermit {
    /// Release the guard, starting the cooldown
    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if !self.released {
            self.released = true;
            self.guard.release();
        }
    }
}

impl Drop for SubmissionPermit {
    fn drop(&mut self) {
        self.release_once();
    }
}
