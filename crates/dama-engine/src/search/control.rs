//! Search control: the cooperative stop signal.
//!
//! The signal is a small state machine shared between the search thread and
//! whoever wants it to stop:
//!
//! - `Idle -> Running` when a search begins ([`StopSignal::begin`]).
//! - `Running -> StopRequested` on [`StopSignal::request_stop`], from any thread.
//! - `StopRequested -> Idle` when the search observes the request
//!   ([`StopSignal::consume`]) and unwinds.
//!
//! A request that arrives while no search is running is dropped, so it can
//! never abort the first check of some later, unrelated search.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Observable state of a [`StopSignal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StopState {
    /// No search in progress.
    Idle = 0,
    /// A search is in progress and should keep going.
    Running = 1,
    /// A search is in progress and has been asked to stop.
    StopRequested = 2,
}

impl StopState {
    fn from_raw(raw: u8) -> StopState {
        match raw {
            1 => StopState::Running,
            2 => StopState::StopRequested,
            _ => StopState::Idle,
        }
    }
}

/// Cloneable handle to a shared stop flag.
///
/// Every clone refers to the same state; hand one to a watchdog thread and
/// keep the other with the searcher.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    state: Arc<AtomicU8>,
}

impl StopSignal {
    /// Create a new signal in the [`StopState::Idle`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> StopState {
        StopState::from_raw(self.state.load(Ordering::Acquire))
    }

    /// Ask the running search to stop.
    ///
    /// Returns `true` if a running search will observe the request, `false`
    /// if it was dropped because no search was running (or a request was
    /// already pending).
    pub fn request_stop(&self) -> bool {
        self.state
            .compare_exchange(
                StopState::Running as u8,
                StopState::StopRequested as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Mark the start of a top-level search.
    pub fn begin(&self) {
        self.state.store(StopState::Running as u8, Ordering::Release);
    }

    /// Check for a pending request and clear it.
    ///
    /// Returns `true` exactly once per request; the signal is `Idle`
    /// afterwards.
    #[inline]
    pub fn consume(&self) -> bool {
        // Fast path: a plain load is enough while nobody has asked us to stop
        if self.state.load(Ordering::Relaxed) != StopState::StopRequested as u8 {
            return false;
        }
        self.state
            .compare_exchange(
                StopState::StopRequested as u8,
                StopState::Idle as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Mark the end of a top-level search, dropping any unconsumed request.
    pub fn finish(&self) {
        self.state.store(StopState::Idle as u8, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::{StopSignal, StopState};

    #[test]
    fn starts_idle() {
        assert_eq!(StopSignal::new().state(), StopState::Idle);
    }

    #[test]
    fn stop_while_idle_is_dropped() {
        let signal = StopSignal::new();
        assert!(!signal.request_stop());
        signal.begin();
        assert!(!signal.consume(), "stale request must not abort a new search");
    }

    #[test]
    fn consume_resets_to_idle() {
        let signal = StopSignal::new();
        signal.begin();
        assert!(signal.request_stop());
        assert_eq!(signal.state(), StopState::StopRequested);
        assert!(signal.consume());
        assert_eq!(signal.state(), StopState::Idle);
        assert!(!signal.consume());
    }

    #[test]
    fn second_request_is_not_counted() {
        let signal = StopSignal::new();
        signal.begin();
        assert!(signal.request_stop());
        assert!(!signal.request_stop());
    }

    #[test]
    fn finish_clears_pending_request() {
        let signal = StopSignal::new();
        signal.begin();
        signal.request_stop();
        signal.finish();
        assert_eq!(signal.state(), StopState::Idle);
        signal.begin();
        assert!(!signal.consume());
    }

    #[test]
    fn clones_share_state() {
        let signal = StopSignal::new();
        let handle = signal.clone();
        signal.begin();

        let worker = std::thread::spawn(move || handle.request_stop());
        assert!(worker.join().unwrap());
        assert!(signal.consume());
    }
}
