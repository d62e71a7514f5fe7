//! Cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

/// A shared flag that asks a running search to stop.
///
/// Clones share the flag. The search checks it at the top of every frame and
/// unwinds with what it has found so far; nothing is interrupted mid-frame.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
}

impl StopSignal {
    /// Create a signal that has not been raised.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every search holding this signal to stop.
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Check if the signal has been raised.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Stop conditions for one search run.
///
/// The caller's signal is only read. A passed deadline raises `expired`,
/// which belongs to this run alone, so sibling branches stop on their next
/// check and later runs start clean.
#[derive(Debug, Clone)]
pub(crate) struct Limits {
    signal: StopSignal,
    deadline: Option<Instant>,
    expired: Arc<AtomicBool>,
}

impl Limits {
    pub(crate) fn new(signal: StopSignal, deadline: Option<Instant>) -> Self {
        Self {
            signal,
            deadline,
            expired: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if the search should unwind.
    pub(crate) fn should_stop(&self) -> bool {
        if self.signal.is_stopped() || self.expired.load(Ordering::Relaxed) {
            return true;
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            self.expired.store(true, Ordering::Relaxed);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_shared_between_clones() {
        let signal = StopSignal::new();
        let clone = signal.clone();
        assert!(!clone.is_stopped());
        signal.stop();
        assert!(clone.is_stopped());
    }

    #[test]
    fn test_limits_without_deadline() {
        let limits = Limits::new(StopSignal::new(), None);
        assert!(!limits.should_stop());
    }

    #[test]
    fn test_passed_deadline_stops_run_only() {
        let signal = StopSignal::new();
        let limits = Limits::new(signal.clone(), Some(Instant::now()));
        let sibling = limits.clone();
        assert!(limits.should_stop());
        assert!(sibling.expired.load(Ordering::Relaxed));
        assert!(!signal.is_stopped());

        let next_run = Limits::new(signal, None);
        assert!(!next_run.should_stop());
    }

    #[test]
    fn test_raised_signal_stops_run() {
        let signal = StopSignal::new();
        let limits = Limits::new(signal.clone(), None);
        signal.stop();
        assert!(limits.should_stop());
    }
}
