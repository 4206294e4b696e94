/// Run progress reporting.
///
/// Two channels of information leave the worker thread:
///
/// - [`RunProgress`] — atomic counters the front end may read at any time,
///   from any thread, to draw a progress bar.
/// - [`RunMessage`] — lightweight events sent over a crossbeam channel for
///   status text, the recent-changes list and the final summary.
use crate::model::{RenameRecord, RunSummary};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lifecycle of a run. `Completed` is the only terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    /// Pre-pass: counting entities to size the progress bar.
    Counting,
    /// Bottom-up walk applying or simulating renames.
    Processing,
    Completed,
}

/// Events sent from the worker thread to the front end.
#[derive(Debug, Clone)]
pub enum RunMessage {
    /// The run entered a new phase.
    Phase(RunPhase),
    /// The counting pre-pass finished.
    Counted { total_entities: u64 },
    /// Running totals, sent after each change and periodically while
    /// walking unchanged entities.
    Progress {
        processed: u64,
        total: u64,
        current_path: String,
    },
    /// An entity was renamed, would be renamed, or could not be renamed.
    Record(RenameRecord),
    /// The run finished and the log has been written.
    Complete(RunSummary),
}

/// Shared progress state for one run.
///
/// The worker is the only writer. Readers only ever see a fraction in
/// `[0, 1]`.
#[derive(Debug)]
pub struct RunProgress {
    processed: AtomicU64,
    total: AtomicU64,
    phase: RwLock<RunPhase>,
}

impl Default for RunProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl RunProgress {
    pub fn new() -> Self {
        Self {
            processed: AtomicU64::new(0),
            total: AtomicU64::new(0),
            phase: RwLock::new(RunPhase::Idle),
        }
    }

    pub fn phase(&self) -> RunPhase {
        *self.phase.read()
    }

    pub(crate) fn set_phase(&self, phase: RunPhase) {
        *self.phase.write() = phase;
    }

    pub(crate) fn set_total(&self, total: u64) {
        self.total.store(total, Ordering::Release);
    }

    /// Count one more changed entity; returns the new processed count.
    pub(crate) fn advance(&self) -> u64 {
        self.processed.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Clamp to 100% and mark the run as finished.
    ///
    /// Only changed entities advance the counter while the total counts
    /// every entity, so the bar usually needs this final jump.
    pub(crate) fn complete(&self) {
        let total = self.total.load(Ordering::Acquire);
        self.processed.fetch_max(total, Ordering::AcqRel);
        self.set_phase(RunPhase::Completed);
    }

    pub fn processed(&self) -> u64 {
        self.processed.load(Ordering::Acquire)
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Acquire)
    }

    /// Progress as a fraction in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.phase() == RunPhase::Completed {
            return 1.0;
        }
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.processed() as f64 / total as f64).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_progress_is_idle_and_zero() {
        let p = RunProgress::new();
        assert_eq!(p.phase(), RunPhase::Idle);
        assert_eq!(p.fraction(), 0.0);
    }

    #[test]
    fn test_fraction_tracks_advance() {
        let p = RunProgress::new();
        p.set_total(4);
        p.set_phase(RunPhase::Processing);
        assert_eq!(p.advance(), 1);
        assert_eq!(p.fraction(), 0.25);
        p.advance();
        assert_eq!(p.fraction(), 0.5);
    }

    #[test]
    fn test_complete_clamps_to_one() {
        let p = RunProgress::new();
        p.set_total(10);
        p.advance();
        p.complete();
        assert_eq!(p.phase(), RunPhase::Completed);
        assert_eq!(p.fraction(), 1.0);
        assert_eq!(p.processed(), 10);
    }

    #[test]
    fn test_complete_with_zero_total() {
        let p = RunProgress::new();
        p.complete();
        assert_eq!(p.fraction(), 1.0);
    }

    #[test]
    fn test_fraction_never_exceeds_one() {
        let p = RunProgress::new();
        p.set_total(1);
        p.advance();
        p.advance();
        assert_eq!(p.fraction(), 1.0);
    }

    #[test]
    fn test_concurrent_reads_during_writes() {
        let p = std::sync::Arc::new(RunProgress::new());
        p.set_total(10_000);
        let writer = {
            let p = p.clone();
            std::thread::spawn(move || {
                for _ in 0..10_000 {
                    p.advance();
                }
                p.complete();
            })
        };
        let mut last = 0.0;
        while p.phase() != RunPhase::Completed {
            let f = p.fraction();
            assert!((0.0..=1.0).contains(&f));
            assert!(f >= last, "progress must not go backwards");
            last = f;
        }
        writer.join().unwrap();
        assert_eq!(p.fraction(), 1.0);
    }
}
