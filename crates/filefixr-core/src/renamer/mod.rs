/// Renamer module — runs the rename engine on a background thread.
///
/// A run walks the source tree twice: once to count entities, once
/// bottom-up to sanitize, resolve and rename them. The front end keeps its
/// own thread responsive by polling the [`RunHandle`]:
///
/// - `handle.progress()` for the progress bar (lock-free),
/// - `handle.progress_rx` for status, records and the final summary.
///
/// Only one run is meant to be active at a time; the front end disables
/// its run buttons while a handle is alive. A started run always proceeds
/// to completion.
pub mod engine;
pub mod progress;
pub mod resolve;
pub mod walk;

pub use engine::run;
pub use resolve::resolve;

use crate::model::{RunConfig, RunSummary};
use crate::platform::{HostFs, StdFs};
use crate::report::{self, LogMode};
use progress::{RunMessage, RunPhase, RunProgress};

use crossbeam_channel::Receiver;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

/// Maximum number of run messages that may queue up in the channel.
///
/// The UI drains the channel every frame. If it falls behind, the worker
/// blocks briefly on `send` instead of growing the queue without bound.
pub const RUN_CHANNEL_CAPACITY: usize = 4_096;

/// Handle to a running or completed run.
pub struct RunHandle {
    /// Receiver for events from the worker thread.
    pub progress_rx: Receiver<RunMessage>,
    progress: Arc<RunProgress>,
    log_path: PathBuf,
    thread: Option<thread::JoinHandle<RunSummary>>,
}

impl RunHandle {
    /// Current progress fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress.fraction()
    }

    pub fn phase(&self) -> RunPhase {
        self.progress.phase()
    }

    /// The log file this run writes (if it produces any record).
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// `true` once the worker thread has returned.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Wait for the run to finish and return its summary.
    ///
    /// The message channel is dropped first so a full queue cannot block the
    /// worker. Returns `None` only if the worker panicked.
    pub fn join(self) -> Option<RunSummary> {
        let Self {
            progress_rx,
            thread,
            ..
        } = self;
        drop(progress_rx);
        thread.and_then(|t| t.join().ok())
    }
}

/// Start a run against the real filesystem.
pub fn start_run(config: RunConfig) -> RunHandle {
    start_run_with(config, Arc::new(StdFs))
}

/// Start a run on a background thread using `fs` for existence checks and
/// renames.
pub fn start_run_with(config: RunConfig, fs: Arc<dyn HostFs>) -> RunHandle {
    let (progress_tx, progress_rx) = crossbeam_channel::bounded::<RunMessage>(RUN_CHANNEL_CAPACITY);
    let progress = Arc::new(RunProgress::new());
    let progress_clone = Arc::clone(&progress);

    // The log name carries the moment the run was requested.
    let started = chrono::Local::now();
    let log_path = report::log_file_path(
        config.log_dir(),
        LogMode::from_dry_run(config.dry_run()),
        started,
    );

    let thread = thread::Builder::new()
        .name("filefixr-renamer".into())
        .spawn(move || engine::run(&config, fs.as_ref(), &progress_clone, &progress_tx, started))
        .expect("failed to spawn renamer thread");

    RunHandle {
        progress_rx,
        progress,
        log_path,
        thread: Some(thread),
    }
}
