/// Application state management.
///
/// Centralises all mutable state that the UI reads and writes.
/// The renamer thread communicates via a channel; state updates happen
/// in `process_run_messages()` which runs once per frame.
use crate::settings::Settings;
use filefixr_core::model::{RecordKind, RenameRecord};
use filefixr_core::renamer::progress::{RunMessage, RunPhase};
use filefixr_core::{ConfigError, RunConfig, RunHandle, RunSummary};
use std::collections::VecDeque;
use std::path::PathBuf;

/// The current phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Idle — no run has been started yet.
    Idle,
    /// A run is in progress; run buttons are disabled.
    Running,
    /// The last run finished; its summary is available.
    Finished,
}

/// Maximum run messages drained from the channel per frame.
///
/// Prevents a backlog (e.g. after the window was hidden) from blocking the
/// render thread for a perceptible duration when it is eventually shown again.
const MAX_MESSAGES_PER_FRAME: usize = 300;

/// Maximum records kept for the recent-changes list. The full set is in
/// the log file.
pub const MAX_RECENT_RECORDS: usize = 500;

/// All application state.
pub struct AppState {
    // ── Form ───────────────────────────────────────────
    pub source_dir: String,
    pub log_dir: String,
    pub include_subdirectories: bool,

    // ── Run ────────────────────────────────────────────
    pub phase: AppPhase,
    pub run_handle: Option<RunHandle>,
    /// Mode of the current or most recent run.
    pub run_is_dry: bool,
    pub run_phase: RunPhase,
    pub total_entities: u64,
    pub processed: u64,
    pub current_path: String,
    /// Most recent records, oldest first.
    pub recent_records: VecDeque<RenameRecord>,
    pub failed_count: u64,
    pub summary: Option<RunSummary>,

    // ── Dialogs ────────────────────────────────────────
    /// Validation message shown in a modal error dialog.
    pub config_error: Option<String>,
    /// An apply run is waiting for the user to confirm.
    pub confirm_pending: bool,
    pub show_summary: bool,
    pub show_about: bool,

    // ── Theme ──────────────────────────────────────────
    /// `true` = dark mode (default), `false` = light mode.
    pub dark_mode: bool,

    /// Where settings are persisted; `None` disables persistence.
    settings_path: Option<PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh state with default settings and no persistence.
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), None)
    }

    /// State seeded from persisted settings. Settings are written back to
    /// `settings_path` whenever a run starts.
    pub fn with_settings(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        Self {
            source_dir: settings.source_dir,
            log_dir: settings.log_dir,
            include_subdirectories: settings.include_subdirectories,
            phase: AppPhase::Idle,
            run_handle: None,
            run_is_dry: false,
            run_phase: RunPhase::Idle,
            total_entities: 0,
            processed: 0,
            current_path: String::new(),
            recent_records: VecDeque::new(),
            failed_count: 0,
            summary: None,
            config_error: None,
            confirm_pending: false,
            show_summary: false,
            show_about: false,
            dark_mode: settings.dark_mode,
            settings_path,
        }
    }

    /// `true` while a run is active or an apply run awaits confirmation.
    pub fn is_busy(&self) -> bool {
        self.phase == AppPhase::Running || self.confirm_pending
    }

    /// Validate the form into a run configuration.
    pub fn build_config(&self, dry_run: bool) -> Result<RunConfig, ConfigError> {
        RunConfig::new(
            PathBuf::from(self.source_dir.trim()),
            PathBuf::from(self.log_dir.trim()),
            self.include_subdirectories,
            dry_run,
        )
    }

    /// React to a press of "Dry run" (`dry_run = true`) or "Rename".
    ///
    /// Invalid input raises the error dialog. A dry run starts at once; a
    /// real run waits for [`confirm_run`](Self::confirm_run).
    pub fn request_run(&mut self, dry_run: bool) {
        if self.is_busy() {
            return;
        }
        match self.build_config(dry_run) {
            Err(e) => {
                tracing::info!("Run rejected: {e}");
                self.config_error = Some(e.to_string());
            }
            Ok(config) if dry_run => self.start(config),
            Ok(_) => self.confirm_pending = true,
        }
    }

    /// The user accepted the rename confirmation.
    ///
    /// The form is validated again: the directories may have changed
    /// while the dialog was open.
    pub fn confirm_run(&mut self) {
        if !self.confirm_pending {
            return;
        }
        self.confirm_pending = false;
        match self.build_config(false) {
            Ok(config) => self.start(config),
            Err(e) => self.config_error = Some(e.to_string()),
        }
    }

    /// The user declined the rename confirmation.
    pub fn dismiss_confirm(&mut self) {
        self.confirm_pending = false;
    }

    fn start(&mut self, config: RunConfig) {
        self.save_settings();

        self.phase = AppPhase::Running;
        self.run_is_dry = config.dry_run();
        self.run_phase = RunPhase::Idle;
        self.total_entities = 0;
        self.processed = 0;
        self.current_path = config.source_dir().display().to_string();
        self.recent_records.clear();
        self.failed_count = 0;
        self.summary = None;
        self.show_summary = false;

        self.run_handle = Some(filefixr_core::start_run(config));
    }

    /// Progress fraction in `[0, 1]` for the progress bar.
    pub fn progress_fraction(&self) -> f32 {
        match (&self.run_handle, self.phase) {
            (Some(handle), _) => handle.progress() as f32,
            (None, AppPhase::Finished) => 1.0,
            (None, _) => 0.0,
        }
    }

    /// Short status text for the status line.
    pub fn status_text(&self) -> &'static str {
        match self.phase {
            AppPhase::Idle => "Inactive",
            AppPhase::Finished => "Finished",
            AppPhase::Running => match self.run_phase {
                RunPhase::Idle => "Starting...",
                RunPhase::Counting => "Counting...",
                RunPhase::Processing if self.run_is_dry => "Searching...",
                RunPhase::Processing => "Searching and replacing...",
                RunPhase::Completed => "Writing log...",
            },
        }
    }

    /// Process pending run messages. Called once per frame.
    ///
    /// Returns `true` if the UI should repaint (new data arrived).
    pub fn process_run_messages(&mut self) -> bool {
        let handle = match &self.run_handle {
            Some(h) => h,
            None => return false,
        };

        let mut repaint = false;

        // Drain without blocking, subject to a per-frame budget.
        let mut messages_this_frame = 0usize;
        let mut finished = None;
        while messages_this_frame < MAX_MESSAGES_PER_FRAME {
            let msg = match handle.progress_rx.try_recv() {
                Ok(m) => m,
                Err(_) => break,
            };
            messages_this_frame += 1;
            repaint = true;
            match msg {
                RunMessage::Phase(phase) => self.run_phase = phase,
                RunMessage::Counted { total_entities } => self.total_entities = total_entities,
                RunMessage::Progress {
                    processed,
                    total,
                    current_path,
                } => {
                    self.processed = processed;
                    self.total_entities = total;
                    self.current_path = current_path;
                }
                RunMessage::Record(record) => {
                    if record.kind == RecordKind::Failed {
                        self.failed_count += 1;
                    }
                    if self.recent_records.len() >= MAX_RECENT_RECORDS {
                        self.recent_records.pop_front();
                    }
                    self.recent_records.push_back(record);
                }
                RunMessage::Complete(summary) => {
                    finished = Some(summary);
                    break;
                }
            }
        }

        if let Some(summary) = finished {
            self.finish(summary);
            return true;
        }

        // Worker gone without a summary: it panicked.
        if self
            .run_handle
            .as_ref()
            .is_some_and(|h| h.is_finished() && h.progress_rx.is_empty())
        {
            tracing::error!("Renamer thread exited without a summary");
            if let Some(handle) = self.run_handle.take() {
                let _ = handle.join();
            }
            self.phase = AppPhase::Finished;
            self.run_phase = RunPhase::Completed;
            return true;
        }

        repaint
    }

    fn finish(&mut self, summary: RunSummary) {
        if let Some(handle) = self.run_handle.take() {
            let _ = handle.join();
        }
        self.phase = AppPhase::Finished;
        self.run_phase = RunPhase::Completed;
        self.processed = summary.files_changed + summary.dirs_changed;
        self.failed_count = summary.failed;
        self.summary = Some(summary);
        self.show_summary = true;
    }

    /// Current form and theme as persistable settings.
    pub fn settings(&self) -> Settings {
        Settings {
            source_dir: self.source_dir.clone(),
            log_dir: self.log_dir.clone(),
            include_subdirectories: self.include_subdirectories,
            dark_mode: self.dark_mode,
        }
    }

    /// Persist settings, logging (not surfacing) any failure.
    pub fn save_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(e) = self.settings().save(path) {
            tracing::warn!("Could not save settings: {e:#}");
        }
    }
}
