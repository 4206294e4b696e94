/// The rename engine — one blocking run from counting to the written log.
///
/// [`run`] is what the background worker executes. It is public so tests
/// and other front ends can drive a run synchronously with their own
/// [`HostFs`] and message channel.
use crate::model::{Entity, RenameRecord, RunConfig, RunSummary};
use crate::platform::{DryRunFs, HostFs};
use crate::renamer::progress::{RunMessage, RunPhase, RunProgress};
use crate::renamer::{resolve, walk};
use crate::report::{self, LogMode};
use crate::sanitize::{sanitize_dir_name, sanitize_file_name};
use chrono::{DateTime, Local};
use crossbeam_channel::Sender;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Send a `Progress` message every this many unchanged entities so the
/// status line keeps moving through clean stretches of the tree.
const PROGRESS_INTERVAL: usize = 500;

/// Detail recorded when nothing of a name survives sanitizing.
const EMPTY_NAME_DETAIL: &str = "name has no allowed characters";

/// Detail recorded when a name sanitizes to `.` or `..`.
const RESERVED_NAME_DETAIL: &str = "name sanitizes to a reserved path component";

/// Detail recorded when the target would leave the entity's directory.
const OUTSIDE_PARENT_DETAIL: &str = "target is outside the containing directory";

/// Execute a complete run.
///
/// Per-entity failures are recorded and never abort the run. A dry run
/// goes through a [`DryRunFs`] overlay, so `fs` is never asked to rename
/// anything.
pub fn run(
    config: &RunConfig,
    fs: &dyn HostFs,
    progress: &RunProgress,
    events: &Sender<RunMessage>,
    started: DateTime<Local>,
) -> RunSummary {
    let start = Instant::now();
    let mode = LogMode::from_dry_run(config.dry_run());
    let log_path = report::log_file_path(config.log_dir(), mode, started);
    let root = config.source_dir();

    info!(
        "Starting {} of {} (subdirectories: {})",
        if config.dry_run() { "dry run" } else { "rename" },
        root.display(),
        config.include_subdirectories()
    );

    // ── Counting ─────────────────────────────────────────────────
    enter_phase(progress, events, RunPhase::Counting);
    let count = walk::count_entities(root);
    let total = count.total(config.include_subdirectories());
    progress.set_total(total);
    let _ = events.send(RunMessage::Counted {
        total_entities: total,
    });
    debug!(
        "Counted {} files and {} directories below {}",
        count.files,
        count.dirs,
        root.display()
    );

    // ── Processing ───────────────────────────────────────────────
    enter_phase(progress, events, RunPhase::Processing);
    let plan = walk::plan(root, config.include_subdirectories());

    let overlay;
    let fs: &dyn HostFs = if config.dry_run() {
        overlay = DryRunFs::new(fs);
        &overlay
    } else {
        fs
    };

    let mut files_changed: u64 = 0;
    let mut dirs_changed: u64 = 0;
    let mut failed: u64 = 0;
    let mut records: Vec<RenameRecord> = Vec::new();

    for (visited, entity) in plan.entities.iter().enumerate() {
        let Some(record) = process_entity(entity, fs, config.dry_run()) else {
            if (visited + 1) % PROGRESS_INTERVAL == 0 {
                send_progress(progress, events, entity);
            }
            continue;
        };

        if record.is_change() {
            if entity.is_dir() {
                dirs_changed += 1;
            } else {
                files_changed += 1;
            }
            progress.advance();
            debug!("{} {record}", entity.kind.label());
        } else {
            failed += 1;
            warn!("{} {record}", entity.kind.label());
        }
        send_progress(progress, events, entity);
        let _ = events.send(RunMessage::Record(record.clone()));
        records.push(record);
    }

    // ── Completion ───────────────────────────────────────────────
    let (log_written, log_error) = match report::write_log(&log_path, &records) {
        Ok(written) => (written, None),
        Err(err) => {
            error!("{err}");
            (false, Some(err.to_string()))
        }
    };
    progress.complete();
    let _ = events.send(RunMessage::Phase(RunPhase::Completed));

    let summary = RunSummary {
        files_changed,
        dirs_changed,
        failed,
        total_entities: total,
        walk_errors: plan.errors,
        dry_run: config.dry_run(),
        log_path,
        log_written,
        log_error,
        duration: start.elapsed(),
    };
    info!("{summary} in {:?}", summary.duration);

    let _ = events.send(RunMessage::Complete(summary.clone()));
    summary
}

/// Sanitize one entity and rename (or simulate renaming) it.
///
/// Returns `None` when the name is already clean.
fn process_entity(entity: &Entity, fs: &dyn HostFs, dry_run: bool) -> Option<RenameRecord> {
    let desired = if entity.is_dir() {
        sanitize_dir_name(&entity.name)
    } else {
        sanitize_file_name(&entity.name)
    };
    if desired.as_str() == entity.name.as_str() {
        return None;
    }
    let fail = |final_name: &str, detail: &str| {
        Some(RenameRecord::failed(
            &entity.name,
            final_name,
            entity.kind,
            detail,
        ))
    };
    if desired.is_empty() {
        return fail("", EMPTY_NAME_DETAIL);
    }
    // Joining either of these would point at the directory itself or its
    // parent rather than at a sibling.
    if desired == "." || desired == ".." {
        return fail(&desired, RESERVED_NAME_DETAIL);
    }

    // The walk starts at depth 1, so every planned entity has a parent.
    let Some(parent) = entity.path.parent() else {
        return fail(&desired, OUTSIDE_PARENT_DETAIL);
    };
    let target = resolve(fs, &parent.join(&desired));
    let final_name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| desired.clone());
    if target.parent() != Some(parent) {
        return fail(&final_name, OUTSIDE_PARENT_DETAIL);
    }

    let record = match fs.rename(&entity.path, &target) {
        Ok(()) if dry_run => RenameRecord::simulated(&entity.name, &final_name, entity.kind),
        Ok(()) => RenameRecord::applied(&entity.name, &final_name, entity.kind),
        Err(err) => RenameRecord::failed(&entity.name, &final_name, entity.kind, err.to_string()),
    };
    Some(record)
}

fn enter_phase(progress: &RunProgress, events: &Sender<RunMessage>, phase: RunPhase) {
    progress.set_phase(phase);
    let _ = events.send(RunMessage::Phase(phase));
}

fn send_progress(progress: &RunProgress, events: &Sender<RunMessage>, entity: &Entity) {
    let _ = events.send(RunMessage::Progress {
        processed: progress.processed(),
        total: progress.total(),
        current_path: entity.path.display().to_string(),
    });
}
