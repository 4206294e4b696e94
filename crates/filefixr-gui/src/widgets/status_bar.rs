/// Bottom status bar: run status, counters and the log location.
use crate::state::{AppPhase, AppState};
use crate::theme::Palette;
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let palette = Palette::for_ui(ui);
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();

    ui.horizontal(|ui| {
        if state.phase == AppPhase::Running {
            ui.spinner();
        }
        let status_color = match state.phase {
            AppPhase::Idle => color_weak,
            _ => color_normal,
        };
        ui.label(
            egui::RichText::new(state.status_text())
                .size(12.0)
                .color(status_color),
        );

        if state.phase == AppPhase::Idle {
            return;
        }

        ui.separator();
        ui.label(
            egui::RichText::new(format!(
                "{} / {} changed",
                state.processed, state.total_entities
            ))
            .size(12.0)
            .color(color_normal),
        );

        if state.failed_count > 0 {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} failed", state.failed_count))
                    .size(12.0)
                    .color(palette.failed),
            );
        }

        if let Some(summary) = &state.summary {
            if summary.walk_errors > 0 {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{} unreadable", summary.walk_errors))
                        .size(12.0)
                        .color(palette.warning),
                );
            }
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{:.1}s", summary.duration.as_secs_f64()))
                    .size(12.0)
                    .color(color_weak),
            );
            if summary.log_written {
                ui.separator();
                ui.label(
                    egui::RichText::new(truncate_path(&summary.log_path.display().to_string(), 60))
                        .size(12.0)
                        .color(color_weak),
                )
                .on_hover_text(summary.log_path.display().to_string());
            }
        } else if !state.current_path.is_empty() {
            ui.separator();
            ui.label(
                egui::RichText::new(truncate_path(&state.current_path, 60))
                    .size(12.0)
                    .color(color_weak),
            );
        }
    });
}

/// Shorten `path` to at most `max_len` characters, replacing the middle
/// with "...".
fn truncate_path(path: &str, max_len: usize) -> String {
    let count = path.chars().count();
    if count <= max_len {
        return path.to_string();
    }
    let half = (max_len - 3) / 2;
    let head: String = path.chars().take(half).collect();
    let tail: String = path.chars().skip(count - half).collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::truncate_path;

    #[test]
    fn test_short_path_unchanged() {
        assert_eq!(truncate_path("/tmp/a", 60), "/tmp/a");
    }

    #[test]
    fn test_long_path_keeps_both_ends() {
        let long = format!("/start/{}/end.txt", "x".repeat(100));
        let short = truncate_path(&long, 21);
        assert_eq!(short, "/start/xx...x/end.txt");
        assert_eq!(short.chars().count(), 21);
    }

    #[test]
    fn test_multibyte_characters_do_not_split() {
        let long = "å".repeat(80);
        let short = truncate_path(&long, 11);
        assert_eq!(short, "åååå...åååå");
    }
}
