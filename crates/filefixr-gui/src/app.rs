/// Main `eframe::App` implementation for FileFixr.
///
/// This is the top-level UI layout that composes all panels, widgets and
/// dialogs.
use crate::panels;
use crate::settings::{self, Settings};
use crate::state::{AppPhase, AppState};
use crate::widgets;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so persisted
/// settings are loaded before the OS window is created.
pub struct FileFixrState {
    pub(crate) inner: AppState,
}

impl FileFixrState {
    /// Load persisted settings from the default location.
    pub fn build() -> Self {
        let path = settings::default_path();
        let loaded = match &path {
            Some(p) => {
                tracing::info!("Loading settings from {}", p.display());
                Settings::load(p)
            }
            None => {
                tracing::warn!("No config directory found -- settings will not persist");
                Settings::default()
            }
        };
        Self {
            inner: AppState::with_settings(loaded, path),
        }
    }
}

/// The FileFixr application.
pub struct FileFixrApp {
    state: AppState,
}

impl FileFixrApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: FileFixrState) -> Self {
        let visuals = if state.inner.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        cc.egui_ctx.set_visuals(visuals);

        Self { state: state.inner }
    }
}

impl eframe::App for FileFixrApp {
    /// Match the GPU clear colour to the panel background so theme changes
    /// do not flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // ── Process background messages ───────────────────────────────────
        let _changed = self.state.process_run_messages();
        if self.state.phase == AppPhase::Running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Central panel ─────────────────────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::run_panel::run_panel(ui, &mut self.state);
        });

        // ── Dialogs ───────────────────────────────────────────────────────
        confirm_dialog(ctx, &mut self.state);
        config_error_dialog(ctx, &mut self.state);
        summary_dialog(ctx, &mut self.state);
        about_dialog(ctx, &mut self.state);
    }
}

/// Ask before renaming anything on disk.
fn confirm_dialog(ctx: &egui::Context, state: &mut AppState) {
    if !state.confirm_pending {
        return;
    }
    egui::Window::new("Rename files?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([360.0, 0.0])
        .show(ctx, |ui| {
            let target = if state.include_subdirectories {
                "files and subdirectories"
            } else {
                "files"
            };
            ui.label(format!(
                "This will rename {target} in\n{}\n\nRenames cannot be undone. \
                 A dry run shows what would change first.",
                state.source_dir.trim()
            ));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Rename").clicked() {
                    state.confirm_run();
                }
                if ui.button("Cancel").clicked() {
                    state.dismiss_confirm();
                }
            });
        });
}

fn config_error_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.config_error.clone() else {
        return;
    };
    let mut dismissed = false;
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([340.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    if dismissed {
        state.config_error = None;
    }
}

/// The finished-run message with the counts and log location.
fn summary_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(summary) = state.summary.clone() else {
        return;
    };
    let mut open = state.show_summary;
    egui::Window::new("Finished")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([380.0, 0.0])
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(summary.to_string()).strong());
            ui.add_space(6.0);
            if summary.log_written {
                ui.label(format!("Log saved to {}", summary.log_path.display()));
            } else if let Some(err) = &summary.log_error {
                ui.colored_label(ui.visuals().error_fg_color, err.as_str());
            } else {
                ui.label("Nothing needed changing; no log was written.");
            }
            if summary.walk_errors > 0 {
                ui.colored_label(
                    ui.visuals().warn_fg_color,
                    format!("{} entries could not be read", summary.walk_errors),
                );
            }
        });
    state.show_summary = open;
}

fn about_dialog(ctx: &egui::Context, state: &mut AppState) {
    let mut show_about = state.show_about;
    egui::Window::new("About FileFixr")
        .open(&mut show_about)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([340.0, 0.0])
        .show(ctx, |ui| {
            let accent = ui.visuals().hyperlink_color;
            let muted = ui.visuals().weak_text_color();
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("🔧 FileFixr")
                        .size(24.0)
                        .strong()
                        .color(accent),
                );
                ui.label(
                    egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(13.0)
                        .color(muted),
                );
                ui.add_space(12.0);
                ui.label(
                    "Cleans file and directory names of characters that\n\
                     break on other platforms or filesystems.",
                );
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("GPL-3.0 - Built with Rust & egui")
                        .size(11.0)
                        .color(muted),
                );
                ui.add_space(8.0);
            });
        });
    state.show_about = show_about;
}
