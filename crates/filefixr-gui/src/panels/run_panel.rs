/// Run panel -- directory form, run buttons, progress and recent changes.
use crate::state::AppState;
use crate::widgets;

use egui::Ui;

/// Draw the run panel (central panel content).
pub fn run_panel(ui: &mut Ui, state: &mut AppState) {
    let editable = !state.is_busy();

    widgets::path_field::path_field(
        ui,
        "Directory to fix",
        "Folder whose file names should be cleaned",
        &mut state.source_dir,
        editable,
    );
    ui.add_space(6.0);
    widgets::path_field::path_field(
        ui,
        "Log directory",
        "Folder where the change log is saved",
        &mut state.log_dir,
        editable,
    );
    ui.add_space(6.0);
    ui.add_enabled(
        editable,
        egui::Checkbox::new(
            &mut state.include_subdirectories,
            "Also rename subdirectories",
        ),
    )
    .on_hover_text("Files below the directory are always processed");

    ui.add_space(10.0);

    ui.horizontal(|ui| {
        let dry = ui
            .add_enabled(
                editable,
                egui::Button::new("🔍 Dry run").min_size(egui::vec2(100.0, 28.0)),
            )
            .on_hover_text("List what would change without touching anything");
        if dry.clicked() {
            state.request_run(true);
        }

        let apply = ui
            .add_enabled(
                editable,
                egui::Button::new("▶ Rename").min_size(egui::vec2(100.0, 28.0)),
            )
            .on_hover_text("Rename files on disk");
        if apply.clicked() {
            state.request_run(false);
        }
    });

    ui.add_space(10.0);
    ui.add(
        egui::ProgressBar::new(state.progress_fraction())
            .show_percentage()
            .desired_width(ui.available_width()),
    );

    ui.add_space(10.0);
    ui.separator();
    ui.label(egui::RichText::new("Recent changes").strong());
    ui.add_space(4.0);
    widgets::records_list::records_list(ui, state);
}
