/// Labelled directory entry with an existence indicator and a folder picker.
use egui::Ui;
use rfd::FileDialog;
use std::path::{Path, PathBuf};

/// Draw a single-line directory field with a "Browse…" button that opens
/// the native folder picker. Returns `true` if the text changed.
pub fn path_field(ui: &mut Ui, label: &str, hint: &str, value: &mut String, enabled: bool) -> bool {
    let mut changed = false;
    ui.label(egui::RichText::new(label).strong());
    ui.horizontal(|ui| {
        let trimmed = value.trim();
        let (marker, tip) = if trimmed.is_empty() {
            ("○", "No directory chosen")
        } else if Path::new(trimmed).is_dir() {
            ("✔", "Directory exists")
        } else {
            ("✖", "Not an existing directory")
        };
        ui.label(marker).on_hover_text(tip);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let browse = ui
                .add_enabled(enabled, egui::Button::new("Browse…"))
                .on_hover_text("Choose a folder");
            if browse.clicked() {
                let mut dialog = FileDialog::new().set_title(label);
                if let Some(start) = picker_start_dir(value) {
                    dialog = dialog.set_directory(start);
                }
                // Blocks this frame until the user picks or cancels.
                if let Some(folder) = dialog.pick_folder() {
                    tracing::debug!("{label}: picked {}", folder.display());
                    *value = folder.display().to_string();
                    changed = true;
                }
            }

            let edit = egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(f32::INFINITY);
            if ui.add_enabled(enabled, edit).changed() {
                changed = true;
            }
        });
    });
    changed
}

/// Folder the picker opens in: the current entry, if it is a directory.
fn picker_start_dir(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let path = PathBuf::from(trimmed);
    path.is_dir().then_some(path)
}
