/// Scrolling list of the most recent rename records.
use crate::state::AppState;
use crate::theme::Palette;
use egui::Ui;
use filefixr_core::model::EntityKind;

pub fn records_list(ui: &mut Ui, state: &AppState) {
    let palette = Palette::for_ui(ui);
    let weak = ui.visuals().weak_text_color();

    if state.recent_records.is_empty() {
        ui.label(egui::RichText::new("No changes yet").size(12.0).color(weak));
        return;
    }

    let row_height = ui.text_style_height(&egui::TextStyle::Body);
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show_rows(ui, row_height, state.recent_records.len(), |ui, range| {
            for record in state.recent_records.range(range) {
                let icon = match record.entity_kind {
                    EntityKind::File => "📄",
                    EntityKind::Directory => "📁",
                };
                ui.label(
                    egui::RichText::new(format!("{icon} {record}"))
                        .size(12.0)
                        .color(palette.record(record.kind)),
                );
            }
        });
}
