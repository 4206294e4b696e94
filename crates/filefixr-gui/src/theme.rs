/// Colour scheme for FileFixr.
///
/// Semantic colours for record outcomes and status text, in a dark and a
/// light variant. Everything else follows egui's stock visuals.
use egui::Color32;
use filefixr_core::model::RecordKind;

pub struct Palette {
    pub applied: Color32,
    pub simulated: Color32,
    pub failed: Color32,
    pub warning: Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            applied: Color32::from_rgb(0xa6, 0xe3, 0xa1),
            simulated: Color32::from_rgb(0x89, 0xb4, 0xfa),
            failed: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
        }
    }

    pub fn light() -> Self {
        Self {
            applied: Color32::from_rgb(0x2e, 0x7d, 0x32),
            simulated: Color32::from_rgb(0x1e, 0x66, 0xf5),
            failed: Color32::from_rgb(0xc6, 0x28, 0x28),
            warning: Color32::from_rgb(0xe6, 0x5c, 0x00),
        }
    }

    /// Palette matching the visuals currently in effect.
    pub fn for_ui(ui: &egui::Ui) -> Self {
        if ui.visuals().dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn record(&self, kind: RecordKind) -> Color32 {
        match kind {
            RecordKind::Applied => self.applied,
            RecordKind::Simulated => self.simulated,
            RecordKind::Failed => self.failed,
        }
    }
}
