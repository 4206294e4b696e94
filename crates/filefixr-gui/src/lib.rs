/// FileFixr GUI — egui-based desktop frontend.
///
/// This crate contains all UI code. The rename engine lives in
/// `filefixr-core`.
pub mod app;
pub mod panels;
pub mod settings;
pub mod state;
pub mod theme;
pub mod widgets;

pub use app::{FileFixrApp, FileFixrState};
