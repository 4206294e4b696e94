/// Central panels for FileFixr.
pub mod run_panel;
