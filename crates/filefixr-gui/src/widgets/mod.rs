/// UI widgets for FileFixr.
pub mod path_field;
pub mod records_list;
pub mod status_bar;
pub mod toolbar;
