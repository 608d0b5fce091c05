//! UI components for the plate browser and viewer pages.

pub mod meta_panel;
pub mod plate_grid;
pub mod query_form;
pub mod sidebar;
pub mod split_pane;
pub mod toolbar;
