//! UI Components
//!
//! Generic Leptos components shared by every record page.

mod edit_dialog;
mod entity_page;
mod record_form;
mod record_grid;

pub use edit_dialog::EditDialog;
pub use entity_page::{EntityPage, PageHandle};
pub use record_form::RecordForm;
pub use record_grid::RecordGrid;
