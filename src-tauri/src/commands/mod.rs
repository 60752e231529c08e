//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend repositories.

mod product_order_cmd;
mod project_cmd;

pub use product_order_cmd::*;
pub use project_cmd::*;
