//! Order Log Backend
//!
//! Layered architecture:
//! - domain: Core entities and errors
//! - repository: SQLite data access
//! - commands: Tauri command handlers

use std::path::PathBuf;
use tauri::Manager;

mod domain;
mod repository;
mod commands;

use repository::{init_db, DbState, ProductOrderRepository, ProjectRepository};

/// Application state shared across commands
pub struct AppState {
    pub product_order_repo: ProductOrderRepository,
    pub project_repo: ProjectRepository,
}

impl AppState {
    fn new(db_state: &DbState) -> Self {
        Self {
            product_order_repo: ProductOrderRepository::new(db_state.conn.clone()),
            project_repo: ProjectRepository::new(db_state.conn.clone()),
        }
    }
}

/// Get database path from app handle, creating the data directory
fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join("order_log.db"))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "OrderLog")?;
            rolling_logger::info("App setup starting");

            let db_path = get_db_path(&app_handle)?;
            let db_state = init_db(&db_path).map_err(|e| {
                rolling_logger::error(&format!("DB init failed: {}", e));
                e
            })?;

            app.manage(AppState::new(&db_state));
            rolling_logger::info("App state managed");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Product orders
            commands::add_product_order,
            commands::get_product_orders,
            commands::update_product_order,
            commands::delete_product_order,
            // Projects
            commands::add_project,
            commands::get_projects,
            commands::update_project,
            commands::delete_project,
            // Project links
            commands::add_product_order_to_project,
            commands::remove_product_order_from_project,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
