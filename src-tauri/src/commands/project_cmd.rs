//! Tauri Commands for Projects
//!
//! Project CRUD plus attaching product orders to projects.

use tauri::State;
use crate::domain::Project;
use crate::repository::Repository;
use crate::AppState;

#[tauri::command]
pub async fn add_project(state: State<'_, AppState>, project_number: u32) -> Result<(), String> {
    let created = state
        .project_repo
        .create(&Project::new(project_number))
        .await
        .map_err(|e| format!("Error saving project: {}", e))?;

    log::info!("Added project {} (#{})", created.id, created.project_number);
    Ok(())
}

#[tauri::command]
pub async fn get_projects(state: State<'_, AppState>) -> Result<Vec<Project>, String> {
    state
        .project_repo
        .list()
        .await
        .map_err(|e| format!("Failed to get projects: {}", e))
}

#[tauri::command]
pub async fn update_project(state: State<'_, AppState>, project: Project) -> Result<(), String> {
    state
        .project_repo
        .update(&project)
        .await
        .map_err(|e| format!("Could not update project: {}", e))?;

    log::info!("Updated project {}", project.id);
    Ok(())
}

#[tauri::command]
pub async fn delete_project(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state
        .project_repo
        .delete(id)
        .await
        .map_err(|e| format!("Could not delete project: {}", e))?;

    log::info!("Deleted project {}", id);
    Ok(())
}

// ========================
// Project / Product Order Links
// ========================

/// Attach a product order to a project
#[tauri::command]
pub async fn add_product_order_to_project(
    state: State<'_, AppState>,
    project_id: u32,
    product_order_id: u32,
) -> Result<(), String> {
    let link = state
        .project_repo
        .link_product_order(project_id, product_order_id)
        .await
        .map_err(|e| format!("Error saving product order-project link: {}", e))?;

    log::info!(
        "Linked product order {} to project {} (link {})",
        link.product_order,
        link.project,
        link.id
    );
    Ok(())
}

/// Remove a link by its own ID
#[tauri::command]
pub async fn remove_product_order_from_project(
    state: State<'_, AppState>,
    id: u32,
) -> Result<(), String> {
    state
        .project_repo
        .unlink(id)
        .await
        .map_err(|e| format!("Error removing product order-project link: {}", e))?;

    log::info!("Removed product order-project link {}", id);
    Ok(())
}
