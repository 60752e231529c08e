//! Tauri Commands for Product Orders
//!
//! Exposes product order CRUD to the frontend via Tauri IPC.
//! Creation takes flat camelCase arguments; update takes the full
//! snake_case record under `productOrder`.

use tauri::State;
use crate::domain::ProductOrder;
use crate::repository::Repository;
use crate::AppState;

/// Create a product order; the database assigns its ID
#[tauri::command]
pub async fn add_product_order(
    state: State<'_, AppState>,
    order_number: u32,
    purchaser: String,
    item: String,
    quantity: u32,
    date_of_order: String,
) -> Result<(), String> {
    let order = ProductOrder::new(order_number, purchaser, item, quantity, date_of_order);
    let created = state
        .product_order_repo
        .create(&order)
        .await
        .map_err(|e| format!("Error saving product order: {}", e))?;

    log::info!("Added product order {} (#{})", created.id, created.order_number);
    Ok(())
}

/// List all product orders, oldest first
#[tauri::command]
pub async fn get_product_orders(state: State<'_, AppState>) -> Result<Vec<ProductOrder>, String> {
    state
        .product_order_repo
        .list()
        .await
        .map_err(|e| format!("Failed to get product orders: {}", e))
}

/// Replace every field of a product order
#[tauri::command]
pub async fn update_product_order(
    state: State<'_, AppState>,
    product_order: ProductOrder,
) -> Result<(), String> {
    state
        .product_order_repo
        .update(&product_order)
        .await
        .map_err(|e| format!("Could not update product order: {}", e))?;

    log::info!("Updated product order {}", product_order.id);
    Ok(())
}

/// Delete a product order by ID
#[tauri::command]
pub async fn delete_product_order(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state
        .product_order_repo
        .delete(id)
        .await
        .map_err(|e| format!("Could not delete product order: {}", e))?;

    log::info!("Deleted product order {}", id);
    Ok(())
}
