//! Product Order Commands

use serde::Serialize;

use super::{invoke_list, invoke_unit, IdArgs};
use crate::models::{NewProductOrder, ProductOrder};

// ========================
// Argument Structs
// ========================

/// `update_product_order` takes the whole record, snake_case inside
#[derive(Serialize)]
pub struct UpdateProductOrderArgs<'a> {
    #[serde(rename = "productOrder")]
    pub product_order: &'a ProductOrder,
}

// ========================
// Commands
// ========================

pub async fn add_product_order(order: &NewProductOrder) -> Result<(), String> {
    invoke_unit("add_product_order", order).await
}

pub async fn get_product_orders() -> Result<Vec<ProductOrder>, String> {
    invoke_list("get_product_orders").await
}

pub async fn update_product_order(order: &ProductOrder) -> Result<(), String> {
    invoke_unit("update_product_order", &UpdateProductOrderArgs { product_order: order }).await
}

pub async fn delete_product_order(id: u32) -> Result<(), String> {
    invoke_unit("delete_product_order", &IdArgs { id }).await
}
