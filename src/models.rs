//! Frontend Models
//!
//! Data structures matching backend entities, the drafts edited by the
//! create forms, and the validated payloads sent to the add commands.

use serde::{Deserialize, Serialize};

/// Product order as listed by `get_product_orders` (snake_case fields)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOrder {
    pub id: u32,
    pub order_number: u32,
    pub purchaser: String,
    pub item: String,
    pub quantity: u32,
    pub date_of_order: String,
}

/// Project as listed by `get_projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub project_number: u32,
}

/// Unsaved product order being filled in by the create form
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOrderDraft {
    pub order_number: u32,
    pub purchaser: String,
    pub item: String,
    pub quantity: u32,
    /// `YYYY-MM-DD` from the date input, empty until picked
    pub date_of_order: String,
}

impl Default for ProductOrderDraft {
    fn default() -> Self {
        Self {
            order_number: 0,
            purchaser: String::new(),
            item: String::new(),
            quantity: 1,
            date_of_order: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub project_number: u32,
}

/// Validated `add_product_order` arguments (camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductOrder {
    pub order_number: u32,
    pub purchaser: String,
    pub item: String,
    pub quantity: u32,
    pub date_of_order: String,
}

/// Validated `add_project` arguments
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub project_number: u32,
}
