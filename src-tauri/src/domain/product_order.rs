//! Product Order Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A purchase of some quantity of an item.
///
/// Serialized with snake_case field names; this is the shape both
/// `get_product_orders` returns and `update_product_order` accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOrder {
    /// Unique identifier (assigned by the database)
    pub id: u32,
    pub order_number: u32,
    pub purchaser: String,
    pub item: String,
    pub quantity: u32,
    /// ISO date, `YYYY-MM-DD`
    pub date_of_order: String,
}

impl ProductOrder {
    /// Build an order that has not been persisted yet (id 0)
    pub fn new(
        order_number: u32,
        purchaser: String,
        item: String,
        quantity: u32,
        date_of_order: String,
    ) -> Self {
        Self {
            id: 0,
            order_number,
            purchaser,
            item,
            quantity,
            date_of_order,
        }
    }
}

impl Entity for ProductOrder {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_unsaved() {
        let order = ProductOrder::new(
            12,
            "Acme".to_string(),
            "Bolts".to_string(),
            40,
            "2024-03-01".to_string(),
        );
        assert_eq!(order.id(), 0);
        assert_eq!(order.order_number, 12);
    }

    #[test]
    fn test_wire_shape_is_snake_case() {
        let json = r#"{"id":7,"order_number":3,"purchaser":"Ann","item":"Nuts","quantity":2,"date_of_order":"2024-01-02"}"#;
        let order: ProductOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(order.date_of_order, "2024-01-02");

        let back = serde_json::to_value(&order).unwrap();
        assert_eq!(back["order_number"], 3);
    }
}
