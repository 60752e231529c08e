//! Create-Form Validation
//!
//! Rules are checked in a fixed order and the first failure wins.
//! A passing draft becomes the payload for its add command.

use crate::models::{NewProductOrder, NewProject, ProductOrderDraft, ProjectDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidOrderNumber,
    PurchaserRequired,
    ItemRequired,
    QuantityTooSmall,
    DateRequired,
    InvalidProjectNumber,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ValidationError::InvalidOrderNumber => "Invalid order number",
            ValidationError::PurchaserRequired => "Purchaser is required.",
            ValidationError::ItemRequired => "Item is required.",
            ValidationError::QuantityTooSmall => "Quantity must be at least 1",
            ValidationError::DateRequired => "Date of order is required.",
            ValidationError::InvalidProjectNumber => "Invalid project number",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

impl ProductOrderDraft {
    pub fn validate(&self) -> Result<NewProductOrder, ValidationError> {
        if self.order_number == 0 {
            return Err(ValidationError::InvalidOrderNumber);
        }
        let purchaser = self.purchaser.trim();
        if purchaser.is_empty() {
            return Err(ValidationError::PurchaserRequired);
        }
        let item = self.item.trim();
        if item.is_empty() {
            return Err(ValidationError::ItemRequired);
        }
        if self.quantity < 1 {
            return Err(ValidationError::QuantityTooSmall);
        }
        if self.date_of_order.is_empty() {
            return Err(ValidationError::DateRequired);
        }

        Ok(NewProductOrder {
            order_number: self.order_number,
            purchaser: purchaser.to_string(),
            item: item.to_string(),
            quantity: self.quantity,
            date_of_order: self.date_of_order.clone(),
        })
    }
}

impl ProjectDraft {
    pub fn validate(&self) -> Result<NewProject, ValidationError> {
        if self.project_number == 0 {
            return Err(ValidationError::InvalidProjectNumber);
        }
        Ok(NewProject { project_number: self.project_number })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductOrderDraft {
        ProductOrderDraft {
            order_number: 3,
            purchaser: "Acme".to_string(),
            item: "Bolts".to_string(),
            quantity: 2,
            date_of_order: "2024-02-03".to_string(),
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::InvalidOrderNumber.to_string(), "Invalid order number");
        assert_eq!(ValidationError::PurchaserRequired.to_string(), "Purchaser is required.");
        assert_eq!(ValidationError::ItemRequired.to_string(), "Item is required.");
        assert_eq!(ValidationError::QuantityTooSmall.to_string(), "Quantity must be at least 1");
        assert_eq!(ValidationError::DateRequired.to_string(), "Date of order is required.");
        assert_eq!(ValidationError::InvalidProjectNumber.to_string(), "Invalid project number");
    }

    #[test]
    fn test_default_draft_fails_on_order_number() {
        assert_eq!(
            ProductOrderDraft::default().validate(),
            Err(ValidationError::InvalidOrderNumber)
        );
    }

    #[test]
    fn test_each_rule_in_isolation() {
        let cases: Vec<(fn(&mut ProductOrderDraft), ValidationError)> = vec![
            (|d| d.order_number = 0, ValidationError::InvalidOrderNumber),
            (|d| d.purchaser = "   ".to_string(), ValidationError::PurchaserRequired),
            (|d| d.item = String::new(), ValidationError::ItemRequired),
            (|d| d.quantity = 0, ValidationError::QuantityTooSmall),
            (|d| d.date_of_order = String::new(), ValidationError::DateRequired),
        ];

        for (break_rule, expected) in cases {
            let mut draft = valid_draft();
            break_rule(&mut draft);
            assert_eq!(draft.validate(), Err(expected));
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let draft = ProductOrderDraft {
            order_number: 1,
            purchaser: String::new(),
            item: String::new(),
            quantity: 0,
            date_of_order: String::new(),
        };
        assert_eq!(draft.validate(), Err(ValidationError::PurchaserRequired));

        let draft = ProductOrderDraft {
            item: " ".to_string(),
            quantity: 0,
            ..valid_draft()
        };
        assert_eq!(draft.validate(), Err(ValidationError::ItemRequired));
    }

    #[test]
    fn test_valid_draft_is_trimmed() {
        let draft = ProductOrderDraft {
            purchaser: "  Acme  ".to_string(),
            item: "\tBolts ".to_string(),
            ..valid_draft()
        };

        let new = draft.validate().unwrap();
        assert_eq!(new.purchaser, "Acme");
        assert_eq!(new.item, "Bolts");
        assert_eq!(new.order_number, 3);
        assert_eq!(new.quantity, 2);
        assert_eq!(new.date_of_order, "2024-02-03");
    }

    #[test]
    fn test_project_validation() {
        assert_eq!(
            ProjectDraft { project_number: 0 }.validate(),
            Err(ValidationError::InvalidProjectNumber)
        );
        assert_eq!(
            ProjectDraft { project_number: 5 }.validate(),
            Ok(NewProject { project_number: 5 })
        );
    }
}
