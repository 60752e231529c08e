//! Field Editing
//!
//! Typed per-field updates for drafts and records. Every input in a form
//! or dialog is bound to one field variant; raw input text is coerced here.

use crate::models::{ProductOrder, ProductOrderDraft, Project, ProjectDraft};

/// Something whose fields can be read and written as input text
pub trait Editable {
    type Field: Copy + PartialEq + Send + Sync + 'static;

    /// Current value formatted for an input's `value`
    fn field_value(&self, field: Self::Field) -> String;

    /// Apply raw input text to one field
    fn set_field(&mut self, field: Self::Field, raw: &str);

    /// Whether the field holds a number rather than free text
    fn is_numeric(field: Self::Field) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOrderField {
    OrderNumber,
    Purchaser,
    Item,
    Quantity,
    DateOfOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    ProjectNumber,
}

/// HTML input type for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Date,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Date => "date",
        }
    }
}

/// How one field is presented in a form or dialog
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec<F> {
    pub field: F,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub input: InputKind,
    pub min: Option<&'static str>,
}

/// Coerce input text to a number the way a number input does.
///
/// Blank, unparseable, negative and non-finite text become 0; fractions
/// are truncated and values beyond `u32::MAX` saturate.
pub fn coerce_number(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n as u32,
        _ => 0,
    }
}

/// Strict parse for free-text numeric inputs.
///
/// Blank text is 0. Anything else must be a whole number in `u32` range,
/// otherwise `None`; no part of the text is discarded.
pub fn parse_number(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    let n = trimmed.parse::<f64>().ok()?;
    (n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= u32::MAX as f64).then_some(n as u32)
}

impl Editable for ProductOrderDraft {
    type Field = ProductOrderField;

    fn field_value(&self, field: ProductOrderField) -> String {
        match field {
            ProductOrderField::OrderNumber => self.order_number.to_string(),
            ProductOrderField::Purchaser => self.purchaser.clone(),
            ProductOrderField::Item => self.item.clone(),
            ProductOrderField::Quantity => self.quantity.to_string(),
            ProductOrderField::DateOfOrder => self.date_of_order.clone(),
        }
    }

    fn set_field(&mut self, field: ProductOrderField, raw: &str) {
        match field {
            ProductOrderField::OrderNumber => self.order_number = coerce_number(raw),
            ProductOrderField::Purchaser => self.purchaser = raw.to_string(),
            ProductOrderField::Item => self.item = raw.to_string(),
            ProductOrderField::Quantity => self.quantity = coerce_number(raw),
            ProductOrderField::DateOfOrder => self.date_of_order = raw.to_string(),
        }
    }

    fn is_numeric(field: ProductOrderField) -> bool {
        matches!(field, ProductOrderField::OrderNumber | ProductOrderField::Quantity)
    }
}

impl Editable for ProductOrder {
    type Field = ProductOrderField;

    fn field_value(&self, field: ProductOrderField) -> String {
        match field {
            ProductOrderField::OrderNumber => self.order_number.to_string(),
            ProductOrderField::Purchaser => self.purchaser.clone(),
            ProductOrderField::Item => self.item.clone(),
            ProductOrderField::Quantity => self.quantity.to_string(),
            ProductOrderField::DateOfOrder => self.date_of_order.clone(),
        }
    }

    fn set_field(&mut self, field: ProductOrderField, raw: &str) {
        match field {
            ProductOrderField::OrderNumber => self.order_number = coerce_number(raw),
            ProductOrderField::Purchaser => self.purchaser = raw.to_string(),
            ProductOrderField::Item => self.item = raw.to_string(),
            ProductOrderField::Quantity => self.quantity = coerce_number(raw),
            ProductOrderField::DateOfOrder => self.date_of_order = raw.to_string(),
        }
    }

    fn is_numeric(field: ProductOrderField) -> bool {
        matches!(field, ProductOrderField::OrderNumber | ProductOrderField::Quantity)
    }
}

impl Editable for ProjectDraft {
    type Field = ProjectField;

    fn field_value(&self, field: ProjectField) -> String {
        match field {
            ProjectField::ProjectNumber => self.project_number.to_string(),
        }
    }

    fn set_field(&mut self, field: ProjectField, raw: &str) {
        match field {
            ProjectField::ProjectNumber => self.project_number = coerce_number(raw),
        }
    }

    fn is_numeric(_field: ProjectField) -> bool {
        true
    }
}

impl Editable for Project {
    type Field = ProjectField;

    fn field_value(&self, field: ProjectField) -> String {
        match field {
            ProjectField::ProjectNumber => self.project_number.to_string(),
        }
    }

    fn set_field(&mut self, field: ProjectField, raw: &str) {
        match field {
            ProjectField::ProjectNumber => self.project_number = coerce_number(raw),
        }
    }

    fn is_numeric(_field: ProjectField) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("42"), 42);
        assert_eq!(coerce_number(" 7 "), 7);
        assert_eq!(coerce_number(""), 0);
        assert_eq!(coerce_number("abc"), 0);
        assert_eq!(coerce_number("-5"), 0);
        assert_eq!(coerce_number("2.9"), 2);
        assert_eq!(coerce_number("1e3"), 1000);
        assert_eq!(coerce_number("inf"), 0);
        assert_eq!(coerce_number("99999999999"), u32::MAX);
    }

    #[test]
    fn test_parse_number_is_strict() {
        assert_eq!(parse_number("12"), Some(12));
        assert_eq!(parse_number(" 12 "), Some(12));
        assert_eq!(parse_number(""), Some(0));
        assert_eq!(parse_number("12.0"), Some(12));
        assert_eq!(parse_number("12a"), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("-1"), None);
        assert_eq!(parse_number("2.5"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("4294967296"), None);
    }

    #[test]
    fn test_numeric_fields() {
        assert!(ProductOrder::is_numeric(ProductOrderField::OrderNumber));
        assert!(ProductOrder::is_numeric(ProductOrderField::Quantity));
        assert!(!ProductOrder::is_numeric(ProductOrderField::Purchaser));
        assert!(!ProductOrder::is_numeric(ProductOrderField::DateOfOrder));
        assert!(Project::is_numeric(ProjectField::ProjectNumber));
    }

    #[test]
    fn test_draft_field_updates() {
        let mut draft = ProductOrderDraft::default();
        draft.set_field(ProductOrderField::OrderNumber, "15");
        draft.set_field(ProductOrderField::Purchaser, "  Ann ");
        draft.set_field(ProductOrderField::Quantity, "");
        draft.set_field(ProductOrderField::DateOfOrder, "2024-06-01");

        assert_eq!(draft.order_number, 15);
        // Trimming happens at validation, not while typing
        assert_eq!(draft.purchaser, "  Ann ");
        assert_eq!(draft.quantity, 0);
        assert_eq!(draft.field_value(ProductOrderField::DateOfOrder), "2024-06-01");
    }

    #[test]
    fn test_record_field_updates_keep_id() {
        let mut project = Project { id: 4, project_number: 10 };
        project.set_field(ProjectField::ProjectNumber, "11");

        assert_eq!(project, Project { id: 4, project_number: 11 });
        assert_eq!(project.field_value(ProjectField::ProjectNumber), "11");
    }
}
