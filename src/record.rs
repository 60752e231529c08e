//! Record Kinds
//!
//! Everything a CRUD page needs to know about one kind of record: its
//! texts, form and dialog fields, grid columns, validation and the
//! backend commands that persist it.

use async_trait::async_trait;

use crate::commands::CommandClient;
use crate::fields::{Editable, FieldSpec, InputKind, ProductOrderField, ProjectField};
use crate::grid::{Cell, Column, GridRow};
use crate::models::{NewProductOrder, NewProject, ProductOrder, ProductOrderDraft, Project, ProjectDraft};
use crate::validation::ValidationError;

#[async_trait(?Send)]
pub trait Record: Editable + GridRow + Clone + PartialEq + Send + Sync + 'static {
    /// Create-form state
    type Draft: Editable<Field = Self::Field> + Clone + Default + Send + Sync + 'static;
    /// Validated add payload
    type New: 'static;

    const PAGE_TITLE: &'static str;
    const LOADING_TEXT: &'static str;
    /// Caption above the grid
    const GRID_TITLE: &'static str;
    const DIALOG_TITLE: &'static str;
    /// Plural noun used in log lines
    const COLLECTION: &'static str;

    fn id(&self) -> u32;
    fn form_fields() -> &'static [FieldSpec<Self::Field>];
    fn edit_fields() -> &'static [FieldSpec<Self::Field>];
    fn validate(draft: &Self::Draft) -> Result<Self::New, ValidationError>;

    async fn add(client: &dyn CommandClient, new: &Self::New) -> Result<(), String>;
    async fn list(client: &dyn CommandClient) -> Result<Vec<Self>, String>;
    async fn update(client: &dyn CommandClient, record: &Self) -> Result<(), String>;
    async fn delete(client: &dyn CommandClient, id: u32) -> Result<(), String>;
}

// ========================
// Product Orders
// ========================

static PRODUCT_ORDER_FORM: [FieldSpec<ProductOrderField>; 5] = [
    FieldSpec {
        field: ProductOrderField::OrderNumber,
        label: "Order Number",
        placeholder: Some("Order Number"),
        input: InputKind::Number,
        min: Some("0"),
    },
    FieldSpec {
        field: ProductOrderField::Purchaser,
        label: "Purchaser",
        placeholder: Some("Purchaser"),
        input: InputKind::Text,
        min: None,
    },
    FieldSpec {
        field: ProductOrderField::Item,
        label: "Item",
        placeholder: Some("Item"),
        input: InputKind::Text,
        min: None,
    },
    FieldSpec {
        field: ProductOrderField::Quantity,
        label: "Quantity",
        placeholder: None,
        input: InputKind::Number,
        min: Some("1"),
    },
    FieldSpec {
        field: ProductOrderField::DateOfOrder,
        label: "Date of Order",
        placeholder: None,
        input: InputKind::Date,
        min: None,
    },
];

static PRODUCT_ORDER_DIALOG: [FieldSpec<ProductOrderField>; 5] = [
    FieldSpec {
        field: ProductOrderField::OrderNumber,
        label: "Order #",
        placeholder: None,
        input: InputKind::Text,
        min: None,
    },
    FieldSpec {
        field: ProductOrderField::Purchaser,
        label: "Purchaser",
        placeholder: None,
        input: InputKind::Text,
        min: None,
    },
    FieldSpec {
        field: ProductOrderField::Item,
        label: "Item",
        placeholder: None,
        input: InputKind::Text,
        min: None,
    },
    FieldSpec {
        field: ProductOrderField::Quantity,
        label: "Quantity",
        placeholder: None,
        input: InputKind::Number,
        min: None,
    },
    FieldSpec {
        field: ProductOrderField::DateOfOrder,
        label: "Date of Order",
        placeholder: None,
        input: InputKind::Date,
        min: None,
    },
];

static PRODUCT_ORDER_COLUMNS: [Column; 5] = [
    Column { header: "Order #", numeric: false },
    Column { header: "Purchaser", numeric: false },
    Column { header: "Item", numeric: false },
    Column { header: "Quantity", numeric: true },
    Column { header: "Date Of Order", numeric: false },
];

impl GridRow for ProductOrder {
    fn columns() -> &'static [Column] {
        &PRODUCT_ORDER_COLUMNS
    }

    fn cell(&self, index: usize) -> Cell {
        match index {
            0 => Cell::Number(self.order_number),
            1 => Cell::Text(self.purchaser.clone()),
            2 => Cell::Text(self.item.clone()),
            3 => Cell::Number(self.quantity),
            _ => Cell::Text(self.date_of_order.clone()),
        }
    }
}

#[async_trait(?Send)]
impl Record for ProductOrder {
    type Draft = ProductOrderDraft;
    type New = NewProductOrder;

    const PAGE_TITLE: &'static str = "Product Order Page";
    const LOADING_TEXT: &'static str = "Loading product orders...";
    const GRID_TITLE: &'static str = "Product Orders";
    const DIALOG_TITLE: &'static str = "Edit Product Order";
    const COLLECTION: &'static str = "product orders";

    fn id(&self) -> u32 {
        self.id
    }

    fn form_fields() -> &'static [FieldSpec<ProductOrderField>] {
        &PRODUCT_ORDER_FORM
    }

    fn edit_fields() -> &'static [FieldSpec<ProductOrderField>] {
        &PRODUCT_ORDER_DIALOG
    }

    fn validate(draft: &ProductOrderDraft) -> Result<NewProductOrder, ValidationError> {
        draft.validate()
    }

    async fn add(client: &dyn CommandClient, new: &NewProductOrder) -> Result<(), String> {
        client.add_product_order(new).await
    }

    async fn list(client: &dyn CommandClient) -> Result<Vec<Self>, String> {
        client.get_product_orders().await
    }

    async fn update(client: &dyn CommandClient, record: &Self) -> Result<(), String> {
        client.update_product_order(record).await
    }

    async fn delete(client: &dyn CommandClient, id: u32) -> Result<(), String> {
        client.delete_product_order(id).await
    }
}

// ========================
// Projects
// ========================

static PROJECT_FORM: [FieldSpec<ProjectField>; 1] = [FieldSpec {
    field: ProjectField::ProjectNumber,
    label: "Project Number",
    placeholder: Some("Project #"),
    input: InputKind::Number,
    min: Some("0"),
}];

static PROJECT_DIALOG: [FieldSpec<ProjectField>; 1] = [FieldSpec {
    field: ProjectField::ProjectNumber,
    label: "Project #",
    placeholder: None,
    input: InputKind::Text,
    min: None,
}];

static PROJECT_COLUMNS: [Column; 1] = [Column { header: "Project Number", numeric: false }];

impl GridRow for Project {
    fn columns() -> &'static [Column] {
        &PROJECT_COLUMNS
    }

    fn cell(&self, _index: usize) -> Cell {
        Cell::Number(self.project_number)
    }
}

#[async_trait(?Send)]
impl Record for Project {
    type Draft = ProjectDraft;
    type New = NewProject;

    const PAGE_TITLE: &'static str = "Projects Page";
    const LOADING_TEXT: &'static str = "Loading projects...";
    const GRID_TITLE: &'static str = "Projects";
    const DIALOG_TITLE: &'static str = "Edit Project";
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> u32 {
        self.id
    }

    fn form_fields() -> &'static [FieldSpec<ProjectField>] {
        &PROJECT_FORM
    }

    fn edit_fields() -> &'static [FieldSpec<ProjectField>] {
        &PROJECT_DIALOG
    }

    fn validate(draft: &ProjectDraft) -> Result<NewProject, ValidationError> {
        draft.validate()
    }

    async fn add(client: &dyn CommandClient, new: &NewProject) -> Result<(), String> {
        client.add_project(new).await
    }

    async fn list(client: &dyn CommandClient) -> Result<Vec<Self>, String> {
        client.get_projects().await
    }

    async fn update(client: &dyn CommandClient, record: &Self) -> Result<(), String> {
        client.update_project(record).await
    }

    async fn delete(client: &dyn CommandClient, id: u32) -> Result<(), String> {
        client.delete_project(id).await
    }
}
