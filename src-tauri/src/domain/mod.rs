//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod product_order;
mod project;

pub use entity::{Entity, DomainError, DomainResult};
pub use product_order::ProductOrder;
pub use project::{Project, ProductOrderProjectLink};
