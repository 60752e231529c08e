//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod product_order_repo;
mod project_repo;


pub use traits::Repository;
pub use db::{init_db, DbState};
pub use product_order_repo::ProductOrderRepository;
pub use project_repo::ProjectRepository;
