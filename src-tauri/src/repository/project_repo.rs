//! Project Repository
//!
//! SQLite-backed CRUD for projects, plus the project/product-order link table.

use async_trait::async_trait;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, ProductOrderProjectLink, Project};
use super::db::{connection, inserted_id};
use super::traits::Repository;

pub struct ProjectRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl ProjectRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }

    /// Attach a product order to a project.
    /// Both IDs must exist.
    pub async fn link_product_order(
        &self,
        project_id: u32,
        product_order_id: u32,
    ) -> DomainResult<ProductOrderProjectLink> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        conn.execute(
            "INSERT INTO product_order_project_links (project, product_order) VALUES (?1, ?2)",
            params![project_id, product_order_id],
        )
        .map_err(|e| match e.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => DomainError::InvalidInput(format!(
                "project {} or product order {} does not exist",
                project_id, product_order_id
            )),
            _ => DomainError::from(e),
        })?;

        Ok(ProductOrderProjectLink {
            id: inserted_id(conn)?,
            project: project_id,
            product_order: product_order_id,
        })
    }

    /// Remove a link by its own ID
    pub async fn unlink(&self, link_id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        conn.execute(
            "DELETE FROM product_order_project_links WHERE id = ?1",
            params![link_id],
        )?;
        Ok(())
    }
}

#[async_trait]
impl Repository<Project> for ProjectRepository {
    async fn create(&self, entity: &Project) -> DomainResult<Project> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        conn.execute(
            "INSERT INTO projects (project_number) VALUES (?1)",
            params![entity.project_number],
        )?;

        Ok(Project {
            id: inserted_id(conn)?,
            project_number: entity.project_number,
        })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Project>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let project = conn
            .query_row(
                "SELECT id, project_number FROM projects WHERE id = ?1",
                params![id],
                |row| Ok(Project { id: row.get(0)?, project_number: row.get(1)? }),
            )
            .optional()?;
        Ok(project)
    }

    async fn list(&self) -> DomainResult<Vec<Project>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let mut stmt = conn.prepare("SELECT id, project_number FROM projects ORDER BY id")?;
        let projects = stmt
            .query_map([], |row| Ok(Project { id: row.get(0)?, project_number: row.get(1)? }))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(projects)
    }

    async fn update(&self, entity: &Project) -> DomainResult<Project> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        conn.execute(
            "UPDATE projects SET project_number = ?1 WHERE id = ?2",
            params![entity.project_number, entity.id],
        )?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        conn.execute("DELETE FROM projects WHERE id = ?1", params![id])?;
        Ok(())
    }
}
