//! Database Connection and Setup
//!
//! Manages the SQLite connection and schema migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Shared handle to the single SQLite connection
#[derive(Clone)]
pub struct DbState {
    pub conn: Arc<Mutex<Option<Connection>>>,
}

impl DbState {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(Some(conn))),
        }
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Borrow the open connection out of a locked `DbState` slot
pub(crate) fn connection(slot: &Option<Connection>) -> DomainResult<&Connection> {
    slot.as_ref()
        .ok_or_else(|| DomainError::Internal("Database not initialized".to_string()))
}

/// ID of the row just inserted on `conn`; ids beyond `u32` are an error
pub(crate) fn inserted_id(conn: &Connection) -> DomainResult<u32> {
    let rowid = conn.last_insert_rowid();
    u32::try_from(rowid)
        .map_err(|_| DomainError::Internal(format!("Row id {} out of range", rowid)))
}

/// Open (creating if needed) the database at `db_path` and run migrations.
///
/// `:memory:` opens a private in-memory database.
pub fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let conn = Connection::open(db_path)?;
    run_migrations(&conn)?;
    log::info!("Database ready at {}", db_path.display());
    Ok(DbState::new(conn))
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    // Links cascade away with either side
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS product_orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            order_number INTEGER NOT NULL,
            purchaser TEXT NOT NULL,
            item TEXT NOT NULL,
            quantity INTEGER NOT NULL,
            date_of_order TEXT NOT NULL
        )",
        (),
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_number INTEGER NOT NULL
        )",
        (),
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS product_order_project_links (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
            product_order INTEGER NOT NULL REFERENCES product_orders(id) ON DELETE CASCADE
        )",
        (),
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_links_project ON product_order_project_links(project)",
        (),
    )?;

    Ok(())
}
