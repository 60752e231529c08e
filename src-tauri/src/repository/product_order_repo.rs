//! Product Order Repository
//!
//! SQLite-backed CRUD for product orders.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, ProductOrder};
use super::db::{connection, inserted_id};
use super::traits::Repository;

const SELECT_ORDERS: &str =
    "SELECT id, order_number, purchaser, item, quantity, date_of_order FROM product_orders";

pub struct ProductOrderRepository {
    conn: Arc<Mutex<Option<Connection>>>,
}

impl ProductOrderRepository {
    pub fn new(conn: Arc<Mutex<Option<Connection>>>) -> Self {
        Self { conn }
    }
}

fn row_to_order(row: &Row<'_>) -> rusqlite::Result<ProductOrder> {
    Ok(ProductOrder {
        id: row.get(0)?,
        order_number: row.get(1)?,
        purchaser: row.get(2)?,
        item: row.get(3)?,
        quantity: row.get(4)?,
        date_of_order: row.get(5)?,
    })
}

#[async_trait]
impl Repository<ProductOrder> for ProductOrderRepository {
    async fn create(&self, entity: &ProductOrder) -> DomainResult<ProductOrder> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        conn.execute(
            "INSERT INTO product_orders (order_number, purchaser, item, quantity, date_of_order)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                entity.order_number,
                entity.purchaser,
                entity.item,
                entity.quantity,
                entity.date_of_order
            ],
        )?;

        let mut created = entity.clone();
        created.id = inserted_id(conn)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<ProductOrder>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let order = conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_ORDERS), params![id], row_to_order)
            .optional()?;
        Ok(order)
    }

    async fn list(&self) -> DomainResult<Vec<ProductOrder>> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        let mut stmt = conn.prepare(&format!("{} ORDER BY id", SELECT_ORDERS))?;
        let orders = stmt
            .query_map([], row_to_order)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(orders)
    }

    async fn update(&self, entity: &ProductOrder) -> DomainResult<ProductOrder> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        conn.execute(
            "UPDATE product_orders
             SET order_number = ?1, purchaser = ?2, item = ?3, quantity = ?4, date_of_order = ?5
             WHERE id = ?6",
            params![
                entity.order_number,
                entity.purchaser,
                entity.item,
                entity.quantity,
                entity.date_of_order,
                entity.id
            ],
        )?;

        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = connection(&guard)?;

        conn.execute("DELETE FROM product_orders WHERE id = ?1", params![id])?;
        Ok(())
    }
}
