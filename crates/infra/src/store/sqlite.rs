//! SQLite-backed item store.
//!
//! ## Connection model
//!
//! The pool holds exactly one connection, shared by every request task, so
//! statements from concurrent requests are serialized. Each operation runs in
//! its own transaction; dropping the transaction on an error path rolls it back.
//!
//! ## Name uniqueness
//!
//! `name` is declared `UNIQUE COLLATE NOCASE`, so the database enforces the
//! same case-insensitive rule the lookup queries use.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use dcclink_core::{DomainError, Item};
use dcclink_inventory::{AddItem, ITEM_EXISTS, ITEM_NOT_FOUND, QuantityChange, apply_delta};

use super::{InventoryStore, StoreError};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";

const CREATE_ITEMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS items (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        name     TEXT    NOT NULL UNIQUE COLLATE NOCASE,
        quantity INTEGER NOT NULL DEFAULT 0
    )
"#;

#[derive(Debug, Clone)]
pub struct SqliteInventoryStore {
    pool: SqlitePool,
}

impl SqliteInventoryStore {
    /// Open (creating if missing) the database at `database_url` and ensure
    /// the `items` table exists.
    pub async fn open(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        sqlx::query(CREATE_ITEMS_TABLE).execute(&pool).await?;

        tracing::info!(database_url, "inventory store opened");
        Ok(Self { pool })
    }

    /// Private in-memory database; lives as long as the store.
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::open("sqlite::memory:").await
    }
}

fn item_from_row(row: &SqliteRow) -> Result<Item, sqlx::Error> {
    Ok(Item {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        quantity: row.try_get("quantity")?,
    })
}

fn map_insert_error(err: sqlx::Error) -> StoreError {
    let unique = matches!(&err, sqlx::Error::Database(db_err) if db_err.is_unique_violation());
    if unique {
        DomainError::conflict(ITEM_EXISTS).into()
    } else {
        err.into()
    }
}

const SELECT_BY_NAME: &str = "SELECT id, name, quantity FROM items WHERE name = ?1 COLLATE NOCASE";

#[async_trait::async_trait]
impl InventoryStore for SqliteInventoryStore {
    async fn add_item(&self, cmd: &AddItem) -> Result<Item, StoreError> {
        cmd.validate()?;

        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query(SELECT_BY_NAME)
            .bind(&cmd.name)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_some() {
            return Err(DomainError::conflict(ITEM_EXISTS).into());
        }

        let result = sqlx::query("INSERT INTO items (name, quantity) VALUES (?1, ?2)")
            .bind(&cmd.name)
            .bind(cmd.quantity)
            .execute(&mut *tx)
            .await
            .map_err(map_insert_error)?;

        tx.commit().await?;

        Ok(Item {
            id: result.last_insert_rowid(),
            name: cmd.name.clone(),
            quantity: cmd.quantity,
        })
    }

    async fn remove_item(&self, name: &str) -> Result<Item, StoreError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(SELECT_BY_NAME)
            .bind(name)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DomainError::not_found(ITEM_NOT_FOUND))?;
        let item = item_from_row(&row)?;

        sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(item.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(item)
    }

    async fn update_quantity(&self, name: &str, delta: i64) -> Result<QuantityChange, StoreError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(SELECT_BY_NAME)
            .bind(name)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DomainError::not_found(ITEM_NOT_FOUND))?;
        let mut item = item_from_row(&row)?;

        let change = apply_delta(&mut item, delta);

        sqlx::query("UPDATE items SET quantity = ?1 WHERE id = ?2")
            .bind(item.quantity)
            .bind(item.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(change)
    }

    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query("SELECT id, name, quantity FROM items ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| item_from_row(row).map_err(StoreError::from))
            .collect()
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("inventory store closed");
    }
}
