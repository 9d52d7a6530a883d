//! DuckDB repository implementation

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use anyhow::anyhow;
use chrono::NaiveDate;
use duckdb::{params, Connection, Row};
use rust_decimal::Decimal;

use crate::domain::result::{Error, Result};
use crate::domain::{Client, GroceryList, GroceryListItem, Product, Role};
use crate::ports::{
    ClientRepository, GroceryListItemsRepository, GroceryListRepository, ProductRepository,
};
use crate::services::{MigrationResult, MigrationService};

use super::memory::MemoryStore;

/// Maximum number of retries when database file is locked
const MAX_RETRIES: u32 = 5;

/// Initial retry delay in milliseconds (doubles each retry: 50, 100, 200, 400ms)
const INITIAL_RETRY_DELAY_MS: u64 = 50;

const CLIENT_COLUMNS: &str = "client_id, name, email_address, password, role";
const GROCERY_LIST_COLUMNS: &str =
    "grocery_list_id, name, CAST(list_date AS VARCHAR), color, client_id";
const GROCERY_LIST_ITEM_COLUMNS: &str = "grocery_list_item_id, grocery_list_id, product_id, amount";
const PRODUCT_COLUMNS: &str = "product_id, name, CAST(price AS VARCHAR), stock";

/// Check if an error message indicates a file locking issue that should be retried
fn is_retryable_error(err_msg: &str) -> bool {
    let lower = err_msg.to_lowercase();
    // Windows error messages
    lower.contains("being used by another process")
        || lower.contains("cannot access the file")
        // Unix/macOS error messages
        || lower.contains("resource temporarily unavailable")
        || lower.contains("database is locked")
        || lower.contains("file is already open")
}

/// DuckDB repository implementation
pub struct DuckDbRepository {
    conn: Mutex<Connection>,
    db_path: Option<PathBuf>,
}

impl DuckDbRepository {
    /// Open (or create) a database file
    ///
    /// Retries with exponential backoff while another process holds the
    /// file lock.
    pub fn new(db_path: &Path) -> anyhow::Result<Self> {
        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            match Self::try_open_connection(db_path) {
                Ok(conn) => {
                    return Ok(Self {
                        conn: Mutex::new(conn),
                        db_path: Some(db_path.to_path_buf()),
                    });
                }
                Err(e) => {
                    let err_msg = e.to_string();
                    if is_retryable_error(&err_msg) && attempt < MAX_RETRIES - 1 {
                        let delay =
                            Duration::from_millis(INITIAL_RETRY_DELAY_MS * 2u64.pow(attempt));
                        tracing::warn!(
                            delay_ms = delay.as_millis() as u64,
                            attempt = attempt + 1,
                            max_retries = MAX_RETRIES,
                            error = %err_msg,
                            "database busy, retrying"
                        );
                        thread::sleep(delay);
                        last_error = Some(e);
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error
            .map(Into::into)
            .unwrap_or_else(|| anyhow!("Failed to open database after {} retries", MAX_RETRIES)))
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let config = duckdb::Config::default().enable_autoload_extension(false)?;
        Ok(Self {
            conn: Mutex::new(Connection::open_in_memory_with_flags(config)?),
            db_path: None,
        })
    }

    fn try_open_connection(db_path: &Path) -> duckdb::Result<Connection> {
        // Autoloaded extensions are not needed and may fail code signing checks
        let config = duckdb::Config::default().enable_autoload_extension(false)?;
        Connection::open_with_flags(db_path, config)
    }

    /// Path of the database file, if any
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::LockPoisoned)
    }

    /// Run database migrations using the MigrationService
    pub fn run_migrations(&self) -> anyhow::Result<MigrationResult> {
        let conn = self.conn()?;
        MigrationService::new(&conn).run_pending()
    }

    /// Ensure database schema exists (runs pending migrations)
    pub fn ensure_schema(&self) -> anyhow::Result<()> {
        self.run_migrations()?;
        Ok(())
    }

    // === Writes ===

    pub fn upsert_client(&self, client: &Client) -> Result<()> {
        self.conn()?.execute(
            "INSERT OR REPLACE INTO clients (client_id, name, email_address, password, role)
             VALUES (?, ?, ?, ?, ?)",
            params![
                client.model.id,
                client.model.name,
                client.email_address,
                client.password,
                client.role.as_str()
            ],
        )?;
        Ok(())
    }

    pub fn upsert_grocery_list(&self, list: &GroceryList) -> Result<()> {
        list.validate().map_err(Error::validation)?;
        self.conn()?.execute(
            "INSERT OR REPLACE INTO grocery_lists
                (grocery_list_id, name, list_date, color, client_id)
             VALUES (?, ?, CAST(? AS DATE), ?, ?)",
            params![
                list.model.id,
                list.model.name,
                list.date.format("%Y-%m-%d").to_string(),
                list.color,
                list.client_id
            ],
        )?;
        Ok(())
    }

    pub fn upsert_grocery_list_item(&self, item: &GroceryListItem) -> Result<()> {
        item.validate().map_err(Error::validation)?;
        self.conn()?.execute(
            "INSERT OR REPLACE INTO grocery_list_items
                (grocery_list_item_id, grocery_list_id, product_id, amount)
             VALUES (?, ?, ?, ?)",
            params![item.id, item.grocery_list_id, item.product_id, item.amount],
        )?;
        Ok(())
    }

    pub fn upsert_product(&self, product: &Product) -> Result<()> {
        product.validate().map_err(Error::validation)?;
        self.conn()?.execute(
            "INSERT OR REPLACE INTO products (product_id, name, price, stock)
             VALUES (?, ?, CAST(? AS DECIMAL(12, 2)), ?)",
            params![
                product.model.id,
                product.model.name,
                product.price.to_string(),
                product.stock
            ],
        )?;
        Ok(())
    }

    /// Copy every entity of a memory store into the database
    pub fn seed(&self, store: &MemoryStore) -> Result<()> {
        for client in store.clients() {
            self.upsert_client(client)?;
        }
        for product in store.products() {
            self.upsert_product(product)?;
        }
        for list in store.grocery_lists() {
            self.upsert_grocery_list(list)?;
        }
        for item in store.grocery_list_items() {
            self.upsert_grocery_list_item(item)?;
        }
        Ok(())
    }

    // === Reads ===

    fn query_one<T>(
        &self,
        sql: &str,
        id: i32,
        map_row: fn(&Row<'_>) -> Result<T>,
    ) -> Result<Option<T>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query([id])?;
        let row = rows.next()?;
        row.map(map_row).transpose()
    }

    fn query_all<T>(&self, sql: &str, map_row: fn(&Row<'_>) -> Result<T>) -> Result<Vec<T>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            result.push(map_row(row)?);
        }
        Ok(result)
    }
}

fn row_to_client(row: &Row<'_>) -> Result<Client> {
    let role: String = row.get(4)?;
    Ok(Client::with_role(
        row.get(0)?,
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
        row.get::<_, String>(3)?,
        role.parse::<Role>()?,
    ))
}

fn row_to_grocery_list(row: &Row<'_>) -> Result<GroceryList> {
    let date_str: String = row.get(2)?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|e| Error::database(format!("invalid list date {:?}: {}", date_str, e)))?;
    Ok(GroceryList::new(
        row.get(0)?,
        row.get::<_, String>(1)?,
        date,
        row.get::<_, String>(3)?,
        row.get(4)?,
    ))
}

fn row_to_grocery_list_item(row: &Row<'_>) -> Result<GroceryListItem> {
    Ok(GroceryListItem::new(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
    ))
}

fn row_to_product(row: &Row<'_>) -> Result<Product> {
    let price_str: String = row.get(2)?;
    let price: Decimal = price_str
        .parse()
        .map_err(|e| Error::database(format!("invalid price {:?}: {}", price_str, e)))?;
    Ok(Product::new(row.get(0)?, row.get::<_, String>(1)?, price).with_stock(row.get(3)?))
}

impl ClientRepository for DuckDbRepository {
    fn get(&self, id: i32) -> Result<Option<Client>> {
        self.query_one(
            &format!("SELECT {} FROM clients WHERE client_id = ?", CLIENT_COLUMNS),
            id,
            row_to_client,
        )
    }

    fn get_all(&self) -> Result<Vec<Client>> {
        self.query_all(
            &format!("SELECT {} FROM clients ORDER BY client_id", CLIENT_COLUMNS),
            row_to_client,
        )
    }
}

impl GroceryListRepository for DuckDbRepository {
    fn get(&self, id: i32) -> Result<Option<GroceryList>> {
        self.query_one(
            &format!(
                "SELECT {} FROM grocery_lists WHERE grocery_list_id = ?",
                GROCERY_LIST_COLUMNS
            ),
            id,
            row_to_grocery_list,
        )
    }

    fn get_all(&self) -> Result<Vec<GroceryList>> {
        self.query_all(
            &format!(
                "SELECT {} FROM grocery_lists ORDER BY grocery_list_id",
                GROCERY_LIST_COLUMNS
            ),
            row_to_grocery_list,
        )
    }
}

impl GroceryListItemsRepository for DuckDbRepository {
    fn get(&self, id: i32) -> Result<Option<GroceryListItem>> {
        self.query_one(
            &format!(
                "SELECT {} FROM grocery_list_items WHERE grocery_list_item_id = ?",
                GROCERY_LIST_ITEM_COLUMNS
            ),
            id,
            row_to_grocery_list_item,
        )
    }

    fn get_all(&self) -> Result<Vec<GroceryListItem>> {
        self.query_all(
            &format!(
                "SELECT {} FROM grocery_list_items ORDER BY grocery_list_item_id",
                GROCERY_LIST_ITEM_COLUMNS
            ),
            row_to_grocery_list_item,
        )
    }
}

impl ProductRepository for DuckDbRepository {
    fn get(&self, id: i32) -> Result<Option<Product>> {
        self.query_one(
            &format!("SELECT {} FROM products WHERE product_id = ?", PRODUCT_COLUMNS),
            id,
            row_to_product,
        )
    }

    fn get_all(&self) -> Result<Vec<Product>> {
        self.query_all(
            &format!("SELECT {} FROM products ORDER BY product_id", PRODUCT_COLUMNS),
            row_to_product,
        )
    }
}
