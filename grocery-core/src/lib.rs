//! Grocery Core - Business logic for grocery list management
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Client, GroceryList, Product, etc.)
//! - **ports**: Repository traits the services depend on
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete storage (DuckDB, in-memory)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod migrations;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::duckdb::DuckDbRepository;
use adapters::memory::MemoryStore;
use config::Config;
use ports::{
    ClientRepository, GroceryListItemsRepository, GroceryListRepository, ProductRepository,
};
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{
    BestSellingProduct, BoughtProducts, Client, Entity, GroceryList, GroceryListItem, Model,
    Product, Role,
};

/// Database file name inside the grocery directory
pub const DB_FILENAME: &str = "grocery.duckdb";

/// Main context for grocery operations
///
/// This is the primary entry point for all business logic. It holds the
/// configuration and every service, wired to one storage backend.
pub struct GroceryContext {
    pub config: Config,
    pub auth_service: AuthService,
    pub bought_products_service: BoughtProductsService,
    pub client_service: ClientService,
    pub grocery_list_service: GroceryListService,
    pub grocery_list_items_service: GroceryListItemsService,
    pub product_service: ProductService,
    pub status_service: StatusService,
}

impl GroceryContext {
    /// Create a context for a grocery directory
    ///
    /// Demo mode serves the built-in sample data; otherwise the DuckDB file
    /// in the directory is opened and migrated.
    pub fn new(grocery_dir: &Path) -> Result<Self> {
        let config = Config::load(grocery_dir)?;

        if config.demo_mode {
            return Ok(Self::from_store(config, "memory", Arc::new(MemoryStore::demo())));
        }

        let repository = Arc::new(DuckDbRepository::new(&grocery_dir.join(DB_FILENAME))?);
        repository.ensure_schema()?;

        Ok(Self::from_store(config, "duckdb", repository))
    }

    /// Wire every service to one store implementing all repository ports
    pub fn from_store<S>(config: Config, backend: &'static str, store: Arc<S>) -> Self
    where
        S: ClientRepository
            + GroceryListRepository
            + GroceryListItemsRepository
            + ProductRepository
            + 'static,
    {
        let clients: Arc<dyn ClientRepository> = store.clone();
        let lists: Arc<dyn GroceryListRepository> = store.clone();
        let items: Arc<dyn GroceryListItemsRepository> = store.clone();
        let products: Arc<dyn ProductRepository> = store;

        Self {
            config,
            auth_service: AuthService::new(Arc::clone(&clients)),
            bought_products_service: BoughtProductsService::new(
                Arc::clone(&items),
                Arc::clone(&lists),
                Arc::clone(&clients),
                Arc::clone(&products),
            ),
            client_service: ClientService::new(Arc::clone(&clients)),
            grocery_list_service: GroceryListService::new(Arc::clone(&lists)),
            grocery_list_items_service: GroceryListItemsService::new(
                Arc::clone(&items),
                Arc::clone(&products),
            ),
            product_service: ProductService::new(Arc::clone(&products)),
            status_service: StatusService::new(backend, clients, lists, items, products),
        }
    }
}
