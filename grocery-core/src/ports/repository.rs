//! Repository ports - storage abstraction per entity
//!
//! Each trait is deliberately narrow: a lookup by id and a full listing.
//! Lookups return `Ok(None)` when nothing is stored under the id; `Err` is
//! reserved for backend failures.

use crate::domain::result::Result;
use crate::domain::{Client, GroceryList, GroceryListItem, Product};

/// Client storage
#[cfg_attr(test, mockall::automock)]
pub trait ClientRepository: Send + Sync {
    /// Get client by ID
    fn get(&self, id: i32) -> Result<Option<Client>>;

    /// Get all clients in storage order
    fn get_all(&self) -> Result<Vec<Client>>;
}

/// Grocery list storage
#[cfg_attr(test, mockall::automock)]
pub trait GroceryListRepository: Send + Sync {
    /// Get grocery list by ID
    fn get(&self, id: i32) -> Result<Option<GroceryList>>;

    /// Get all grocery lists in storage order
    fn get_all(&self) -> Result<Vec<GroceryList>>;
}

/// Grocery list item storage
#[cfg_attr(test, mockall::automock)]
pub trait GroceryListItemsRepository: Send + Sync {
    /// Get grocery list item by ID
    fn get(&self, id: i32) -> Result<Option<GroceryListItem>>;

    /// Get all grocery list items in storage order
    fn get_all(&self) -> Result<Vec<GroceryListItem>>;
}

/// Product storage
#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Get product by ID
    fn get(&self, id: i32) -> Result<Option<Product>>;

    /// Get all products in storage order
    fn get_all(&self) -> Result<Vec<Product>>;
}
