//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod bought_products;
mod client;
mod grocery_list;
mod grocery_list_item;
mod model;
mod product;
pub mod result;

pub use bought_products::{BestSellingProduct, BoughtProducts};
pub use client::{Client, Role};
pub use grocery_list::GroceryList;
pub use grocery_list_item::GroceryListItem;
pub use model::{Entity, Model};
pub use product::Product;
