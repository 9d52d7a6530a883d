//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod auth;
mod bought_products;
mod client;
mod demo;
mod grocery_list;
mod grocery_list_items;
pub mod migration;
pub mod password;
mod product;
mod status;

pub use auth::AuthService;
pub use bought_products::BoughtProductsService;
pub use client::ClientService;
pub use demo::DemoService;
pub use grocery_list::GroceryListService;
pub use grocery_list_items::GroceryListItemsService;
pub use migration::{MigrationResult, MigrationService};
pub use password::{hash_password, verify_password};
pub use product::ProductService;
pub use status::{StatusService, StatusSummary};
