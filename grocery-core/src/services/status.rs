//! Status service - store summaries

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::Result;
use crate::ports::{
    ClientRepository, GroceryListItemsRepository, GroceryListRepository, ProductRepository,
};

/// Status service for store summaries
pub struct StatusService {
    backend: &'static str,
    clients: Arc<dyn ClientRepository>,
    lists: Arc<dyn GroceryListRepository>,
    items: Arc<dyn GroceryListItemsRepository>,
    products: Arc<dyn ProductRepository>,
}

impl StatusService {
    pub fn new(
        backend: &'static str,
        clients: Arc<dyn ClientRepository>,
        lists: Arc<dyn GroceryListRepository>,
        items: Arc<dyn GroceryListItemsRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            backend,
            clients,
            lists,
            items,
            products,
        }
    }

    /// Get overall status summary
    pub fn get_status(&self) -> Result<StatusSummary> {
        Ok(StatusSummary {
            backend: self.backend.to_string(),
            total_clients: self.clients.get_all()?.len(),
            total_grocery_lists: self.lists.get_all()?.len(),
            total_grocery_list_items: self.items.get_all()?.len(),
            total_products: self.products.get_all()?.len(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub backend: String,
    pub total_clients: usize,
    pub total_grocery_lists: usize,
    pub total_grocery_list_items: usize,
    pub total_products: usize,
}
