//! Grocery list service

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::GroceryList;
use crate::ports::GroceryListRepository;

pub struct GroceryListService {
    repository: Arc<dyn GroceryListRepository>,
}

impl GroceryListService {
    pub fn new(repository: Arc<dyn GroceryListRepository>) -> Self {
        Self { repository }
    }

    pub fn get(&self, id: i32) -> Result<Option<GroceryList>> {
        self.repository.get(id)
    }

    pub fn get_all(&self) -> Result<Vec<GroceryList>> {
        self.repository.get_all()
    }

    /// Lists owned by one client, in storage order
    pub fn get_all_for_client(&self, client_id: i32) -> Result<Vec<GroceryList>> {
        Ok(self
            .repository
            .get_all()?
            .into_iter()
            .filter(|l| l.client_id == client_id)
            .collect())
    }
}
