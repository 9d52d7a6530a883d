//! Derived report records

use serde::Serialize;

use super::{Client, GroceryList, Product};

/// A client that recorded buying a product through one of their lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoughtProducts {
    pub client: Client,
    pub grocery_list: GroceryList,
    pub product: Product,
}

impl BoughtProducts {
    pub fn new(client: Client, grocery_list: GroceryList, product: Product) -> Self {
        Self {
            client,
            grocery_list,
            product,
        }
    }
}

/// One row of the best-selling products report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestSellingProduct {
    pub product_id: i32,
    pub name: String,
    pub stock: i32,
    /// Total amount across all grocery list items
    pub nr_of_sells: i64,
    /// 1-based position in the report
    pub ranking: usize,
}
