//! In-memory repository implementation
//!
//! Keeps every entity in a `Vec` in insertion order. Used for demo mode and
//! as a lightweight fake in tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::result::Result;
use crate::domain::{Client, GroceryList, GroceryListItem, Product, Role};
use crate::ports::{
    ClientRepository, GroceryListItemsRepository, GroceryListRepository, ProductRepository,
};

/// Vec-backed store implementing all repository ports
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    clients: Vec<Client>,
    grocery_lists: Vec<GroceryList>,
    grocery_list_items: Vec<GroceryListItem>,
    products: Vec<Product>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clients(mut self, clients: Vec<Client>) -> Self {
        self.clients = clients;
        self
    }

    pub fn with_grocery_lists(mut self, grocery_lists: Vec<GroceryList>) -> Self {
        self.grocery_lists = grocery_lists;
        self
    }

    pub fn with_grocery_list_items(mut self, items: Vec<GroceryListItem>) -> Self {
        self.grocery_list_items = items;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn grocery_lists(&self) -> &[GroceryList] {
        &self.grocery_lists
    }

    pub fn grocery_list_items(&self) -> &[GroceryListItem] {
        &self.grocery_list_items
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Sample data set used by demo mode
    ///
    /// Client passwords are the lowercase user names (`user1` .. `user3`).
    pub fn demo() -> Self {
        Self::new()
            .with_clients(demo_clients())
            .with_grocery_lists(demo_grocery_lists())
            .with_grocery_list_items(demo_grocery_list_items())
            .with_products(demo_products())
    }
}

impl ClientRepository for MemoryStore {
    fn get(&self, id: i32) -> Result<Option<Client>> {
        Ok(self.clients.iter().find(|c| c.model.id == id).cloned())
    }

    fn get_all(&self) -> Result<Vec<Client>> {
        Ok(self.clients.clone())
    }
}

impl GroceryListRepository for MemoryStore {
    fn get(&self, id: i32) -> Result<Option<GroceryList>> {
        Ok(self.grocery_lists.iter().find(|l| l.model.id == id).cloned())
    }

    fn get_all(&self) -> Result<Vec<GroceryList>> {
        Ok(self.grocery_lists.clone())
    }
}

impl GroceryListItemsRepository for MemoryStore {
    fn get(&self, id: i32) -> Result<Option<GroceryListItem>> {
        Ok(self.grocery_list_items.iter().find(|i| i.id == id).cloned())
    }

    fn get_all(&self) -> Result<Vec<GroceryListItem>> {
        Ok(self.grocery_list_items.clone())
    }
}

impl ProductRepository for MemoryStore {
    fn get(&self, id: i32) -> Result<Option<Product>> {
        Ok(self.products.iter().find(|p| p.model.id == id).cloned())
    }

    fn get_all(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

fn demo_clients() -> Vec<Client> {
    vec![
        Client::new(
            1,
            "M.J. Curie",
            "user1@mail.com",
            "IunRhDKa+fWo8+4/Qfj7Pg==.kDxZnUQHCZun6gLIE6d9oeULLRIuRmxmH2QKJv2IM08=",
        ),
        Client::new(
            2,
            "H.H. Hermans",
            "user2@mail.com",
            "E0Orp77GwIR1HvMGSu0uTQ==.EqI0bYgxtAOinBw+jxNRjJrMViFhtEA7naN+AgrD2f0=",
        ),
        Client::with_role(
            3,
            "A.J. Kwak",
            "user3@mail.com",
            "sxnIcZdYt8wC8MYWcQVQjQ==.FKd5Z/jwxPv3a63lX+uvQ0+P7EuNYZybvkmdhbnkIHA=",
            Role::Admin,
        ),
    ]
}

fn demo_grocery_lists() -> Vec<GroceryList> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        GroceryList::new(1, "Boodschappen familieweekend", date(2024, 12, 14), "#FF6A00", 1),
        GroceryList::new(2, "Kerstboodschappen", date(2024, 12, 7), "#626262", 1),
        GroceryList::new(3, "Weekend boodschappen", date(2024, 11, 30), "#003300", 1),
        GroceryList::new(4, "Gezellige avond", date(2024, 11, 26), "#F9A825", 2),
        GroceryList::new(5, "Weekboodschappen", date(2024, 11, 23), "#1E88E5", 3),
    ]
}

fn demo_grocery_list_items() -> Vec<GroceryListItem> {
    vec![
        GroceryListItem::new(1, 1, 1, 3),
        GroceryListItem::new(2, 1, 2, 1),
        GroceryListItem::new(3, 1, 3, 4),
        GroceryListItem::new(4, 2, 1, 2),
        GroceryListItem::new(5, 2, 2, 5),
        GroceryListItem::new(6, 3, 4, 1),
        GroceryListItem::new(7, 4, 1, 1),
        GroceryListItem::new(8, 4, 3, 2),
        GroceryListItem::new(9, 5, 1, 6),
        GroceryListItem::new(10, 5, 4, 2),
    ]
}

fn demo_products() -> Vec<Product> {
    vec![
        Product::new(1, "Melk", Decimal::new(95, 2)).with_stock(300),
        Product::new(2, "Kaas", Decimal::new(798, 2)).with_stock(100),
        Product::new(3, "Brood", Decimal::new(219, 2)).with_stock(400),
        Product::new(4, "Cornflakes", Decimal::new(349, 2)).with_stock(0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let store = MemoryStore::demo();
        let client = ClientRepository::get(&store, 3).unwrap().unwrap();
        assert_eq!(client.model.name, "A.J. Kwak");
        assert!(ClientRepository::get(&store, 99).unwrap().is_none());
        assert!(ProductRepository::get(&store, 4).unwrap().is_some());
    }

    #[test]
    fn test_get_all_preserves_insertion_order() {
        let store = MemoryStore::new().with_grocery_list_items(vec![
            GroceryListItem::new(9, 1, 1, 1),
            GroceryListItem::new(2, 1, 1, 1),
            GroceryListItem::new(5, 1, 1, 1),
        ]);
        let ids: Vec<i32> = GroceryListItemsRepository::get_all(&store)
            .unwrap()
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn test_demo_data_is_valid() {
        let store = MemoryStore::demo();
        assert!(store.grocery_lists().iter().all(|l| l.validate().is_ok()));
        assert!(store.grocery_list_items().iter().all(|i| i.validate().is_ok()));
        assert!(store.products().iter().all(|p| p.validate().is_ok()));
        for list in store.grocery_lists() {
            assert!(store.clients().iter().any(|c| c.model.id == list.client_id));
        }
    }
}
