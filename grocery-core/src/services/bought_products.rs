//! Bought products service - joins items, lists, clients and products

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::BoughtProducts;
use crate::ports::{
    ClientRepository, GroceryListItemsRepository, GroceryListRepository, ProductRepository,
};

/// Reports which clients bought a product and on which list
pub struct BoughtProductsService {
    items: Arc<dyn GroceryListItemsRepository>,
    lists: Arc<dyn GroceryListRepository>,
    clients: Arc<dyn ClientRepository>,
    products: Arc<dyn ProductRepository>,
}

impl BoughtProductsService {
    pub fn new(
        items: Arc<dyn GroceryListItemsRepository>,
        lists: Arc<dyn GroceryListRepository>,
        clients: Arc<dyn ClientRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            items,
            lists,
            clients,
            products,
        }
    }

    /// Get one record per grocery list item that references `product_id`
    ///
    /// Items whose list, owning client or product cannot be found are
    /// skipped. Output follows the item repository's order. Without a
    /// product id no repository is queried.
    pub fn get(&self, product_id: Option<i32>) -> Result<Vec<BoughtProducts>> {
        let Some(product_id) = product_id else {
            return Ok(Vec::new());
        };

        let mut result = Vec::new();

        for item in self.items.get_all()? {
            if item.product_id != product_id {
                continue;
            }

            let Some(grocery_list) = self.lists.get(item.grocery_list_id)? else {
                tracing::debug!(
                    item_id = item.id,
                    grocery_list_id = item.grocery_list_id,
                    "skipping item: grocery list not found"
                );
                continue;
            };

            let Some(client) = self.clients.get(grocery_list.client_id)? else {
                tracing::debug!(
                    item_id = item.id,
                    client_id = grocery_list.client_id,
                    "skipping item: client not found"
                );
                continue;
            };

            let Some(product) = self.products.get(item.product_id)? else {
                tracing::debug!(
                    item_id = item.id,
                    product_id = item.product_id,
                    "skipping item: product not found"
                );
                continue;
            };

            result.push(BoughtProducts::new(client, grocery_list, product));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::result::Error;
    use crate::domain::{Client, GroceryList, GroceryListItem, Product};
    use crate::ports::{
        MockClientRepository, MockGroceryListItemsRepository, MockGroceryListRepository,
        MockProductRepository,
    };

    fn service(
        items: MockGroceryListItemsRepository,
        lists: MockGroceryListRepository,
        clients: MockClientRepository,
        products: MockProductRepository,
    ) -> BoughtProductsService {
        BoughtProductsService::new(
            Arc::new(items),
            Arc::new(lists),
            Arc::new(clients),
            Arc::new(products),
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn scenario_lists() -> Vec<GroceryList> {
        vec![
            GroceryList::new(1, "List 1", date(2024, 12, 14), "#FF6A00", 1),
            GroceryList::new(2, "List 2", date(2024, 12, 7), "#626262", 2),
        ]
    }

    fn scenario_clients() -> Vec<Client> {
        vec![
            Client::new(1, "user1", "user1@example.com", "password123"),
            Client::new(2, "user2", "user2@example.com", "password123"),
        ]
    }

    fn scenario_products() -> Vec<Product> {
        vec![
            Product::new(1, "Product 1", Decimal::from(100)),
            Product::new(2, "Product 2", Decimal::from(100)),
        ]
    }

    /// Mocks that answer lookups from the given vectors
    fn lookup_mocks(
        lists: Vec<GroceryList>,
        clients: Vec<Client>,
        products: Vec<Product>,
    ) -> (MockGroceryListRepository, MockClientRepository, MockProductRepository) {
        let mut list_repo = MockGroceryListRepository::new();
        list_repo
            .expect_get()
            .returning(move |id| Ok(lists.iter().find(|l| l.model.id == id).cloned()));

        let mut client_repo = MockClientRepository::new();
        client_repo
            .expect_get()
            .returning(move |id| Ok(clients.iter().find(|c| c.model.id == id).cloned()));

        let mut product_repo = MockProductRepository::new();
        product_repo
            .expect_get()
            .returning(move |id| Ok(products.iter().find(|p| p.model.id == id).cloned()));

        (list_repo, client_repo, product_repo)
    }

    fn items_mock(items: Vec<GroceryListItem>) -> MockGroceryListItemsRepository {
        let mut repo = MockGroceryListItemsRepository::new();
        repo.expect_get_all().returning(move || Ok(items.clone()));
        repo
    }

    #[test]
    fn test_none_product_id_returns_empty_without_repository_calls() {
        let mut items = MockGroceryListItemsRepository::new();
        items.expect_get_all().times(0);
        let mut lists = MockGroceryListRepository::new();
        lists.expect_get().times(0);
        let mut clients = MockClientRepository::new();
        clients.expect_get().times(0);
        let mut products = MockProductRepository::new();
        products.expect_get().times(0);

        let result = service(items, lists, clients, products).get(None).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_no_items_returns_empty() {
        let items = items_mock(Vec::new());
        let (lists, clients, products) = lookup_mocks(Vec::new(), Vec::new(), Vec::new());

        let result = service(items, lists, clients, products).get(Some(999)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_returns_one_record_per_matching_item() {
        let items = items_mock(vec![
            GroceryListItem::new(1, 1, 1, 2),
            GroceryListItem::new(2, 2, 1, 3),
        ]);
        let (lists, clients, products) =
            lookup_mocks(scenario_lists(), scenario_clients(), scenario_products());

        let result = service(items, lists, clients, products).get(Some(1)).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].client.model.name, "user1");
        assert_eq!(result[0].grocery_list.model.name, "List 1");
        assert_eq!(result[0].product.model.name, "Product 1");
        assert_eq!(result[1].client.model.name, "user2");
        assert_eq!(result[1].grocery_list.model.name, "List 2");
    }

    #[test]
    fn test_unmatched_product_id_returns_empty() {
        let items = items_mock(vec![
            GroceryListItem::new(1, 1, 1, 2),
            GroceryListItem::new(2, 2, 1, 3),
        ]);
        let (lists, clients, products) =
            lookup_mocks(scenario_lists(), scenario_clients(), scenario_products());

        let result = service(items, lists, clients, products).get(Some(999)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_unresolvable_items_are_skipped() {
        let items = items_mock(vec![
            // list 9 does not exist
            GroceryListItem::new(1, 9, 1, 1),
            // list 3 belongs to missing client 42
            GroceryListItem::new(2, 3, 1, 1),
            // resolves
            GroceryListItem::new(3, 2, 1, 4),
            // other product
            GroceryListItem::new(4, 1, 2, 1),
        ]);
        let mut lists = scenario_lists();
        lists.push(GroceryList::new(3, "Orphan", date(2024, 11, 1), "#000000", 42));
        let (lists, clients, products) =
            lookup_mocks(lists, scenario_clients(), scenario_products());

        let result = service(items, lists, clients, products).get(Some(1)).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].grocery_list.model.id, 2);
        assert_eq!(result[0].client.model.name, "user2");
    }

    #[test]
    fn test_missing_product_skips_item() {
        let items = items_mock(vec![GroceryListItem::new(1, 1, 7, 1)]);
        let (lists, clients, products) =
            lookup_mocks(scenario_lists(), scenario_clients(), scenario_products());

        let result = service(items, lists, clients, products).get(Some(7)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_lookups_use_item_references() {
        let items = items_mock(vec![GroceryListItem::new(5, 2, 1, 1)]);

        let mut lists = MockGroceryListRepository::new();
        lists
            .expect_get()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(Some(scenario_lists()[1].clone())));
        let mut clients = MockClientRepository::new();
        clients
            .expect_get()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(Some(scenario_clients()[1].clone())));
        let mut products = MockProductRepository::new();
        products
            .expect_get()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(scenario_products()[0].clone())));

        let result = service(items, lists, clients, products).get(Some(1)).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_repository_errors_propagate() {
        let mut items = MockGroceryListItemsRepository::new();
        items
            .expect_get_all()
            .returning(|| Err(Error::database("connection closed")));
        let (lists, clients, products) = lookup_mocks(Vec::new(), Vec::new(), Vec::new());

        let err = service(items, lists, clients, products).get(Some(1)).unwrap_err();
        assert!(matches!(err, Error::Database(_)));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let items = items_mock(vec![
            GroceryListItem::new(1, 1, 1, 2),
            GroceryListItem::new(2, 2, 1, 3),
        ]);
        let (lists, clients, products) =
            lookup_mocks(scenario_lists(), scenario_clients(), scenario_products());
        let service = service(items, lists, clients, products);

        let first = service.get(Some(1)).unwrap();
        let second = service.get(Some(1)).unwrap();
        assert_eq!(first, second);
    }
}
