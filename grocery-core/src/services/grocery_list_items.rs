//! Grocery list item service - item listings and the best-selling report

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::{BestSellingProduct, GroceryListItem};
use crate::ports::{GroceryListItemsRepository, ProductRepository};

pub struct GroceryListItemsService {
    items: Arc<dyn GroceryListItemsRepository>,
    products: Arc<dyn ProductRepository>,
}

impl GroceryListItemsService {
    pub fn new(
        items: Arc<dyn GroceryListItemsRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self { items, products }
    }

    pub fn get_all(&self) -> Result<Vec<GroceryListItem>> {
        self.items.get_all()
    }

    /// Items on one grocery list, in storage order
    pub fn get_all_on_grocery_list_id(&self, grocery_list_id: i32) -> Result<Vec<GroceryListItem>> {
        Ok(self
            .items
            .get_all()?
            .into_iter()
            .filter(|i| i.grocery_list_id == grocery_list_id)
            .collect())
    }

    /// Rank products by the total amount put on grocery lists
    ///
    /// Ties are broken by product id. Products that no longer exist are left
    /// out of the ranking.
    pub fn get_best_selling_products(&self, top_x: usize) -> Result<Vec<BestSellingProduct>> {
        if top_x == 0 {
            return Ok(Vec::new());
        }

        let mut totals: BTreeMap<i32, i64> = BTreeMap::new();
        for item in self.items.get_all()? {
            *totals.entry(item.product_id).or_default() += i64::from(item.amount);
        }

        let mut ranked: Vec<(i32, i64)> = totals.into_iter().collect();
        // BTreeMap iteration is already id-ascending; stable sort keeps it for ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let mut result = Vec::with_capacity(top_x.min(ranked.len()));
        for (product_id, nr_of_sells) in ranked {
            if result.len() == top_x {
                break;
            }
            let Some(product) = self.products.get(product_id)? else {
                tracing::debug!(product_id, "skipping best seller: product not found");
                continue;
            };
            result.push(BestSellingProduct {
                product_id,
                name: product.model.name,
                stock: product.stock,
                nr_of_sells,
                ranking: result.len() + 1,
            });
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::Product;
    use crate::ports::{MockGroceryListItemsRepository, MockProductRepository};

    fn service(items: Vec<GroceryListItem>, products: Vec<Product>) -> GroceryListItemsService {
        let mut item_repo = MockGroceryListItemsRepository::new();
        item_repo.expect_get_all().returning(move || Ok(items.clone()));
        let mut product_repo = MockProductRepository::new();
        product_repo
            .expect_get()
            .returning(move |id| Ok(products.iter().find(|p| p.model.id == id).cloned()));
        GroceryListItemsService::new(Arc::new(item_repo), Arc::new(product_repo))
    }

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Melk", Decimal::new(95, 2)).with_stock(300),
            Product::new(2, "Kaas", Decimal::new(798, 2)).with_stock(100),
            Product::new(3, "Brood", Decimal::new(219, 2)).with_stock(400),
        ]
    }

    #[test]
    fn test_best_sellers_rank_by_total_amount() {
        let service = service(
            vec![
                GroceryListItem::new(1, 1, 1, 3),
                GroceryListItem::new(2, 1, 2, 1),
                GroceryListItem::new(3, 2, 3, 4),
                GroceryListItem::new(4, 2, 1, 2),
            ],
            products(),
        );

        let report = service.get_best_selling_products(5).unwrap();
        let rows: Vec<(i32, i64, usize)> = report
            .iter()
            .map(|r| (r.product_id, r.nr_of_sells, r.ranking))
            .collect();
        assert_eq!(rows, vec![(1, 5, 1), (3, 4, 2), (2, 1, 3)]);
        assert_eq!(report[0].name, "Melk");
        assert_eq!(report[0].stock, 300);
    }

    #[test]
    fn test_best_sellers_ties_and_truncation() {
        let service = service(
            vec![
                GroceryListItem::new(1, 1, 3, 2),
                GroceryListItem::new(2, 1, 2, 2),
                GroceryListItem::new(3, 1, 1, 1),
            ],
            products(),
        );

        let report = service.get_best_selling_products(2).unwrap();
        let ids: Vec<i32> = report.iter().map(|r| r.product_id).collect();
        assert_eq!(ids, vec![2, 3]);

        assert!(service.get_best_selling_products(0).unwrap().is_empty());
    }

    #[test]
    fn test_best_sellers_skip_missing_products() {
        let service = service(
            vec![
                GroceryListItem::new(1, 1, 99, 10),
                GroceryListItem::new(2, 1, 2, 1),
            ],
            products(),
        );

        let report = service.get_best_selling_products(5).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].product_id, 2);
        assert_eq!(report[0].ranking, 1);
    }

    #[test]
    fn test_items_on_grocery_list() {
        let service = service(
            vec![
                GroceryListItem::new(1, 1, 1, 3),
                GroceryListItem::new(2, 2, 2, 1),
                GroceryListItem::new(3, 1, 3, 4),
            ],
            products(),
        );

        let items = service.get_all_on_grocery_list_id(1).unwrap();
        let ids: Vec<i32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
