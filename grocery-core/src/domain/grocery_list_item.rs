//! Grocery list item domain model

use serde::{Deserialize, Serialize};

/// One product line on a grocery list
///
/// Equality compares every field, so two items built from the same values
/// are interchangeable in collections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroceryListItem {
    pub id: i32,
    pub grocery_list_id: i32,
    pub product_id: i32,
    pub amount: i32,
}

impl GroceryListItem {
    pub fn new(id: i32, grocery_list_id: i32, product_id: i32, amount: i32) -> Self {
        Self {
            id,
            grocery_list_id,
            product_id,
            amount,
        }
    }

    /// Validate item data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.amount <= 0 {
            return Err("amount must be a positive number");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_is_contained() {
        let mut items = Vec::new();
        let item = GroceryListItem::new(-1, 1, 1, 1);
        items.push(item.clone());
        assert!(items.contains(&item));

        for (id, list, product, amount) in [(-1, 2, 3, 4), (-1, 3, 4, 5)] {
            let item = GroceryListItem::new(id, list, product, amount);
            items.push(item.clone());
            assert!(items.contains(&GroceryListItem::new(id, list, product, amount)));
        }
    }

    #[test]
    fn test_removed_item_is_not_contained() {
        let mut items = vec![GroceryListItem::new(-1, 1, 1, 1)];
        let item = GroceryListItem::new(-1, 1, 1, 1);
        items.retain(|i| i != &item);
        assert!(!items.contains(&item));
    }

    #[test]
    fn test_amount_validation() {
        assert!(GroceryListItem::new(1, 1, 1, 3).validate().is_ok());
        assert!(GroceryListItem::new(1, 1, 1, 0).validate().is_err());
        assert!(GroceryListItem::new(1, 1, 1, -2).validate().is_err());
    }
}
