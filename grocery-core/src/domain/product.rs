//! Product domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::{Entity, Model};

/// Decimal places a stored price can hold
pub const PRICE_SCALE: u32 = 2;

/// A product that can be put on a grocery list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub model: Model,
    pub price: Decimal,
    /// Units on hand
    #[serde(default)]
    pub stock: i32,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            model: Model::new(id, name),
            price,
            stock: 0,
        }
    }

    pub fn with_stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Validate product data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.model.name.trim().is_empty() {
            return Err("product name cannot be empty");
        }
        if self.price < Decimal::ZERO {
            return Err("price cannot be negative");
        }
        if self.price.normalize().scale() > PRICE_SCALE {
            return Err("price cannot have more than two decimal places");
        }
        if self.stock < 0 {
            return Err("stock cannot be negative");
        }
        Ok(())
    }
}

impl Entity for Product {
    fn model(&self) -> &Model {
        &self.model
    }
}
