//! Grocery list domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::model::{Entity, Model};

/// A grocery list owned by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryList {
    #[serde(flatten)]
    pub model: Model,
    pub date: NaiveDate,
    /// Display colour as `#RRGGBB`
    pub color: String,
    pub client_id: i32,
}

impl GroceryList {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        date: NaiveDate,
        color: impl Into<String>,
        client_id: i32,
    ) -> Self {
        Self {
            model: Model::new(id, name),
            date,
            color: color.into(),
            client_id,
        }
    }

    /// Validate list data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.model.name.trim().is_empty() {
            return Err("grocery list name cannot be empty");
        }
        if !is_hex_color(&self.color) {
            return Err("color must be formatted as #RRGGBB");
        }
        Ok(())
    }
}

impl Entity for GroceryList {
    fn model(&self) -> &Model {
        &self.model
    }
}

fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
