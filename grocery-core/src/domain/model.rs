//! Shared identity for named entities

use serde::{Deserialize, Serialize};

/// Identity fields shared by clients, grocery lists and products
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub id: i32,
    pub name: String,
}

impl Model {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Anything that carries a [`Model`] identity
pub trait Entity {
    fn model(&self) -> &Model;

    fn id(&self) -> i32 {
        self.model().id
    }

    fn name(&self) -> &str {
        &self.model().name
    }
}

impl Entity for Model {
    fn model(&self) -> &Model {
        self
    }
}
