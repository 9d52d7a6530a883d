//! CLI command implementations

pub mod auth;
pub mod best_sellers;
pub mod bought;
pub mod demo;
pub mod lists;
pub mod products;
pub mod seed;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use grocery_core::GroceryContext;

/// Environment variable pointing at the grocery directory
const GROCERY_DIR_ENV: &str = "GROCERY_DIR";

/// Get the grocery directory from environment or default
pub fn get_grocery_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(GROCERY_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".grocery"))
        .context("Could not find home directory; set GROCERY_DIR")
}

/// Get or create grocery context
pub fn get_context() -> Result<GroceryContext> {
    let grocery_dir = get_grocery_dir()?;

    std::fs::create_dir_all(&grocery_dir)
        .with_context(|| format!("Failed to create grocery directory: {:?}", grocery_dir))?;

    tracing::debug!(dir = %grocery_dir.display(), "opening grocery context");
    GroceryContext::new(&grocery_dir).context("Failed to initialize grocery context")
}
