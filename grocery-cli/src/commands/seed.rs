//! Seed command - copy the demo data set into the database

use anyhow::{Context, Result};
use colored::Colorize;
use grocery_core::adapters::duckdb::DuckDbRepository;
use grocery_core::adapters::memory::MemoryStore;
use grocery_core::DB_FILENAME;

use super::get_grocery_dir;

pub fn run() -> Result<()> {
    let grocery_dir = get_grocery_dir()?;
    std::fs::create_dir_all(&grocery_dir)?;

    let repository = DuckDbRepository::new(&grocery_dir.join(DB_FILENAME))?;
    repository.ensure_schema()?;

    let demo = MemoryStore::demo();
    repository
        .seed(&demo)
        .context("Failed to seed the database")?;

    println!("{}", "Database seeded".green());
    if let Some(path) = repository.db_path() {
        println!("Database: {}", path.display());
    }
    println!(
        "Added {} clients, {} products, {} grocery lists and {} items.",
        demo.clients().len(),
        demo.products().len(),
        demo.grocery_lists().len(),
        demo.grocery_list_items().len()
    );
    Ok(())
}
