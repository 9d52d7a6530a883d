//! Bought command - who bought a product, and on which list

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(product_id: Option<i32>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let bought = ctx.bought_products_service.get(product_id)?;

    if json {
        return output::json(&bought);
    }

    if bought.is_empty() {
        println!("No purchases found");
        return Ok(());
    }

    println!("{}", format!("Bought: {}", bought[0].product.model.name).bold());

    let mut table = output::create_table();
    table.set_header(vec!["Client", "Email", "Grocery list", "Date"]);
    for row in &bought {
        table.add_row(vec![
            row.client.model.name.clone(),
            row.client.email_address.clone(),
            row.grocery_list.model.name.clone(),
            row.grocery_list.date.to_string(),
        ]);
    }
    println!("{}", table);

    Ok(())
}
