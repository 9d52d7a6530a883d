//! Best sellers command - products ranked by amount on grocery lists

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(top: usize, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let report = ctx.grocery_list_items_service.get_best_selling_products(top)?;

    if json {
        return output::json(&report);
    }

    if report.is_empty() {
        println!("No products sold yet");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["#", "Product", "Sold", "Stock"]);
    for row in &report {
        table.add_row(vec![
            row.ranking.to_string(),
            row.name.clone(),
            row.nr_of_sells.to_string(),
            row.stock.to_string(),
        ]);
    }
    println!("{}", table);

    Ok(())
}
