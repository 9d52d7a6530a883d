//! Status command - show store summary

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let status = ctx.status_service.get_status()?;

    if json {
        return output::json(&status);
    }

    println!("{}", "Grocery Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Backend", &status.backend]);
    table.add_row(vec!["Clients", &status.total_clients.to_string()]);
    table.add_row(vec!["Grocery lists", &status.total_grocery_lists.to_string()]);
    table.add_row(vec!["List items", &status.total_grocery_list_items.to_string()]);
    table.add_row(vec!["Products", &status.total_products.to_string()]);

    println!("{}", table);

    if ctx.config.demo_mode {
        println!();
        output::warning("Demo mode is on. Run 'grocery demo off' to use your own data.");
    }

    Ok(())
}
