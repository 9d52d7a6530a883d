//! Products command - show products

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(out_of_stock: bool, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let products = if out_of_stock {
        ctx.product_service.get_out_of_stock()?
    } else {
        ctx.product_service.get_all()?
    };

    if json {
        return output::json(&products);
    }

    if products.is_empty() {
        println!("No products found");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Name", "Price", "Stock"]);
    for product in &products {
        table.add_row(vec![
            product.model.id.to_string(),
            product.model.name.clone(),
            format!("{:.2}", product.price),
            product.stock.to_string(),
        ]);
    }
    println!("{}", table);

    Ok(())
}
