//! Lists command - show grocery lists

use anyhow::Result;

use super::get_context;
use crate::output;

pub fn run(client_id: Option<i32>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let lists = match client_id {
        Some(id) => ctx.grocery_list_service.get_all_for_client(id)?,
        None => ctx.grocery_list_service.get_all()?,
    };

    if json {
        return output::json(&lists);
    }

    if lists.is_empty() {
        println!("No grocery lists found");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["ID", "Name", "Date", "Color", "Items", "Client"]);
    for list in &lists {
        let items = ctx
            .grocery_list_items_service
            .get_all_on_grocery_list_id(list.model.id)?;
        let owner = ctx
            .client_service
            .get(list.client_id)?
            .map(|c| c.model.name)
            .unwrap_or_else(|| format!("#{} (missing)", list.client_id));
        table.add_row(vec![
            list.model.id.to_string(),
            list.model.name.clone(),
            list.date.to_string(),
            list.color.clone(),
            items.len().to_string(),
            owner,
        ]);
    }
    println!("{}", table);

    Ok(())
}
