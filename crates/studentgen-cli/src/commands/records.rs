//! The `studentgen records` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::Context;

pub async fn execute(ctx: &Context, limit: Option<usize>) -> Result<()> {
    let config = ctx.load_config()?;
    let storage = ctx.open_store(&config).await?;
    let records = storage.list_students().await?;

    if records.is_empty() {
        println!("No records found in the database.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "ID",
        "Name",
        "Age",
        "Marks",
        "Department",
        "Hobbies",
        "Sport",
    ]);

    let shown = limit.unwrap_or(records.len()).min(records.len());
    for record in records.iter().take(shown) {
        table.add_row(vec![
            Cell::new(record.id),
            Cell::new(&record.name),
            Cell::new(record.age),
            Cell::new(record.marks),
            Cell::new(&record.department),
            Cell::new(&record.hobbies),
            Cell::new(&record.sport),
        ]);
    }

    println!("Student Records");
    println!("{table}");
    if shown < records.len() {
        println!("Showing {shown} of {} records.", records.len());
    }

    Ok(())
}
