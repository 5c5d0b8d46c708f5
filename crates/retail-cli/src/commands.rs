//! Subcommand entry points.

use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Table};

use retail_cli::pipeline;
use retail_cli::types::PipelineResult;

use crate::cli::{CheckArgs, RunArgs};
use crate::summary::apply_table_style;

pub fn run_pipeline(args: &RunArgs) -> Result<PipelineResult> {
    pipeline::execute(&args.data_root, args.output_dir.as_deref(), args.dry_run)
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    let raw = pipeline::load(&args.data_root)?;
    let mut table = Table::new();
    table.set_header(vec!["Table", "Rows"]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (name, rows) in [
        ("customers", raw.customers.len()),
        ("products", raw.products.len()),
        ("transactions", raw.transactions.len()),
    ] {
        table.add_row(vec![Cell::new(name), Cell::new(rows)]);
    }
    println!("{table}");
    Ok(())
}
