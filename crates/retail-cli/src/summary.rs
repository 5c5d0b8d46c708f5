//! Console summary of a pipeline run.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use retail_cli::types::PipelineResult;
use retail_model::{MonthlyRevenue, RevenueSlice};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn revenue_cell(revenue: f64) -> Cell {
    Cell::new(format!("{revenue:.2}"))
}

fn key_cell(key: Option<&str>) -> Cell {
    match key {
        Some(key) => Cell::new(key),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn print_slice_table(title: &str, key_header: &str, slices: &[RevenueSlice]) {
    println!("{title}:");
    let mut table = Table::new();
    table.set_header(vec![header_cell(key_header), header_cell("Revenue")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for slice in slices {
        table.add_row(vec![key_cell(slice.key.as_deref()), revenue_cell(slice.revenue)]);
    }
    println!("{table}");
    println!();
}

fn print_monthly_table(rows: &[MonthlyRevenue]) {
    println!("Monthly revenue:");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Month"), header_cell("Revenue")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in rows {
        let month = row
            .month
            .map(|month| month.format("%Y-%m").to_string());
        table.add_row(vec![
            key_cell(month.as_deref()),
            revenue_cell(row.revenue),
        ]);
    }
    println!("{table}");
    println!();
}

pub fn print_summary(result: &PipelineResult) {
    println!("Data root: {}", result.data_root.display());
    if result.dry_run {
        println!("Dry run: no files written");
    } else {
        println!("Cleaned tables: {}", result.cleaned_dir.display());
        println!("Reports: {}", result.output_dir.display());
    }
    println!();

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Raw"),
        header_cell("Cleaned"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (name, counts) in [
        ("customers", result.customers),
        ("products", result.products),
        ("transactions", result.transactions),
    ] {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(counts.raw),
            Cell::new(counts.cleaned),
        ]);
    }
    println!("{table}");
    println!();

    let kpis = &result.analytics.kpis;
    println!("Total revenue:       {:.2}", kpis.total_revenue);
    match kpis.avg_order_value {
        Some(value) => println!("Average order value: {value:.2}"),
        None => println!("Average order value: n/a"),
    }
    println!();

    print_slice_table(
        "Top customers by revenue",
        "Customer",
        &result.analytics.top_customers,
    );
    print_slice_table(
        "Revenue by category",
        "Category",
        &result.analytics.revenue_by_category,
    );
    print_monthly_table(&result.analytics.monthly_revenue);
    print_slice_table(
        "Payment method share",
        "Payment method",
        &result.analytics.payment_share,
    );
}
