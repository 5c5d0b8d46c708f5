//! CSV writers for the cleaned tables and the report tables.
//!
//! Column orders are fixed. Missing values render as empty cells, dates as
//! `YYYY-MM-DD`, and numbers without a trailing `.0` when they are whole.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::Writer;
use tracing::{debug, info};

use retail_analytics::AnalyticsBundle;
use retail_model::{Customer, MonthlyRevenue, Product, RevenueSlice, Transaction};

/// Formats a float without unnecessary fractional digits.
fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn opt_str(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

fn writer_for(path: &Path) -> Result<Writer<std::fs::File>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    Writer::from_path(path).with_context(|| format!("open output {}", path.display()))
}

fn write_customers(path: &Path, customers: &[Customer]) -> Result<()> {
    let mut writer = writer_for(path)?;
    writer.write_record([
        "customer_id",
        "name",
        "email",
        "registration_date",
        "country",
        "age",
    ])?;
    for customer in customers {
        let age = customer.age.map(|age| age.to_string()).unwrap_or_default();
        writer.write_record([
            customer.customer_id.as_str(),
            opt_str(customer.name.as_deref()),
            customer.email.as_str(),
            opt_str(customer.registration_date.as_deref()),
            opt_str(customer.country.as_deref()),
            age.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_products(path: &Path, products: &[Product]) -> Result<()> {
    let mut writer = writer_for(path)?;
    writer.write_record(["product_id", "product_name", "category", "price", "stock"])?;
    for product in products {
        let price = format_numeric(product.price);
        let stock = product.stock.to_string();
        writer.write_record([
            product.product_id.as_str(),
            opt_str(product.product_name.as_deref()),
            product.category.as_str(),
            price.as_str(),
            stock.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_transactions(path: &Path, transactions: &[Transaction]) -> Result<()> {
    let mut writer = writer_for(path)?;
    writer.write_record([
        "transaction_id",
        "customer_id",
        "product_id",
        "quantity",
        "transaction_date",
        "payment_method",
    ])?;
    for transaction in transactions {
        let quantity = transaction.quantity.to_string();
        let date = format_date(transaction.transaction_date);
        writer.write_record([
            opt_str(transaction.transaction_id.as_deref()),
            transaction.customer_id.as_str(),
            opt_str(transaction.product_id.as_deref()),
            quantity.as_str(),
            date.as_str(),
            transaction.payment_method.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_slices(path: &Path, key_column: &str, slices: &[RevenueSlice]) -> Result<()> {
    let mut writer = writer_for(path)?;
    writer.write_record([key_column, "revenue"])?;
    for slice in slices {
        let revenue = format_numeric(slice.revenue);
        writer.write_record([opt_str(slice.key.as_deref()), revenue.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_monthly(path: &Path, rows: &[MonthlyRevenue]) -> Result<()> {
    let mut writer = writer_for(path)?;
    writer.write_record(["month", "revenue"])?;
    for row in rows {
        let month = format_date(row.month);
        let revenue = format_numeric(row.revenue);
        writer.write_record([month.as_str(), revenue.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the three cleaned tables into `cleaned_dir`.
///
/// Returns the written paths in table order.
pub fn write_cleaned_tables(
    cleaned_dir: &Path,
    customers: &[Customer],
    products: &[Product],
    transactions: &[Transaction],
) -> Result<Vec<PathBuf>> {
    let paths = [
        cleaned_dir.join("customers_clean.csv"),
        cleaned_dir.join("products_clean.csv"),
        cleaned_dir.join("transactions_clean.csv"),
    ];
    write_customers(&paths[0], customers)?;
    write_products(&paths[1], products)?;
    write_transactions(&paths[2], transactions)?;
    info!(dir = %cleaned_dir.display(), "wrote cleaned tables");
    Ok(paths.to_vec())
}

/// Writes the five report tables into `output_dir`.
///
/// Returns the written paths in report order.
pub fn write_report_tables(output_dir: &Path, bundle: &AnalyticsBundle) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(5);

    let path = output_dir.join("revenue_by_category.csv");
    write_slices(&path, "category", &bundle.revenue_by_category)?;
    paths.push(path);

    let path = output_dir.join("revenue_by_country.csv");
    write_slices(&path, "country", &bundle.revenue_by_country)?;
    paths.push(path);

    let path = output_dir.join("top_customers.csv");
    write_slices(&path, "customer_id", &bundle.top_customers)?;
    paths.push(path);

    let path = output_dir.join("monthly_revenue.csv");
    write_monthly(&path, &bundle.monthly_revenue)?;
    paths.push(path);

    let path = output_dir.join("payment_share.csv");
    write_slices(&path, "payment_method", &bundle.payment_share)?;
    paths.push(path);

    for path in &paths {
        debug!(path = %path.display(), "wrote report table");
    }
    Ok(paths)
}
