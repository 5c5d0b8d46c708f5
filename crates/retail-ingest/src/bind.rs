//! Column binding from raw CSV tables into typed raw records.
//!
//! Binding is by case-insensitive header name. A field binds to `None` when
//! its column is absent from the file or the cell is empty; the cell text is
//! otherwise carried unchanged.

use retail_model::{RawCustomer, RawProduct, RawTransaction};
use tracing::debug;

use crate::csv_table::CsvTable;

struct ColumnBinder<'a> {
    table: &'a CsvTable,
}

impl<'a> ColumnBinder<'a> {
    fn new(table: &'a CsvTable) -> Self {
        Self { table }
    }

    fn field(&self, row: &[String], name: &str) -> Option<String> {
        let idx = self.table.column_index(name)?;
        let cell = row.get(idx)?;
        if cell.is_empty() {
            None
        } else {
            Some(cell.clone())
        }
    }
}

/// Binds a raw table to customer records.
pub fn bind_customers(table: &CsvTable) -> Vec<RawCustomer> {
    let binder = ColumnBinder::new(table);
    let rows = table
        .rows
        .iter()
        .map(|row| RawCustomer {
            customer_id: binder.field(row, "customer_id"),
            name: binder.field(row, "name"),
            email: binder.field(row, "email"),
            registration_date: binder.field(row, "registration_date"),
            country: binder.field(row, "country"),
            age: binder.field(row, "age"),
        })
        .collect::<Vec<_>>();
    debug!(rows = rows.len(), "bound customer table");
    rows
}

/// Binds a raw table to product records.
pub fn bind_products(table: &CsvTable) -> Vec<RawProduct> {
    let binder = ColumnBinder::new(table);
    let rows = table
        .rows
        .iter()
        .map(|row| RawProduct {
            product_id: binder.field(row, "product_id"),
            product_name: binder.field(row, "product_name"),
            category: binder.field(row, "category"),
            price: binder.field(row, "price"),
            stock: binder.field(row, "stock"),
        })
        .collect::<Vec<_>>();
    debug!(rows = rows.len(), "bound product table");
    rows
}

/// Binds a raw table to transaction records.
pub fn bind_transactions(table: &CsvTable) -> Vec<RawTransaction> {
    let binder = ColumnBinder::new(table);
    let rows = table
        .rows
        .iter()
        .map(|row| RawTransaction {
            transaction_id: binder.field(row, "transaction_id"),
            customer_id: binder.field(row, "customer_id"),
            product_id: binder.field(row, "product_id"),
            quantity: binder.field(row, "quantity"),
            transaction_date: binder.field(row, "transaction_date"),
            payment_method: binder.field(row, "payment_method"),
        })
        .collect::<Vec<_>>();
    debug!(rows = rows.len(), "bound transaction table");
    rows
}
