//! The denormalized fact view.
//!
//! A fact row is a cleaned transaction enriched with the joined product's
//! price and category and the joined customer's country. The product join is
//! a left join: an unresolved product reference leaves price and category
//! missing rather than dropping the row. The customer join is total because
//! the referential filter upstream only lets valid references through.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use retail_model::{Category, Customer, PaymentMethod, Product, Transaction};
use tracing::debug;

/// One row of the fact view. Built fresh on every analytics run and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FactRow {
    pub transaction_id: Option<String>,
    pub customer_id: String,
    pub product_id: Option<String>,
    pub quantity: i64,
    pub transaction_date: Option<NaiveDate>,
    pub payment_method: PaymentMethod,
    /// Joined product price; None for orphan product references.
    pub price: Option<f64>,
    /// Joined product category; None for orphan product references.
    pub category: Option<Category>,
    /// Joined customer country.
    pub country: Option<String>,
    /// `quantity * price`; None when the price is missing.
    pub revenue: Option<f64>,
}

/// Joins the three cleaned tables into the fact view.
///
/// When an identifier repeats in the product or customer table, the first
/// occurrence wins; a transaction never joins to more than one row.
pub fn build_fact_view(
    transactions: &[Transaction],
    products: &[Product],
    customers: &[Customer],
) -> Vec<FactRow> {
    let mut product_lookup: BTreeMap<&str, (f64, Category)> = BTreeMap::new();
    for product in products {
        product_lookup
            .entry(product.product_id.as_str())
            .or_insert((product.price, product.category));
    }
    let mut country_lookup: BTreeMap<&str, Option<&str>> = BTreeMap::new();
    for customer in customers {
        country_lookup
            .entry(customer.customer_id.as_str())
            .or_insert(customer.country.as_deref());
    }

    let facts: Vec<FactRow> = transactions
        .iter()
        .map(|transaction| {
            let joined_product = transaction
                .product_id
                .as_deref()
                .and_then(|id| product_lookup.get(id));
            let price = joined_product.map(|(price, _)| *price);
            let category = joined_product.map(|(_, category)| *category);
            let country = country_lookup
                .get(transaction.customer_id.as_str())
                .copied()
                .flatten()
                .map(str::to_string);
            FactRow {
                transaction_id: transaction.transaction_id.clone(),
                customer_id: transaction.customer_id.clone(),
                product_id: transaction.product_id.clone(),
                quantity: transaction.quantity,
                transaction_date: transaction.transaction_date,
                payment_method: transaction.payment_method,
                price,
                category,
                country,
                revenue: price.map(|price| transaction.quantity as f64 * price),
            }
        })
        .collect();
    debug!(rows = facts.len(), "built fact view");
    facts
}
