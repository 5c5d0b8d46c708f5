//! Customer table cleaning.
//!
//! Policy: exact full-row duplicates are dropped (first occurrence kept);
//! country aliases are resolved; the age text is reduced to its first digit
//! run; every row leaves this stage with a non-empty lower-case email. No
//! other row is ever dropped here.

use std::collections::BTreeSet;

use retail_model::{Customer, RawCustomer};
use tracing::debug;

use crate::normalization::numeric::first_digit_run;

/// Resolves known country aliases to their canonical name. Unmapped values
/// pass through unchanged.
fn resolve_country_alias(country: &str) -> &str {
    match country {
        "USA" | "US" => "United States",
        other => other,
    }
}

/// Composite key over every raw field, for exact-duplicate detection.
fn full_row_key(row: &RawCustomer) -> String {
    [
        row.customer_id.as_deref(),
        row.name.as_deref(),
        row.email.as_deref(),
        row.registration_date.as_deref(),
        row.country.as_deref(),
        row.age.as_deref(),
    ]
    .map(|field| field.unwrap_or(""))
    .join("|")
}

/// Lower-cases an existing email, or synthesizes one from the name and
/// customer id when the source value is missing or blank.
fn normalize_email(row: &RawCustomer) -> String {
    if let Some(email) = row.email.as_deref() {
        let trimmed = email.trim();
        if !trimmed.is_empty() {
            return trimmed.to_lowercase();
        }
    }
    let name = row.name.as_deref().unwrap_or("").trim().to_lowercase();
    let mut tokens = name.split_whitespace();
    let mut local = match (tokens.next(), tokens.next()) {
        (Some(first), Some(second)) => format!("{first}.{second}"),
        (Some(only), None) => only.to_string(),
        _ => "user".to_string(),
    };
    let customer_id = row
        .customer_id
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_lowercase();
    if !customer_id.is_empty() {
        local.push('.');
        local.push_str(&customer_id);
    }
    format!("{local}@example.com")
}

/// Cleans the raw customer table.
pub fn clean_customers(raw: &[RawCustomer]) -> Vec<Customer> {
    let mut seen = BTreeSet::new();
    let mut cleaned = Vec::with_capacity(raw.len());
    let mut duplicates = 0usize;
    for row in raw {
        if !seen.insert(full_row_key(row)) {
            duplicates += 1;
            continue;
        }
        let country = row
            .country
            .as_deref()
            .map(|value| resolve_country_alias(value.trim()).to_string());
        cleaned.push(Customer {
            customer_id: row.customer_id.clone().unwrap_or_default(),
            name: row.name.clone(),
            email: normalize_email(row),
            registration_date: row.registration_date.clone(),
            country,
            age: row.age.as_deref().and_then(first_digit_run),
        });
    }
    if duplicates > 0 {
        debug!(duplicates, "dropped exact duplicate customer rows");
    }
    cleaned
}
