//! Transaction table cleaning and the referential filter.
//!
//! Policy: duplicate identifiers (or duplicate whole rows when the file has
//! no identifier column) are dropped first; quantity is defaulted and raised
//! to at least 1; dates after the cutoff are clamped down to it; payment
//! methods collapse to the canonical set; finally, rows referencing an
//! unknown customer are silently excluded. The exclusion is filtering
//! policy, not an error.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use retail_model::{PaymentMethod, RawTransaction, Transaction};
use tracing::debug;

use crate::normalization::datetime::parse_date;
use crate::normalization::numeric::parse_f64;

/// Latest admissible transaction date; later dates are clamped to this.
pub const TRANSACTION_DATE_CUTOFF: NaiveDate = match NaiveDate::from_ymd_opt(2024, 12, 31) {
    Some(date) => date,
    None => unreachable!(),
};

/// Composite key over every raw field, for the no-identifier dedup fallback.
fn full_row_key(row: &RawTransaction) -> String {
    [
        row.transaction_id.as_deref(),
        row.customer_id.as_deref(),
        row.product_id.as_deref(),
        row.quantity.as_deref(),
        row.transaction_date.as_deref(),
        row.payment_method.as_deref(),
    ]
    .map(|field| field.unwrap_or(""))
    .join("|")
}

fn normalize_quantity(raw: Option<&str>) -> i64 {
    let parsed = raw.and_then(parse_f64).unwrap_or(1.0);
    (parsed as i64).max(1)
}

fn normalize_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(parse_date)
        .map(|date| date.min(TRANSACTION_DATE_CUTOFF))
}

/// Cleans the raw transaction table against the set of valid customer ids
/// taken from the cleaned customer table.
pub fn clean_transactions(
    raw: &[RawTransaction],
    valid_customers: &BTreeSet<String>,
) -> Vec<Transaction> {
    // The identifier column counts as present when any row carries a value;
    // rows without one then share a single dedup key.
    let has_ids = raw.iter().any(|row| row.transaction_id.is_some());

    let mut seen = BTreeSet::new();
    let mut cleaned = Vec::with_capacity(raw.len());
    let mut duplicates = 0usize;
    let mut orphaned = 0usize;
    for row in raw {
        let key = if has_ids {
            row.transaction_id.clone().unwrap_or_default()
        } else {
            full_row_key(row)
        };
        if !seen.insert(key) {
            duplicates += 1;
            continue;
        }

        let quantity = normalize_quantity(row.quantity.as_deref());
        let transaction_date = normalize_date(row.transaction_date.as_deref());
        let payment_method = PaymentMethod::from_raw(row.payment_method.as_deref());

        let Some(customer_id) = row.customer_id.clone() else {
            orphaned += 1;
            continue;
        };
        if !valid_customers.contains(&customer_id) {
            orphaned += 1;
            continue;
        }

        cleaned.push(Transaction {
            transaction_id: row.transaction_id.clone(),
            customer_id,
            product_id: row.product_id.clone(),
            quantity,
            transaction_date,
            payment_method,
        });
    }
    if duplicates > 0 {
        debug!(duplicates, "dropped duplicate transaction rows");
    }
    if orphaned > 0 {
        debug!(orphaned, "filtered transactions referencing unknown customers");
    }
    cleaned
}
