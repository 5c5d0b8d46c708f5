//! Cleaned entity tables.
//!
//! Each cleaner consumes a raw table and produces a fresh vector of these
//! records; nothing is shared or mutated across pipeline stages. Field
//! invariants are established by the cleaners in `retail-transform` and are
//! relied on downstream without re-validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, PaymentMethod};

/// A cleaned customer row.
///
/// Invariants: `email` is non-empty and lower-case; exact full-row duplicates
/// have been removed. `customer_id` uniqueness is NOT enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Identifier as it appeared in the source; empty when the cell was
    /// missing. Used for referential checks against transactions.
    pub customer_id: String,
    pub name: Option<String>,
    pub email: String,
    /// Passed through unvalidated.
    pub registration_date: Option<String>,
    /// Trimmed, with country aliases resolved to canonical names.
    pub country: Option<String>,
    pub age: Option<i64>,
}

/// A cleaned product row.
///
/// Invariants: `price` is non-negative and never missing; `stock` is an
/// integer in `[0, 1000]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_name: Option<String>,
    pub category: Category,
    pub price: f64,
    pub stock: i64,
}

/// A cleaned transaction row.
///
/// Invariants: `quantity >= 1`; `transaction_date <= 2024-12-31` whenever
/// present; `customer_id` references a row in the cleaned customer table.
/// `product_id` is NOT validated against the product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: Option<String>,
    pub customer_id: String,
    pub product_id: Option<String>,
    pub quantity: i64,
    pub transaction_date: Option<NaiveDate>,
    pub payment_method: PaymentMethod,
}
