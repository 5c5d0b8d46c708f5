//! Deterministic cleaning rules for the three retail entities.
//!
//! Each cleaner is a pure function from a raw table to a cleaned table.
//! Malformed data is normalized or dropped per field policy, never rejected:
//! no error value escapes these functions on dirty input.

pub mod customers;
pub mod normalization;
pub mod products;
pub mod transactions;

pub use customers::clean_customers;
pub use products::clean_products;
pub use transactions::{TRANSACTION_DATE_CUTOFF, clean_transactions};
