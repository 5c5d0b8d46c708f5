//! Raw records as loaded from source files.
//!
//! Every field is carried as optional text: `None` means the column was
//! absent from the source file or the cell was empty after trimming. No type
//! coercion happens at this stage so that malformed values reach the cleaners
//! intact.

use serde::{Deserialize, Serialize};

/// A customer row exactly as it appears in the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCustomer {
    pub customer_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub registration_date: Option<String>,
    pub country: Option<String>,
    pub age: Option<String>,
}

/// A product row exactly as it appears in the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProduct {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
}

/// A transaction row exactly as it appears in the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub transaction_id: Option<String>,
    pub customer_id: Option<String>,
    pub product_id: Option<String>,
    pub quantity: Option<String>,
    pub transaction_date: Option<String>,
    pub payment_method: Option<String>,
}
