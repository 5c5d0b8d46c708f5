//! Canonical value sets for cleaned fields.
//!
//! Categories and payment methods are normalized into closed enumerations
//! via a lookup on the trimmed, case-folded raw text. Anything that does not
//! match a known value falls back to `Other`, so a cleaned row can never
//! carry an off-list value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Home,
    Sports,
    /// Fallback for unmapped or missing raw values.
    Other,
}

impl Category {
    /// All canonical categories, in report column order.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::Home,
        Category::Sports,
        Category::Other,
    ];

    /// Resolves a raw cell to a canonical category.
    ///
    /// Matching is on the trimmed, lower-cased text; unmapped values
    /// (including missing ones) resolve to [`Category::Other`].
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Category::Other;
        };
        match raw.trim().to_lowercase().as_str() {
            "electronics" => Category::Electronics,
            "clothing" => Category::Clothing,
            "books" => Category::Books,
            "home" => Category::Home,
            "sports" => Category::Sports,
            _ => Category::Other,
        }
    }

    /// Returns the canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::Home => "Home",
            Category::Sports => "Sports",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
    BankTransfer,
    /// Fallback for unmapped or missing raw values.
    Other,
}

impl PaymentMethod {
    /// Resolves a raw cell to a canonical payment method.
    ///
    /// Matching is on the trimmed, upper-cased text; unmapped values
    /// (including missing ones) resolve to [`PaymentMethod::Other`].
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return PaymentMethod::Other;
        };
        match raw.trim().to_uppercase().as_str() {
            "CREDIT CARD" => PaymentMethod::CreditCard,
            "PAYPAL" => PaymentMethod::PayPal,
            "BANK TRANSFER" => PaymentMethod::BankTransfer,
            _ => PaymentMethod::Other,
        }
    }

    /// Returns the canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Other => "Other",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
