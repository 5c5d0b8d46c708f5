//! Data model for the retail ETL pipeline.

pub mod entities;
pub mod enums;
pub mod raw;
pub mod reports;

pub use entities::{Customer, Product, Transaction};
pub use enums::{Category, PaymentMethod};
pub use raw::{RawCustomer, RawProduct, RawTransaction};
pub use reports::{Kpis, MonthlyRevenue, RevenueSlice};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_from_raw_canonicalizes() {
        assert_eq!(Category::from_raw(Some("  ELECTRONICS ")), Category::Electronics);
        assert_eq!(Category::from_raw(Some("books")), Category::Books);
        assert_eq!(Category::from_raw(Some("garden")), Category::Other);
        assert_eq!(Category::from_raw(Some("")), Category::Other);
        assert_eq!(Category::from_raw(None), Category::Other);
    }

    #[test]
    fn payment_method_from_raw_canonicalizes() {
        assert_eq!(
            PaymentMethod::from_raw(Some("credit card")),
            PaymentMethod::CreditCard
        );
        assert_eq!(PaymentMethod::from_raw(Some(" PayPal ")), PaymentMethod::PayPal);
        assert_eq!(
            PaymentMethod::from_raw(Some("bank transfer")),
            PaymentMethod::BankTransfer
        );
        assert_eq!(PaymentMethod::from_raw(Some("crypto")), PaymentMethod::Other);
        assert_eq!(PaymentMethod::from_raw(None), PaymentMethod::Other);
    }

    #[test]
    fn transaction_serializes() {
        let transaction = Transaction {
            transaction_id: Some("T1".to_string()),
            customer_id: "C1".to_string(),
            product_id: Some("P1".to_string()),
            quantity: 2,
            transaction_date: chrono::NaiveDate::from_ymd_opt(2024, 6, 1),
            payment_method: PaymentMethod::CreditCard,
        };
        let json = serde_json::to_string(&transaction).expect("serialize transaction");
        let round: Transaction = serde_json::from_str(&json).expect("deserialize transaction");
        assert_eq!(round, transaction);
    }
}
