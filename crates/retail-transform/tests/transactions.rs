//! Tests for transaction cleaning and the referential filter.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use retail_model::{PaymentMethod, RawTransaction};
use retail_transform::{TRANSACTION_DATE_CUTOFF, clean_transactions};

fn raw(
    transaction_id: &str,
    customer_id: &str,
    quantity: &str,
    date: &str,
    payment: &str,
) -> RawTransaction {
    let opt = |value: &str| {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    };
    RawTransaction {
        transaction_id: opt(transaction_id),
        customer_id: opt(customer_id),
        product_id: Some("P1".to_string()),
        quantity: opt(quantity),
        transaction_date: opt(date),
        payment_method: opt(payment),
    }
}

fn customers(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|id| (*id).to_string()).collect()
}

#[test]
fn deduplicates_by_transaction_id_keeping_first() {
    let rows = vec![
        raw("T1", "C1", "1", "2024-01-01", "paypal"),
        raw("T1", "C1", "9", "2024-01-02", "paypal"),
        raw("T2", "C1", "2", "2024-01-03", "paypal"),
    ];

    let cleaned = clean_transactions(&rows, &customers(&["C1"]));

    assert_eq!(cleaned.len(), 2);
    assert_eq!(cleaned[0].quantity, 1);
    assert_eq!(cleaned[1].transaction_id.as_deref(), Some("T2"));
}

#[test]
fn falls_back_to_full_row_dedup_without_identifiers() {
    let rows = vec![
        raw("", "C1", "1", "2024-01-01", "paypal"),
        raw("", "C1", "1", "2024-01-01", "paypal"),
        raw("", "C1", "2", "2024-01-01", "paypal"),
    ];

    let cleaned = clean_transactions(&rows, &customers(&["C1"]));

    assert_eq!(cleaned.len(), 2);
}

#[test]
fn quantity_defaults_truncates_and_clamps_up_to_one() {
    let rows = vec![
        raw("T1", "C1", "", "", ""),
        raw("T2", "C1", "abc", "", ""),
        raw("T3", "C1", "0", "", ""),
        raw("T4", "C1", "-4", "", ""),
        raw("T5", "C1", "2.9", "", ""),
        raw("T6", "C1", "7", "", ""),
    ];

    let cleaned = clean_transactions(&rows, &customers(&["C1"]));

    let quantities: Vec<i64> = cleaned.iter().map(|t| t.quantity).collect();
    assert_eq!(quantities, vec![1, 1, 1, 1, 2, 7]);
}

#[test]
fn unparsable_dates_become_null_and_future_dates_clamp_to_cutoff() {
    let rows = vec![
        raw("T1", "C1", "1", "2024-06-15", ""),
        raw("T2", "C1", "1", "2025-03-01", ""),
        raw("T3", "C1", "1", "soon", ""),
        raw("T4", "C1", "1", "", ""),
    ];

    let cleaned = clean_transactions(&rows, &customers(&["C1"]));

    assert_eq!(
        cleaned[0].transaction_date,
        NaiveDate::from_ymd_opt(2024, 6, 15)
    );
    assert_eq!(cleaned[1].transaction_date, Some(TRANSACTION_DATE_CUTOFF));
    // Unparsable dates carry forward as null, the rows are kept
    assert_eq!(cleaned[2].transaction_date, None);
    assert_eq!(cleaned[3].transaction_date, None);
}

#[test]
fn canonicalizes_payment_methods() {
    let rows = vec![
        raw("T1", "C1", "1", "", "credit card"),
        raw("T2", "C1", "1", "", " PAYPAL "),
        raw("T3", "C1", "1", "", "Bank Transfer"),
        raw("T4", "C1", "1", "", "cash"),
        raw("T5", "C1", "1", "", ""),
    ];

    let cleaned = clean_transactions(&rows, &customers(&["C1"]));

    let methods: Vec<PaymentMethod> = cleaned.iter().map(|t| t.payment_method).collect();
    assert_eq!(
        methods,
        vec![
            PaymentMethod::CreditCard,
            PaymentMethod::PayPal,
            PaymentMethod::BankTransfer,
            PaymentMethod::Other,
            PaymentMethod::Other,
        ]
    );
}

#[test]
fn filters_rows_referencing_unknown_customers() {
    let rows = vec![
        raw("T1", "C1", "1", "", ""),
        raw("T2", "C9", "1", "", ""),
        raw("T3", "", "1", "", ""),
        raw("T4", "C2", "1", "", ""),
    ];

    let cleaned = clean_transactions(&rows, &customers(&["C1", "C2"]));

    let survivors: Vec<&str> = cleaned
        .iter()
        .map(|t| t.transaction_id.as_deref().unwrap_or(""))
        .collect();
    assert_eq!(survivors, vec!["T1", "T4"]);
}

#[test]
fn dedup_runs_before_the_referential_filter() {
    // The first T1 references an unknown customer; dedup keeps it and drops
    // the second, so the filter then removes the id entirely.
    let rows = vec![
        raw("T1", "C9", "1", "", ""),
        raw("T1", "C1", "1", "", ""),
    ];

    let cleaned = clean_transactions(&rows, &customers(&["C1"]));

    assert!(cleaned.is_empty());
}
