//! Tests for the fact view and report derivation.

use chrono::NaiveDate;
use retail_analytics::{build_fact_view, compute_analytics};
use retail_model::{Category, Customer, PaymentMethod, Product, Transaction};

fn customer(id: &str, country: Option<&str>) -> Customer {
    Customer {
        customer_id: id.to_string(),
        name: None,
        email: format!("{}@example.com", id.to_lowercase()),
        registration_date: None,
        country: country.map(str::to_string),
        age: None,
    }
}

fn product(id: &str, category: Category, price: f64) -> Product {
    Product {
        product_id: id.to_string(),
        product_name: None,
        category,
        price,
        stock: 10,
    }
}

fn transaction(
    id: &str,
    customer_id: &str,
    product_id: Option<&str>,
    quantity: i64,
    date: Option<(i32, u32, u32)>,
    payment_method: PaymentMethod,
) -> Transaction {
    Transaction {
        transaction_id: Some(id.to_string()),
        customer_id: customer_id.to_string(),
        product_id: product_id.map(str::to_string),
        quantity,
        transaction_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        payment_method,
    }
}

#[test]
fn joins_product_and_customer_attributes() {
    let customers = vec![customer("C1", Some("United States"))];
    let products = vec![product("P1", Category::Electronics, 10.0)];
    let transactions = vec![transaction(
        "T1",
        "C1",
        Some("P1"),
        2,
        Some((2024, 6, 1)),
        PaymentMethod::CreditCard,
    )];

    let facts = build_fact_view(&transactions, &products, &customers);

    assert_eq!(facts.len(), 1);
    assert_eq!(facts[0].price, Some(10.0));
    assert_eq!(facts[0].category, Some(Category::Electronics));
    assert_eq!(facts[0].country.as_deref(), Some("United States"));
    assert_eq!(facts[0].revenue, Some(20.0));
}

#[test]
fn orphan_product_reference_keeps_row_with_null_enrichment() {
    let customers = vec![customer("C1", None)];
    let products = vec![product("P1", Category::Books, 5.0)];
    let transactions = vec![
        transaction("T1", "C1", Some("P9"), 3, None, PaymentMethod::Other),
        transaction("T2", "C1", None, 1, None, PaymentMethod::Other),
    ];

    let facts = build_fact_view(&transactions, &products, &customers);

    assert_eq!(facts.len(), 2);
    for fact in &facts {
        assert_eq!(fact.price, None);
        assert_eq!(fact.category, None);
        assert_eq!(fact.revenue, None);
    }
}

#[test]
fn duplicate_lookup_ids_use_first_occurrence_without_row_multiplication() {
    let customers = vec![
        customer("C1", Some("Germany")),
        customer("C1", Some("France")),
    ];
    let products = vec![
        product("P1", Category::Home, 10.0),
        product("P1", Category::Home, 99.0),
    ];
    let transactions = vec![transaction(
        "T1",
        "C1",
        Some("P1"),
        1,
        None,
        PaymentMethod::PayPal,
    )];

    let facts = build_fact_view(&transactions, &products, &customers);

    assert_eq!(facts.len(), 1);
    assert_eq!(facts[0].price, Some(10.0));
    assert_eq!(facts[0].country.as_deref(), Some("Germany"));
}

#[test]
fn kpis_sum_nulls_as_zero_but_average_skips_them() {
    let customers = vec![customer("C1", None)];
    let products = vec![product("P1", Category::Books, 10.0)];
    let transactions = vec![
        transaction("T1", "C1", Some("P1"), 2, None, PaymentMethod::PayPal),
        transaction("T2", "C1", Some("P1"), 4, None, PaymentMethod::PayPal),
        transaction("T3", "C1", Some("P9"), 100, None, PaymentMethod::PayPal),
    ];

    let bundle = compute_analytics(&transactions, &products, &customers);

    assert_eq!(bundle.kpis.total_revenue, 60.0);
    // Mean over the two priced rows only
    assert_eq!(bundle.kpis.avg_order_value, Some(30.0));
}

#[test]
fn average_is_none_when_no_row_has_revenue() {
    let customers = vec![customer("C1", None)];
    let transactions = vec![transaction(
        "T1",
        "C1",
        Some("P9"),
        1,
        None,
        PaymentMethod::Other,
    )];

    let bundle = compute_analytics(&transactions, &[], &customers);

    assert_eq!(bundle.kpis.total_revenue, 0.0);
    assert_eq!(bundle.kpis.avg_order_value, None);
}

#[test]
fn partitioning_reports_each_sum_to_total_revenue() {
    let customers = vec![
        customer("C1", Some("United States")),
        customer("C2", Some("Germany")),
    ];
    let products = vec![
        product("P1", Category::Electronics, 10.0),
        product("P2", Category::Books, 4.0),
    ];
    let transactions = vec![
        transaction("T1", "C1", Some("P1"), 2, Some((2024, 1, 5)), PaymentMethod::CreditCard),
        transaction("T2", "C2", Some("P2"), 5, Some((2024, 2, 9)), PaymentMethod::PayPal),
        transaction("T3", "C1", Some("P9"), 1, None, PaymentMethod::Other),
    ];

    let bundle = compute_analytics(&transactions, &products, &customers);
    let sum = |slices: &[retail_model::RevenueSlice]| -> f64 {
        slices.iter().map(|slice| slice.revenue).sum()
    };

    assert_eq!(bundle.kpis.total_revenue, 40.0);
    assert_eq!(sum(&bundle.revenue_by_category), 40.0);
    assert_eq!(sum(&bundle.revenue_by_country), 40.0);
    assert_eq!(sum(&bundle.payment_share), 40.0);
}

#[test]
fn reports_include_null_key_groups_for_orphans() {
    let customers = vec![customer("C1", None)];
    let products = vec![product("P1", Category::Books, 10.0)];
    let transactions = vec![
        transaction("T1", "C1", Some("P1"), 1, None, PaymentMethod::PayPal),
        transaction("T2", "C1", Some("P9"), 1, None, PaymentMethod::PayPal),
    ];

    let bundle = compute_analytics(&transactions, &products, &customers);

    let null_group = bundle
        .revenue_by_category
        .iter()
        .find(|slice| slice.key.is_none())
        .expect("null category group");
    assert_eq!(null_group.revenue, 0.0);
    // Country was missing on the customer, so the only group is the null one
    assert_eq!(bundle.revenue_by_country.len(), 1);
    assert!(bundle.revenue_by_country[0].key.is_none());
}

#[test]
fn revenue_reports_sort_descending_with_stable_ties() {
    let customers = vec![customer("C1", None)];
    let products = vec![
        product("P1", Category::Books, 1.0),
        product("P2", Category::Home, 5.0),
        product("P3", Category::Sports, 1.0),
    ];
    let transactions = vec![
        transaction("T1", "C1", Some("P1"), 1, None, PaymentMethod::PayPal),
        transaction("T2", "C1", Some("P2"), 1, None, PaymentMethod::PayPal),
        transaction("T3", "C1", Some("P3"), 1, None, PaymentMethod::PayPal),
    ];

    let bundle = compute_analytics(&transactions, &products, &customers);

    let keys: Vec<&str> = bundle
        .revenue_by_category
        .iter()
        .map(|slice| slice.key.as_deref().unwrap_or(""))
        .collect();
    // Home leads; Books and Sports tie at 1.0 and keep first-seen order
    assert_eq!(keys, vec!["Home", "Books", "Sports"]);
}

#[test]
fn top_customers_keeps_five_largest() {
    let customers: Vec<Customer> = (1..=7).map(|i| customer(&format!("C{i}"), None)).collect();
    let products = vec![product("P1", Category::Books, 1.0)];
    let transactions: Vec<Transaction> = (1..=7)
        .map(|i| {
            transaction(
                &format!("T{i}"),
                &format!("C{i}"),
                Some("P1"),
                i,
                None,
                PaymentMethod::PayPal,
            )
        })
        .collect();

    let bundle = compute_analytics(&transactions, &products, &customers);

    assert_eq!(bundle.top_customers.len(), 5);
    assert_eq!(bundle.top_customers[0].key.as_deref(), Some("C7"));
    assert_eq!(bundle.top_customers[0].revenue, 7.0);
    assert_eq!(bundle.top_customers[4].key.as_deref(), Some("C3"));
}

#[test]
fn monthly_revenue_truncates_to_month_and_sorts_ascending_with_null_last() {
    let customers = vec![customer("C1", None)];
    let products = vec![product("P1", Category::Books, 10.0)];
    let transactions = vec![
        transaction("T1", "C1", Some("P1"), 1, Some((2024, 6, 15)), PaymentMethod::PayPal),
        transaction("T2", "C1", Some("P1"), 1, Some((2024, 6, 28)), PaymentMethod::PayPal),
        transaction("T3", "C1", Some("P1"), 1, Some((2024, 1, 2)), PaymentMethod::PayPal),
        transaction("T4", "C1", Some("P1"), 1, None, PaymentMethod::PayPal),
    ];

    let bundle = compute_analytics(&transactions, &products, &customers);

    let months: Vec<Option<NaiveDate>> =
        bundle.monthly_revenue.iter().map(|row| row.month).collect();
    assert_eq!(
        months,
        vec![
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 6, 1),
            None,
        ]
    );
    assert_eq!(bundle.monthly_revenue[1].revenue, 20.0);
    assert_eq!(bundle.monthly_revenue[2].revenue, 10.0);
}
