//! Aggregate reports and KPIs over the fact view.
//!
//! Grouped sums use an explicit insertion-ordered accumulator, and the
//! descending sorts are stable, so ties keep first-seen order. Every report
//! reads the fact view's revenue column; none recomputes revenue.

use chrono::{Datelike, NaiveDate};
use retail_model::{Customer, Kpis, MonthlyRevenue, Product, RevenueSlice, Transaction};
use tracing::debug;

use crate::fact::{FactRow, build_fact_view};

/// How many customers the top-customer report keeps.
pub const TOP_CUSTOMER_COUNT: usize = 5;

/// The full analytics output: two KPIs plus five report tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsBundle {
    pub kpis: Kpis,
    pub revenue_by_category: Vec<RevenueSlice>,
    pub revenue_by_country: Vec<RevenueSlice>,
    pub top_customers: Vec<RevenueSlice>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub payment_share: Vec<RevenueSlice>,
}

/// Adds `amount` to the group for `key`, creating the group at the end of
/// the list on first sight. Insertion order is the documented tie-break for
/// the sorted reports.
fn accumulate<K: PartialEq>(groups: &mut Vec<(K, f64)>, key: K, amount: f64) {
    match groups.iter_mut().find(|(existing, _)| *existing == key) {
        Some((_, sum)) => *sum += amount,
        None => groups.push((key, amount)),
    }
}

fn into_slices_sorted_desc(mut groups: Vec<(Option<String>, f64)>) -> Vec<RevenueSlice> {
    groups.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    groups
        .into_iter()
        .map(|(key, revenue)| RevenueSlice { key, revenue })
        .collect()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Computes the analytics bundle from the three cleaned tables.
///
/// Pure function of its inputs: same tables, same bundle.
pub fn compute_analytics(
    transactions: &[Transaction],
    products: &[Product],
    customers: &[Customer],
) -> AnalyticsBundle {
    let facts = build_fact_view(transactions, products, customers);
    compute_reports(&facts)
}

/// Derives the KPI pair and the five report tables from an existing fact
/// view.
pub fn compute_reports(facts: &[FactRow]) -> AnalyticsBundle {
    let priced: Vec<f64> = facts.iter().filter_map(|fact| fact.revenue).collect();
    let total_revenue: f64 = priced.iter().sum();
    let avg_order_value = if priced.is_empty() {
        None
    } else {
        Some(total_revenue / priced.len() as f64)
    };

    let mut by_category: Vec<(Option<String>, f64)> = Vec::new();
    let mut by_country: Vec<(Option<String>, f64)> = Vec::new();
    let mut by_customer: Vec<(Option<String>, f64)> = Vec::new();
    let mut by_month: Vec<(Option<NaiveDate>, f64)> = Vec::new();
    let mut by_payment: Vec<(Option<String>, f64)> = Vec::new();
    for fact in facts {
        // Missing revenue still creates its group, contributing zero.
        let amount = fact.revenue.unwrap_or(0.0);
        accumulate(
            &mut by_category,
            fact.category.map(|category| category.as_str().to_string()),
            amount,
        );
        accumulate(&mut by_country, fact.country.clone(), amount);
        accumulate(&mut by_customer, Some(fact.customer_id.clone()), amount);
        accumulate(&mut by_month, fact.transaction_date.map(first_of_month), amount);
        accumulate(
            &mut by_payment,
            Some(fact.payment_method.as_str().to_string()),
            amount,
        );
    }

    let mut top_customers = into_slices_sorted_desc(by_customer);
    top_customers.truncate(TOP_CUSTOMER_COUNT);

    // Ascending by month, with the null-date bucket last.
    by_month.sort_by(|a, b| match (a.0, b.0) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    let monthly_revenue = by_month
        .into_iter()
        .map(|(month, revenue)| MonthlyRevenue { month, revenue })
        .collect();

    debug!(
        fact_rows = facts.len(),
        total_revenue, "derived analytics reports"
    );
    AnalyticsBundle {
        kpis: Kpis {
            total_revenue,
            avg_order_value,
        },
        revenue_by_category: into_slices_sorted_desc(by_category),
        revenue_by_country: into_slices_sorted_desc(by_country),
        top_customers,
        monthly_revenue,
        payment_share: into_slices_sorted_desc(by_payment),
    }
}
