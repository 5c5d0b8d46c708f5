//! Report rows and KPIs produced by the analytics engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of a keyed revenue report (category, country, customer, payment
/// method). `key` is `None` for the null-key group, e.g. transactions whose
/// product reference did not resolve to a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSlice {
    pub key: Option<String>,
    pub revenue: f64,
}

/// One row of the monthly revenue trend. `month` is the first day of the
/// month, or `None` for transactions without a parseable date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: Option<NaiveDate>,
    pub revenue: f64,
}

/// Scalar key performance indicators over the fact view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    /// Sum of all fact-row revenue, with missing revenue counted as zero.
    pub total_revenue: f64,
    /// Mean revenue across fact rows with a non-missing revenue; `None` when
    /// no row has one.
    pub avg_order_value: Option<f64>,
}
