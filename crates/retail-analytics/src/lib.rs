//! Analytics engine for the retail ETL pipeline: fact-view join plus the
//! fixed bundle of revenue reports and KPIs.

pub mod fact;
pub mod reports;

pub use fact::{FactRow, build_fact_view};
pub use reports::{AnalyticsBundle, TOP_CUSTOMER_COUNT, compute_analytics, compute_reports};
