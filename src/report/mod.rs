//! Report aggregation for the salon back office.
//!
//! This module contains the logic behind the reporting and dashboard
//! screens: compiling a filter selection into record predicates, headline
//! totals for the filtered period, per-employee productivity, client value
//! ranking, service and product popularity rankings, and the day-at-a-glance
//! summary.

mod client_value;
mod daily_summary;
mod employee_performance;
mod engine;
mod filter;
mod period;
mod predicate;
mod product_popularity;
mod service_popularity;
mod summary;

pub use client_value::rank_client_spend;
pub use daily_summary::summarize_day;
pub use employee_performance::rank_employee_performance;
pub use engine::{generate_report, run_report};
pub use filter::ReportFilter;
pub use period::ReportPeriod;
pub use predicate::{AppointmentPredicate, TransactionPredicate};
pub use product_popularity::rank_product_sales;
pub use service_popularity::rank_service_sales;
pub use summary::summarize;

/// Number of rows kept in each ranked breakdown.
pub const TOP_SPOTS: usize = 5;
