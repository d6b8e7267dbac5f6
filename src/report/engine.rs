//! Report generation.

use tracing::debug;

use crate::error::ReportResult;
use crate::models::{Appointment, Report, Snapshot, Transaction};
use crate::store::{load_snapshot, RecordStore};

use super::client_value::rank_client_spend;
use super::employee_performance::rank_employee_performance;
use super::filter::ReportFilter;
use super::predicate::{AppointmentPredicate, TransactionPredicate};
use super::product_popularity::rank_product_sales;
use super::service_popularity::rank_service_sales;
use super::summary::summarize;

/// Computes the full report for one snapshot and filter selection.
///
/// The function is pure: it performs no I/O, mutates nothing, and the same
/// snapshot and selection always produce the same report. Records that
/// reference ids absent from the snapshot contribute to the period totals
/// but to no per-entity row; zero-revenue rows are retained for the
/// presenter to suppress or show.
///
/// # Example
///
/// ```
/// use salon_reporting::models::Snapshot;
/// use salon_reporting::report::{generate_report, ReportFilter};
///
/// let report = generate_report(&Snapshot::default(), &ReportFilter::default());
/// assert_eq!(report.totals.transaction_count, 0);
/// assert!(report.top_clients.is_empty());
/// ```
pub fn generate_report(snapshot: &Snapshot, filter: &ReportFilter) -> Report {
    let transaction_predicate =
        TransactionPredicate::compile(filter, &snapshot.services, &snapshot.products);
    let appointment_predicate = AppointmentPredicate::compile(filter);

    let transactions: Vec<&Transaction> = snapshot
        .transactions
        .iter()
        .filter(|t| transaction_predicate.matches(t))
        .collect();
    let appointments: Vec<&Appointment> = snapshot
        .appointments
        .iter()
        .filter(|a| appointment_predicate.matches(a))
        .collect();

    debug!(
        transactions = transactions.len(),
        appointments = appointments.len(),
        "Applied report filters"
    );

    Report {
        totals: summarize(&transactions),
        employee_performance: rank_employee_performance(
            &snapshot.employees,
            &transactions,
            &appointments,
        ),
        top_clients: rank_client_spend(&snapshot.clients, &transactions),
        top_services: rank_service_sales(&snapshot.services, &transactions),
        top_products: rank_product_sales(&snapshot.products, &transactions),
    }
}

/// Loads a fresh snapshot from `store` and generates the report for `filter`.
///
/// The selection is validated first, then the six entity collections are
/// fetched concurrently. If any read fails the error is returned as-is and
/// no partial report is produced.
pub async fn run_report<S: RecordStore>(store: &S, filter: &ReportFilter) -> ReportResult<Report> {
    filter.validate()?;
    let snapshot = load_snapshot(store).await?;
    Ok(generate_report(&snapshot, filter))
}
