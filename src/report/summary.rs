//! Headline totals for the filtered period.

use crate::models::{Money, ReportTotals, Transaction};

/// Computes total revenue, transaction count, and average ticket for the
/// filtered transaction set.
///
/// The average ticket is integer division of revenue by count in whole
/// cents, and is defined as zero for an empty set rather than an error.
pub fn summarize(transactions: &[&Transaction]) -> ReportTotals {
    let total_revenue: Money = transactions.iter().map(|t| t.amount).sum();
    let transaction_count = transactions.len();
    let average_ticket = if transaction_count == 0 {
        Money::ZERO
    } else {
        Money::from_cents(total_revenue.cents() / transaction_count as i64)
    };

    ReportTotals {
        total_revenue,
        transaction_count,
        average_ticket,
    }
}
