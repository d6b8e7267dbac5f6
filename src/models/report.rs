//! Report output models.
//!
//! These types are the engine's contract with the presenter. All monetary
//! fields are integer cents; formatting for display happens downstream.

use serde::{Deserialize, Serialize};

use super::Money;

/// Headline totals for the filtered period.
///
/// # Example
///
/// ```
/// use salon_reporting::models::{Money, ReportTotals};
///
/// let totals = ReportTotals {
///     total_revenue: Money::from_cents(7000),
///     transaction_count: 2,
///     average_ticket: Money::from_cents(3500),
/// };
/// assert_eq!(totals.average_ticket.cents(), 3500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Sum of all filtered transaction amounts.
    pub total_revenue: Money,
    /// Number of filtered transactions.
    pub transaction_count: usize,
    /// Revenue divided by transaction count, in whole cents; zero when there
    /// are no transactions.
    pub average_ticket: Money,
}

/// One employee's row in the productivity breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePerformance {
    /// The employee's display name.
    pub name: String,
    /// Revenue from filtered transactions credited to this employee.
    pub revenue: Money,
    /// Completed appointments for this employee within the filtered window.
    pub completed_appointments: usize,
}

/// One client's row in the client value ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSpend {
    /// The client's display name.
    pub name: String,
    /// Revenue from filtered transactions paid by this client.
    pub revenue: Money,
}

/// One catalog item's row in a popularity ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSales {
    /// The catalog item's display name.
    pub name: String,
    /// Revenue from filtered sales of this item.
    pub revenue: Money,
    /// Number of filtered sales of this item.
    pub sale_count: usize,
}

/// The complete output of one report computation.
///
/// Ranked lists hold at most five rows each, sorted by revenue descending
/// with snapshot order breaking ties. Zero-revenue rows are retained; hiding
/// them is a presentation choice, not the engine's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Headline totals for the filtered period.
    pub totals: ReportTotals,
    /// One row per snapshot employee, ranked by revenue.
    pub employee_performance: Vec<EmployeePerformance>,
    /// The five highest-spending clients.
    pub top_clients: Vec<ClientSpend>,
    /// The five highest-grossing services.
    pub top_services: Vec<ItemSales>,
    /// The five best-selling products.
    pub top_products: Vec<ItemSales>,
}

/// The dashboard's at-a-glance numbers for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Appointments scheduled for the day, regardless of status.
    pub appointments_today: usize,
    /// Revenue from transactions that happened on the day.
    pub revenue_today: Money,
    /// Clients registered on the day.
    pub new_clients_today: usize,
    /// Products at or below their restock threshold.
    pub low_stock_products: usize,
}
