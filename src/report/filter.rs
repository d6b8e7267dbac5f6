//! User-selected report filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ReportResult;
use crate::models::PaymentMethod;

use super::period::ReportPeriod;

/// The user-selected constraint set driving a report.
///
/// Every dimension is a tagged optional: `None` means the dimension imposes
/// no constraint, which is the "all" choice in the reporting screen. There is
/// no sentinel string anywhere; an unconstrained dimension is a typed case.
///
/// The date window and the employee dimension apply to both transactions and
/// appointments. The client, service, product, and payment method dimensions
/// apply to transactions only.
///
/// # Example
///
/// ```
/// use salon_reporting::report::ReportFilter;
///
/// // The presentation layer posts only the dimensions it constrains.
/// let filter: ReportFilter = serde_json::from_str(
///     r#"{"period": {"start": "2026-03-01", "end": "2026-03-31"}, "employee_id": 3}"#,
/// ).unwrap();
/// assert_eq!(filter.employee_id, Some(3));
/// assert_eq!(filter.client_id, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Date window applied to transactions and appointments.
    #[serde(default)]
    pub period: ReportPeriod,
    /// Restrict transactions and appointments to one employee.
    #[serde(default)]
    pub employee_id: Option<i64>,
    /// Restrict transactions to one client.
    #[serde(default)]
    pub client_id: Option<i64>,
    /// Restrict transactions to sales of one catalog service.
    #[serde(default)]
    pub service_id: Option<i64>,
    /// Restrict transactions to sales of one catalog product.
    #[serde(default)]
    pub product_id: Option<i64>,
    /// Restrict transactions to one payment method.
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

impl ReportFilter {
    /// The reporting screen's initial selection: current month to date, all
    /// other dimensions unconstrained.
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            period: ReportPeriod::month_to_date(today),
            ..Self::default()
        }
    }

    /// Checks the selection is internally consistent.
    pub fn validate(&self) -> ReportResult<()> {
        self.period.validate()
    }
}
