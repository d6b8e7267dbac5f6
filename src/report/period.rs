//! Reporting period with date-only bounds.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// A reporting window expressed as inclusive calendar dates.
///
/// Bounds are date-only and expanded to full days before comparison: the
/// start bound covers from `00:00:00` of its day and the end bound through
/// `23:59:59` of its day. Either side may be absent, leaving that side
/// unconstrained.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use salon_reporting::report::ReportPeriod;
///
/// let period = ReportPeriod {
///     start: Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
///     end: Some(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()),
/// };
/// assert!(period.contains("2026-03-31T23:59:59Z".parse().unwrap()));
/// assert!(!period.contains("2026-04-01T00:00:00Z".parse().unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// First day included in the window, if bounded below.
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Last day included in the window, if bounded above.
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl ReportPeriod {
    /// A period with no bound on either side.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// The window from the first day of `today`'s month through `today`,
    /// which is the reporting screen's initial selection.
    pub fn month_to_date(today: NaiveDate) -> Self {
        let first_of_month = today.with_day(1).unwrap_or(today);
        Self {
            start: Some(first_of_month),
            end: Some(today),
        }
    }

    /// Rejects a window whose start date falls after its end date.
    pub fn validate(&self) -> ReportResult<()> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(ReportError::InvalidPeriod { start, end });
            }
        }
        Ok(())
    }

    /// Whether `instant` falls inside the window, bounds inclusive.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        if let Some(opening) = self.start.and_then(open_of_day) {
            if instant < opening {
                return false;
            }
        }
        if let Some(closing) = self.end.and_then(close_of_day) {
            if instant > closing {
                return false;
            }
        }
        true
    }
}

fn open_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|t| t.and_utc())
}

fn close_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(23, 59, 59).map(|t| t.and_utc())
}
