//! Error types for the reporting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Report generation itself is pure and cannot fail; errors arise from the
//! upstream record reads or from an inconsistent filter selection.

use chrono::NaiveDate;
use thiserror::Error;

use crate::store::EntityKind;

/// The error type for snapshot loading and report requests.
///
/// # Example
///
/// ```
/// use salon_reporting::error::ReportError;
/// use salon_reporting::store::EntityKind;
///
/// let error = ReportError::Fetch {
///     entity: EntityKind::Transactions,
///     message: "connection refused".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "failed to load transactions records: connection refused"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// An upstream read for one entity kind failed.
    ///
    /// When any of the six reads fails the report request is abandoned as a
    /// whole; no partial report is ever produced.
    #[error("failed to load {entity} records: {message}")]
    Fetch {
        /// The entity collection whose read failed.
        entity: EntityKind,
        /// A description of the underlying failure.
        message: String,
    },

    /// The filter selection's start date falls after its end date.
    #[error("invalid report period: start {start} is after end {end}")]
    InvalidPeriod {
        /// The selected start date.
        start: NaiveDate,
        /// The selected end date.
        end: NaiveDate,
    },
}

/// A type alias for Results that return [`ReportError`].
pub type ReportResult<T> = Result<T, ReportError>;
