//! Core data models for the reporting engine.
//!
//! This module contains the six record types the engine reads, the money
//! primitive they share, the [`Snapshot`] bundling a full load of all six
//! collections, and the report output types handed to the presenter.

mod appointment;
mod catalog;
mod client;
mod employee;
mod money;
mod report;
mod snapshot;
mod transaction;

pub use appointment::{Appointment, AppointmentStatus};
pub use catalog::{Product, Service};
pub use client::Client;
pub use employee::Employee;
pub use money::Money;
pub use report::{
    ClientSpend, DailySummary, EmployeePerformance, ItemSales, Report, ReportTotals,
};
pub use snapshot::Snapshot;
pub use transaction::{PaymentMethod, Transaction, TransactionKind};
