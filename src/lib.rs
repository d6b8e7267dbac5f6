//! Reporting and aggregation engine for a salon management back office.
//!
//! This crate takes read-only snapshots of a salon's operational records
//! (clients, employees, services, products, appointments, transactions) plus
//! a user-selected filter set, and computes the derived business metrics
//! behind the reporting screen: period totals, per-employee productivity,
//! per-client value, and per-item popularity rankings.
//!
//! Record access happens through the narrow [`store::RecordStore`] read
//! interface; the aggregation itself is a pure function over an in-memory
//! [`models::Snapshot`] and owns no I/O, clocks, or mutable state.

#![warn(missing_docs)]

pub mod error;
pub mod models;
pub mod report;
pub mod store;
