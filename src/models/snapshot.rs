//! Snapshot of the salon's records at report time.

use serde::{Deserialize, Serialize};

use super::{Appointment, Client, Employee, Product, Service, Transaction};

/// An immutable, fully-loaded copy of every record collection.
///
/// A snapshot is assembled once all six reads have settled (see
/// [`load_snapshot`](crate::store::load_snapshot)) and is never mutated by
/// the engine; generating a report twice from the same snapshot yields the
/// same result.
///
/// Collection order is preserved exactly as the store returned it. Ranked
/// rollups rely on that: ties sort in snapshot order, and name joins resolve
/// to the first matching catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All clients.
    pub clients: Vec<Client>,
    /// All employees, active or not.
    pub employees: Vec<Employee>,
    /// The service catalog.
    pub services: Vec<Service>,
    /// The product catalog.
    pub products: Vec<Product>,
    /// All appointments.
    pub appointments: Vec<Appointment>,
    /// All transactions.
    pub transactions: Vec<Transaction>,
}
