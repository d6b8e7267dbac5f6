//! Read access to the salon's record store.
//!
//! The engine never talks to a database or the network itself: it consumes
//! immutable snapshots assembled from the six record collections a
//! [`RecordStore`] can list. [`load_snapshot`] fetches the collections
//! concurrently and acts as the join barrier in front of the aggregation —
//! no report is computed until every read has settled.

use std::fmt;
use std::future::Future;
use std::time::Instant;

use tracing::info;
use uuid::Uuid;

use crate::error::ReportResult;
use crate::models::{Appointment, Client, Employee, Product, Service, Snapshot, Transaction};

/// The six record collections a store can be asked for.
///
/// Used to say which read failed when a snapshot load errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Client records.
    Clients,
    /// Employee records.
    Employees,
    /// The service catalog.
    Services,
    /// The product catalog.
    Products,
    /// Appointment records.
    Appointments,
    /// Transaction records.
    Transactions,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Clients => "clients",
            EntityKind::Employees => "employees",
            EntityKind::Services => "services",
            EntityKind::Products => "products",
            EntityKind::Appointments => "appointments",
            EntityKind::Transactions => "transactions",
        };
        f.write_str(name)
    }
}

/// Read-only access to the salon's records.
///
/// Each method returns the complete current collection for one entity kind;
/// partial or paginated results are not part of the contract. Implementations
/// own their transport, timeouts, and retries, and map failures to
/// [`ReportError::Fetch`](crate::error::ReportError::Fetch).
pub trait RecordStore {
    /// Lists every client.
    fn list_clients(&self) -> impl Future<Output = ReportResult<Vec<Client>>> + Send;

    /// Lists every employee, active or not.
    fn list_employees(&self) -> impl Future<Output = ReportResult<Vec<Employee>>> + Send;

    /// Lists the full service catalog.
    fn list_services(&self) -> impl Future<Output = ReportResult<Vec<Service>>> + Send;

    /// Lists the full product catalog.
    fn list_products(&self) -> impl Future<Output = ReportResult<Vec<Product>>> + Send;

    /// Lists every appointment.
    fn list_appointments(&self) -> impl Future<Output = ReportResult<Vec<Appointment>>> + Send;

    /// Lists every transaction.
    fn list_transactions(&self) -> impl Future<Output = ReportResult<Vec<Transaction>>> + Send;
}

/// Fetches all six record collections concurrently and assembles a snapshot.
///
/// This is the join barrier in front of the engine: aggregation only ever
/// sees a snapshot once every read has settled successfully. If any read
/// fails its error is returned and no partial snapshot exists.
pub async fn load_snapshot<S: RecordStore>(store: &S) -> ReportResult<Snapshot> {
    let load_id = Uuid::new_v4();
    let started = Instant::now();

    let (clients, employees, services, products, appointments, transactions) = tokio::try_join!(
        store.list_clients(),
        store.list_employees(),
        store.list_services(),
        store.list_products(),
        store.list_appointments(),
        store.list_transactions(),
    )?;

    info!(
        load_id = %load_id,
        clients = clients.len(),
        employees = employees.len(),
        services = services.len(),
        products = products.len(),
        appointments = appointments.len(),
        transactions = transactions.len(),
        duration_us = started.elapsed().as_micros() as u64,
        "Snapshot loaded"
    );

    Ok(Snapshot {
        clients,
        employees,
        services,
        products,
        appointments,
        transactions,
    })
}

/// A [`RecordStore`] serving a pre-built snapshot from memory.
///
/// Reads never fail and always return clones of the stored collections.
/// Useful in tests and for embedders that already hold the records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    snapshot: Snapshot,
}

impl InMemoryStore {
    /// Creates a store serving `snapshot`.
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl RecordStore for InMemoryStore {
    async fn list_clients(&self) -> ReportResult<Vec<Client>> {
        Ok(self.snapshot.clients.clone())
    }

    async fn list_employees(&self) -> ReportResult<Vec<Employee>> {
        Ok(self.snapshot.employees.clone())
    }

    async fn list_services(&self) -> ReportResult<Vec<Service>> {
        Ok(self.snapshot.services.clone())
    }

    async fn list_products(&self) -> ReportResult<Vec<Product>> {
        Ok(self.snapshot.products.clone())
    }

    async fn list_appointments(&self) -> ReportResult<Vec<Appointment>> {
        Ok(self.snapshot.appointments.clone())
    }

    async fn list_transactions(&self) -> ReportResult<Vec<Transaction>> {
        Ok(self.snapshot.transactions.clone())
    }
}
