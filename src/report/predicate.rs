//! Compiled filter predicates.
//!
//! Compiling a [`ReportFilter`] resolves the catalog dimensions to item names
//! up front; the resulting predicates are pure functions over individual
//! records and can be applied in any order, any number of times.

use crate::models::{Appointment, PaymentMethod, Product, Service, Transaction, TransactionKind};

use super::filter::ReportFilter;
use super::period::ReportPeriod;

/// Constraint on a transaction's description derived from a catalog filter.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NameConstraint {
    /// The dimension is unconstrained.
    Any,
    /// The description must equal this catalog name exactly.
    Equals(String),
    /// The selected catalog entry is gone from the snapshot; nothing can
    /// match.
    Unsatisfiable,
}

impl NameConstraint {
    fn permits(&self, kind_matches: bool, description: Option<&str>) -> bool {
        match self {
            NameConstraint::Any => true,
            NameConstraint::Equals(name) => kind_matches && description == Some(name.as_str()),
            NameConstraint::Unsatisfiable => false,
        }
    }
}

/// A pure predicate over transactions compiled from a filter selection.
///
/// The service and product dimensions join by name: a transaction passes the
/// service dimension only when its kind is a service sale and its description
/// equals the name of the selected catalog service. When the selected id has
/// no catalog entry in the snapshot the dimension can never match and the
/// predicate fails closed.
#[derive(Debug, Clone)]
pub struct TransactionPredicate {
    period: ReportPeriod,
    employee_id: Option<i64>,
    client_id: Option<i64>,
    payment_method: Option<PaymentMethod>,
    service: NameConstraint,
    product: NameConstraint,
}

impl TransactionPredicate {
    /// Compiles the transaction-side predicate against the current catalog.
    pub fn compile(filter: &ReportFilter, services: &[Service], products: &[Product]) -> Self {
        let service = match filter.service_id {
            None => NameConstraint::Any,
            Some(id) => services
                .iter()
                .find(|service| service.id == id)
                .map(|service| NameConstraint::Equals(service.name.clone()))
                .unwrap_or(NameConstraint::Unsatisfiable),
        };
        let product = match filter.product_id {
            None => NameConstraint::Any,
            Some(id) => products
                .iter()
                .find(|product| product.id == id)
                .map(|product| NameConstraint::Equals(product.name.clone()))
                .unwrap_or(NameConstraint::Unsatisfiable),
        };

        Self {
            period: filter.period.clone(),
            employee_id: filter.employee_id,
            client_id: filter.client_id,
            payment_method: filter.payment_method,
            service,
            product,
        }
    }

    /// Whether `transaction` passes every constrained dimension.
    ///
    /// A transaction without an employee id never matches a specific employee
    /// constraint.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if !self.period.contains(transaction.occurred_at) {
            return false;
        }
        if let Some(employee_id) = self.employee_id {
            if transaction.employee_id != Some(employee_id) {
                return false;
            }
        }
        if let Some(client_id) = self.client_id {
            if transaction.client_id != client_id {
                return false;
            }
        }
        if let Some(payment_method) = self.payment_method {
            if transaction.payment_method != payment_method {
                return false;
            }
        }
        let description = transaction.description.as_deref();
        self.service
            .permits(transaction.kind == TransactionKind::Service, description)
            && self
                .product
                .permits(transaction.kind == TransactionKind::Product, description)
    }
}

/// A pure predicate over appointments compiled from a filter selection.
///
/// Only the date window and the employee dimension apply to appointments.
#[derive(Debug, Clone)]
pub struct AppointmentPredicate {
    period: ReportPeriod,
    employee_id: Option<i64>,
}

impl AppointmentPredicate {
    /// Compiles the appointment-side predicate.
    pub fn compile(filter: &ReportFilter) -> Self {
        Self {
            period: filter.period.clone(),
            employee_id: filter.employee_id,
        }
    }

    /// Whether `appointment` falls inside the window and matches the employee
    /// dimension.
    pub fn matches(&self, appointment: &Appointment) -> bool {
        self.period.contains(appointment.scheduled_at)
            && self
                .employee_id
                .is_none_or(|id| appointment.employee_id == id)
    }
}
