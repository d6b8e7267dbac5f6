//! Transaction model and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Money;

/// What kind of sale a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// A catalog service was performed.
    Service,
    /// A retail product was sold.
    Product,
    /// A prepaid bundle of services was sold.
    Package,
}

/// How a transaction was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Paid in cash.
    Cash,
    /// Paid by credit card.
    CreditCard,
    /// Paid by debit card.
    DebitCard,
    /// Paid by instant bank transfer.
    InstantTransfer,
    /// Any other arrangement.
    Other,
}

/// A completed sale.
///
/// For service and product sales the `description` holds the catalog item's
/// name and is the only link back to the catalog; there is no numeric foreign
/// key to the item. A transaction may also lack an employee, e.g. a counter
/// sale rung up without attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction.
    pub id: i64,
    /// What kind of sale this records.
    pub kind: TransactionKind,
    /// The paying client.
    pub client_id: i64,
    /// The employee credited with the sale, when one was recorded.
    #[serde(default)]
    pub employee_id: Option<i64>,
    /// The appointment this sale settled, if any.
    #[serde(default)]
    pub appointment_id: Option<i64>,
    /// The amount charged, in cents.
    pub amount: Money,
    /// The employee's commission on this sale, in cents.
    #[serde(default)]
    pub commission: Money,
    /// How the client paid.
    pub payment_method: PaymentMethod,
    /// Free-text description; holds the catalog item name for service and
    /// product sales.
    #[serde(default)]
    pub description: Option<String>,
    /// When the sale happened.
    pub occurred_at: DateTime<Utc>,
}
