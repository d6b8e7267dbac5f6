//! Catalog models: services and retail products.
//!
//! Catalog entries have no foreign key from transactions; a sale records the
//! item's name in its free-text description, and that name is the only link
//! back to the catalog.

use serde::{Deserialize, Serialize};

use super::Money;

/// A service offered by the salon, such as a haircut or manicure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Unique identifier for the service.
    pub id: i64,
    /// The service's display name.
    pub name: String,
    /// The list price in cents.
    pub price: Money,
    /// Whether the service is currently offered.
    pub active: bool,
}

/// A retail product sold over the counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product.
    pub id: i64,
    /// The product's display name.
    pub name: String,
    /// The list price in cents.
    pub price: Money,
    /// Whether the product is currently sold.
    pub active: bool,
    /// Units currently in stock.
    pub stock: i64,
    /// Restock threshold; at or below this level the product counts as low
    /// stock on the dashboard.
    pub minimum_stock: i64,
}

impl Product {
    /// Returns true when stock has fallen to or below the restock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.minimum_stock
    }
}
