//! Client model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A salon client.
///
/// Clients are referenced by id from transactions and appointments. The
/// engine only ever reads them; creation and editing belong to the CRUD
/// layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier for the client.
    pub id: i64,
    /// The client's display name.
    pub name: String,
    /// When the client was registered.
    pub registered_at: DateTime<Utc>,
}
