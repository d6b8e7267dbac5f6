//! Appointment model and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked but not yet confirmed by the client.
    Scheduled,
    /// Confirmed by the client.
    Confirmed,
    /// The client is currently being attended.
    InService,
    /// The appointment took place.
    Completed,
    /// The appointment was called off.
    Cancelled,
}

/// A booked time slot pairing a client with an employee and a service.
///
/// Only completed appointments count as attended work in the productivity
/// rollup; the other states exist for the scheduling screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique identifier for the appointment.
    pub id: i64,
    /// The client being attended.
    pub client_id: i64,
    /// The employee performing the service.
    pub employee_id: i64,
    /// The booked catalog service.
    pub service_id: i64,
    /// When the appointment is scheduled to take place.
    pub scheduled_at: DateTime<Utc>,
    /// Current lifecycle state.
    pub status: AppointmentStatus,
}
