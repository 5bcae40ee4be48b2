//! Wire envelopes shared by the API (serialising) and the CLI client
//! (deserialising).
//!
//! Every response carries a success flag and a human-readable message;
//! success payloads additionally carry the record or the list with its count.

use serde::{Deserialize, Serialize};

use crate::appointment::Appointment;

/// Envelope for a single appointment (booking, fetch, status update).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
  pub success:     bool,
  pub message:     String,
  pub appointment: Appointment,
}

/// Envelope for appointment lists (`GET /appointments`,
/// `GET /appointments/status/{status}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentListResponse {
  pub success:      bool,
  pub message:      String,
  pub count:        usize,
  pub appointments: Vec<Appointment>,
}

/// Envelope with no payload: health probe, deletions, and every error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
  pub success: bool,
  pub message: String,
}
