//! The `AppointmentStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `arogya-store-sqlite`).
//! Higher layers (`arogya-api`, `arogya-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::appointment::{Appointment, AppointmentStatus, NewAppointment};

/// Abstraction over an appointment store backend.
///
/// The store owns the authoritative copy of every record. Apart from the
/// status field, records are immutable once created; there is no partial
/// update operation by design.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait AppointmentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a validated booking and return the stored record.
  ///
  /// The store assigns the id and creation timestamp, lowercases the email,
  /// and forces the status to [`AppointmentStatus::Pending`] regardless of
  /// anything the caller might have wanted.
  fn create(
    &self,
    input: NewAppointment,
  ) -> impl Future<Output = Result<Appointment, Self::Error>> + Send + '_;

  /// Retrieve an appointment by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Appointment>, Self::Error>> + Send + '_;

  /// List every appointment, ordered by creation time, most recent first.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Appointment>, Self::Error>> + Send + '_;

  /// List appointments with the given status. No ordering guarantee.
  fn list_by_status(
    &self,
    status: AppointmentStatus,
  ) -> impl Future<Output = Result<Vec<Appointment>, Self::Error>> + Send + '_;

  /// Replace the status of an existing appointment and return the updated
  /// record. Returns `None` if the id is unknown. No other field changes.
  fn update_status(
    &self,
    id: Uuid,
    status: AppointmentStatus,
  ) -> impl Future<Output = Result<Option<Appointment>, Self::Error>> + Send + '_;

  /// Remove an appointment. Returns whether a record existed.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
