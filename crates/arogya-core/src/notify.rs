//! The `Notifier` trait — the seam between booking and email dispatch.

use std::future::Future;

use crate::appointment::Appointment;

/// Sends the post-booking notifications: a confirmation to the patient and a
/// notice to the clinic's admin address.
///
/// Dispatch is best-effort. Callers log failures and move on; a failed send
/// must never fail or roll back the booking that triggered it.
pub trait Notifier: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn notify_booking<'a>(
    &'a self,
    appointment: &'a Appointment,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
