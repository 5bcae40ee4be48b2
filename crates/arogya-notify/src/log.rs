//! [`LogNotifier`] — tracing-only stand-in for deployments without mail
//! credentials.

use std::convert::Infallible;

use arogya_core::{appointment::Appointment, notify::Notifier};

/// Logs the would-be notification instead of sending mail.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
  type Error = Infallible;

  async fn notify_booking(
    &self,
    appointment: &Appointment,
  ) -> Result<(), Infallible> {
    tracing::info!(
      id = %appointment.id,
      email = %appointment.email,
      doctor = %appointment.doctor,
      date = %appointment.date,
      time = %appointment.time,
      "mail transport not configured; skipping booking emails"
    );
    Ok(())
  }
}
