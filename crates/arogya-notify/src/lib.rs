//! Booking notifications for Arogya.
//!
//! Implements the [`arogya_core::notify::Notifier`] seam twice: over SMTP
//! (lettre) for real deployments, and as a tracing-only fallback for
//! installations without mail credentials. Either way dispatch is
//! best-effort; the booking has already been persisted by the time a
//! notifier runs.

mod log;
mod smtp;
mod template;

pub use log::LogNotifier;
pub use smtp::{Error, MailConfig, SmtpNotifier};
