//! [`SmtpNotifier`] — lettre-backed mail dispatch.

use arogya_core::{appointment::Appointment, notify::Notifier};
use lettre::{
  AsyncSmtpTransport, AsyncTransport as _, Message, Tokio1Executor,
  message::{Mailbox, header::ContentType},
  transport::smtp::authentication::Credentials,
};
use serde::Deserialize;
use thiserror::Error;

use crate::template;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Outgoing-mail settings, deserialised from the server's `[mail]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
  pub smtp_host:     String,
  pub smtp_username: String,
  pub smtp_password: String,
  /// Sender for both emails.
  pub from_address:  String,
  /// Where the booking notice goes.
  pub admin_address: String,
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid mail address: {0}")]
  Address(#[from] lettre::address::AddressError),

  #[error("message build error: {0}")]
  Message(#[from] lettre::error::Error),

  #[error("smtp error: {0}")]
  Smtp(#[from] lettre::transport::smtp::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// ─── Notifier ────────────────────────────────────────────────────────────────

/// Sends the patient confirmation and the admin notice over SMTP (TLS).
///
/// Cheap to clone — the transport holds a shared connection pool.
#[derive(Clone)]
pub struct SmtpNotifier {
  transport: AsyncSmtpTransport<Tokio1Executor>,
  from:      Mailbox,
  admin:     Mailbox,
}

impl SmtpNotifier {
  pub fn new(config: &MailConfig) -> Result<Self> {
    let transport =
      AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        .credentials(Credentials::new(
          config.smtp_username.clone(),
          config.smtp_password.clone(),
        ))
        .build();

    Ok(Self {
      transport,
      from: config.from_address.parse()?,
      admin: config.admin_address.parse()?,
    })
  }

  fn patient_message(&self, appointment: &Appointment) -> Result<Message> {
    Ok(
      Message::builder()
        .from(self.from.clone())
        .to(appointment.email.parse()?)
        .subject(template::patient_subject())
        .header(ContentType::TEXT_HTML)
        .body(template::patient_body(appointment))?,
    )
  }

  fn admin_message(&self, appointment: &Appointment) -> Result<Message> {
    Ok(
      Message::builder()
        .from(self.from.clone())
        .to(self.admin.clone())
        .subject(template::admin_subject())
        .header(ContentType::TEXT_HTML)
        .body(template::admin_body(appointment))?,
    )
  }
}

impl Notifier for SmtpNotifier {
  type Error = Error;

  async fn notify_booking(&self, appointment: &Appointment) -> Result<()> {
    let patient = self.patient_message(appointment)?;
    let admin = self.admin_message(appointment)?;

    // Attempt both sends even if the first fails; the admin notice should
    // not depend on the patient's mailbox being reachable.
    let patient_sent = self.transport.send(patient).await;
    if let Err(e) = &patient_sent {
      tracing::warn!(
        email = %appointment.email,
        error = %e,
        "patient confirmation email failed"
      );
    }

    let admin_sent = self.transport.send(admin).await;
    if let Err(e) = &admin_sent {
      tracing::warn!(error = %e, "admin notification email failed");
    }

    patient_sent?;
    admin_sent?;
    Ok(())
  }
}
