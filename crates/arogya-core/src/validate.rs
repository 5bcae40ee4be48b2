//! Booking payload validation.
//!
//! The same rules run in two places: the CLI client runs them before any
//! network call for immediate feedback, and the API runs them
//! authoritatively on every `POST /appointments`. Only the server's pass can
//! reject a request.
//!
//! Validation is also the parse step: a payload that passes comes out as a
//! typed [`NewAppointment`] ready for the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::appointment::NewAppointment;

// ─── Payload ─────────────────────────────────────────────────────────────────

/// A raw booking submission, exactly as it arrives over the wire.
///
/// Every field defaults to the empty string so an absent JSON key and an
/// empty value fail validation the same way (`MissingField`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingRequest {
  #[serde(default)]
  pub name:   String,
  #[serde(default)]
  pub email:  String,
  #[serde(default)]
  pub phone:  String,
  #[serde(default)]
  pub doctor: String,
  #[serde(default)]
  pub date:   String,
  #[serde(default)]
  pub time:   String,
  #[serde(default)]
  pub reason: String,
}

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Why a booking payload was rejected. The `Display` form is surfaced
/// verbatim as the API's error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("invalid email address")]
  InvalidEmail,

  #[error("invalid phone number")]
  InvalidPhone,

  #[error("unknown doctor: {0:?}")]
  UnknownDoctor(String),

  #[error("invalid date: {0:?} (expected YYYY-MM-DD)")]
  InvalidDate(String),

  #[error("appointment date cannot be in the past")]
  PastDate,
}

// ─── Rules ───────────────────────────────────────────────────────────────────

/// Validate `payload` against `today` and parse it into a [`NewAppointment`].
///
/// Checks run in a fixed order and the first failure wins: required fields,
/// email shape, phone shape, doctor set, date parse, date-not-in-past.
/// `today` is a parameter so the past-date rule is testable; comparison is at
/// day granularity and today itself is accepted.
pub fn validate(
  payload: &BookingRequest,
  today: NaiveDate,
) -> Result<NewAppointment, ValidationError> {
  let name = required("name", &payload.name)?;
  let email = required("email", &payload.email)?;
  let phone = required("phone", &payload.phone)?;
  let doctor_raw = required("doctor", &payload.doctor)?;
  let date_raw = required("date", &payload.date)?;
  let time = required("time", &payload.time)?;
  let reason = required("reason", &payload.reason)?;

  if !email_shape_ok(email) {
    return Err(ValidationError::InvalidEmail);
  }
  if !phone_shape_ok(phone) {
    return Err(ValidationError::InvalidPhone);
  }

  let doctor = doctor_raw
    .parse()
    .map_err(|_| ValidationError::UnknownDoctor(doctor_raw.to_owned()))?;

  let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
    .map_err(|_| ValidationError::InvalidDate(date_raw.to_owned()))?;

  if date < today {
    return Err(ValidationError::PastDate);
  }

  Ok(NewAppointment {
    name: name.to_owned(),
    email: email.to_owned(),
    phone: phone.to_owned(),
    doctor,
    date,
    time: time.to_owned(),
    reason: reason.to_owned(),
  })
}

/// Trim surrounding whitespace; an empty result means the field is missing.
fn required<'a>(
  field: &'static str,
  value: &'a str,
) -> Result<&'a str, ValidationError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    Err(ValidationError::MissingField(field))
  } else {
    Ok(trimmed)
  }
}

/// `local@domain.tld` shape: one-or-more characters that are neither
/// whitespace nor `@` on each side of the `@`, with at least one `.` in the
/// domain part.
fn email_shape_ok(email: &str) -> bool {
  let ok = |c: char| !c.is_whitespace() && c != '@';

  let Some((local, domain)) = email.split_once('@') else {
    return false;
  };
  let Some((host, tld)) = domain.rsplit_once('.') else {
    return false;
  };

  !local.is_empty()
    && !host.is_empty()
    && !tld.is_empty()
    && local.chars().all(ok)
    && host.chars().all(ok)
    && tld.chars().all(ok)
}

/// Digits, whitespace, hyphens, `+`, and parentheses only, at least 10
/// characters in total.
fn phone_shape_ok(phone: &str) -> bool {
  phone.chars().count() >= 10
    && phone
      .chars()
      .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '+' | '(' | ')'))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
