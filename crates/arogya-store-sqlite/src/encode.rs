//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings, calendar dates as `YYYY-MM-DD`,
//! UUIDs as hyphenated lowercase strings, and the two enums as their wire
//! identifiers.

use arogya_core::appointment::{Appointment, AppointmentStatus, Doctor};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Enums ───────────────────────────────────────────────────────────────────

pub fn encode_status(s: AppointmentStatus) -> &'static str { s.as_str() }

pub fn decode_status(s: &str) -> Result<AppointmentStatus> {
  Ok(s.parse::<AppointmentStatus>()?)
}

pub fn encode_doctor(d: Doctor) -> &'static str { d.as_str() }

pub fn decode_doctor(s: &str) -> Result<Doctor> { Ok(s.parse::<Doctor>()?) }

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw strings read directly from an `appointments` row.
pub struct RawAppointment {
  pub id:         String,
  pub name:       String,
  pub email:      String,
  pub phone:      String,
  pub doctor:     String,
  pub date:       String,
  pub time:       String,
  pub reason:     String,
  pub status:     String,
  pub created_at: String,
}

impl RawAppointment {
  pub fn into_appointment(self) -> Result<Appointment> {
    Ok(Appointment {
      id:         decode_uuid(&self.id)?,
      name:       self.name,
      email:      self.email,
      phone:      self.phone,
      doctor:     decode_doctor(&self.doctor)?,
      date:       decode_date(&self.date)?,
      time:       self.time,
      reason:     self.reason,
      status:     decode_status(&self.status)?,
      created_at: decode_dt(&self.created_at)?,
    })
  }
}
