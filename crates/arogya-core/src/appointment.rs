//! Appointment — the sole entity of the booking service.
//!
//! A record is created with status `pending` and, apart from that status,
//! never mutates. The store owns the authoritative copy; everything else
//! holds request-scoped clones.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
  Pending,
  Confirmed,
  Cancelled,
}

impl AppointmentStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Pending => "pending",
      Self::Confirmed => "confirmed",
      Self::Cancelled => "cancelled",
    }
  }
}

impl FromStr for AppointmentStatus {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(Self::Pending),
      "confirmed" => Ok(Self::Confirmed),
      "cancelled" => Ok(Self::Cancelled),
      other => Err(Error::InvalidStatus(other.to_owned())),
    }
  }
}

impl fmt::Display for AppointmentStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Doctor ──────────────────────────────────────────────────────────────────

/// The clinic's practitioners. The wire form is the kebab-case identifier
/// (e.g. `"rakesh-gupta"`); [`Doctor::display_name`] is what patients see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Doctor {
  RakeshGupta,
  AshishRanjan,
  ShaliniKrishna,
  EmilyWatson,
  DavidKumar,
  LisaAnderson,
}

impl Doctor {
  pub const ALL: [Doctor; 6] = [
    Doctor::RakeshGupta,
    Doctor::AshishRanjan,
    Doctor::ShaliniKrishna,
    Doctor::EmilyWatson,
    Doctor::DavidKumar,
    Doctor::LisaAnderson,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::RakeshGupta => "rakesh-gupta",
      Self::AshishRanjan => "ashish-ranjan",
      Self::ShaliniKrishna => "shalini-krishna",
      Self::EmilyWatson => "emily-watson",
      Self::DavidKumar => "david-kumar",
      Self::LisaAnderson => "lisa-anderson",
    }
  }

  /// Patient-facing name with specialty, used in confirmation emails.
  pub fn display_name(&self) -> &'static str {
    match self {
      Self::RakeshGupta => "Dr. Rakesh Gupta (General Medicine)",
      Self::AshishRanjan => "Dr. Ashish Ranjan (Pediatrics)",
      Self::ShaliniKrishna => "Dr. Shalini Krishna (Ophthalmology)",
      Self::EmilyWatson => "Dr. Emily Watson (Dermatology)",
      Self::DavidKumar => "Dr. David Kumar (Orthopedics)",
      Self::LisaAnderson => "Dr. Lisa Anderson (Cardiology)",
    }
  }
}

impl FromStr for Doctor {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "rakesh-gupta" => Ok(Self::RakeshGupta),
      "ashish-ranjan" => Ok(Self::AshishRanjan),
      "shalini-krishna" => Ok(Self::ShaliniKrishna),
      "emily-watson" => Ok(Self::EmilyWatson),
      "david-kumar" => Ok(Self::DavidKumar),
      "lisa-anderson" => Ok(Self::LisaAnderson),
      other => Err(Error::UnknownDoctor(other.to_owned())),
    }
  }
}

impl fmt::Display for Doctor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Appointment ─────────────────────────────────────────────────────────────

/// A persisted appointment record.
///
/// `id` and `created_at` are store-assigned on creation; `status` is the only
/// field that ever changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
  pub id:         Uuid,
  pub name:       String,
  /// Stored lowercased.
  pub email:      String,
  pub phone:      String,
  pub doctor:     Doctor,
  pub date:       NaiveDate,
  /// Free-text time of day, e.g. `"14:30"`.
  pub time:       String,
  pub reason:     String,
  pub status:     AppointmentStatus,
  pub created_at: DateTime<Utc>,
}

// ─── NewAppointment ──────────────────────────────────────────────────────────

/// Validated input to [`crate::store::AppointmentStore::create`].
///
/// Produced by [`crate::validate::validate`]; fields are already trimmed and
/// parsed. `id`, `created_at`, and `status` are always set by the store and
/// never accepted from callers.
#[derive(Debug, Clone)]
pub struct NewAppointment {
  pub name:   String,
  pub email:  String,
  pub phone:  String,
  pub doctor: Doctor,
  pub date:   NaiveDate,
  pub time:   String,
  pub reason: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_roundtrips_through_str() {
    for s in ["pending", "confirmed", "cancelled"] {
      let status: AppointmentStatus = s.parse().unwrap();
      assert_eq!(status.as_str(), s);
    }
  }

  #[test]
  fn bogus_status_is_rejected() {
    let err = "bogus".parse::<AppointmentStatus>().unwrap_err();
    assert!(matches!(err, Error::InvalidStatus(ref s) if s == "bogus"));
  }

  #[test]
  fn every_doctor_has_a_display_name() {
    for doctor in Doctor::ALL {
      let name = doctor.display_name();
      assert!(name.starts_with("Dr. "), "display name: {name}");
      // identifier form parses back
      assert_eq!(doctor.as_str().parse::<Doctor>().unwrap(), doctor);
    }
  }

  #[test]
  fn doctor_serde_uses_kebab_case() {
    let json = serde_json::to_string(&Doctor::RakeshGupta).unwrap();
    assert_eq!(json, "\"rakesh-gupta\"");
  }
}
