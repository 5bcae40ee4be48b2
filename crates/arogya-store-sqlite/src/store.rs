//! [`SqliteStore`] — the SQLite implementation of [`AppointmentStore`].

use std::path::Path;

use arogya_core::{
  appointment::{Appointment, AppointmentStatus, NewAppointment},
  store::AppointmentStore,
};
use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use crate::{
  encode::{
    RawAppointment, encode_date, encode_doctor, encode_dt, encode_status,
    encode_uuid,
  },
  schema::SCHEMA,
  Error, Result,
};

const COLUMNS: &str =
  "id, name, email, phone, doctor, date, time, reason, status, created_at";

fn raw_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawAppointment> {
  Ok(RawAppointment {
    id:         row.get(0)?,
    name:       row.get(1)?,
    email:      row.get(2)?,
    phone:      row.get(3)?,
    doctor:     row.get(4)?,
    date:       row.get(5)?,
    time:       row.get(6)?,
    reason:     row.get(7)?,
    status:     row.get(8)?,
    created_at: row.get(9)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An appointment store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── AppointmentStore impl ───────────────────────────────────────────────────

impl AppointmentStore for SqliteStore {
  type Error = Error;

  async fn create(&self, input: NewAppointment) -> Result<Appointment> {
    // Normalisation happens here, not in the storage engine: the source
    // system relied on schema-level lowercasing, which this store makes
    // explicit.
    let appointment = Appointment {
      id:         Uuid::new_v4(),
      name:       input.name,
      email:      input.email.to_lowercase(),
      phone:      input.phone,
      doctor:     input.doctor,
      date:       input.date,
      time:       input.time,
      reason:     input.reason,
      status:     AppointmentStatus::Pending,
      created_at: Utc::now(),
    };

    let id_str      = encode_uuid(appointment.id);
    let name        = appointment.name.clone();
    let email       = appointment.email.clone();
    let phone       = appointment.phone.clone();
    let doctor_str  = encode_doctor(appointment.doctor).to_owned();
    let date_str    = encode_date(appointment.date);
    let time        = appointment.time.clone();
    let reason      = appointment.reason.clone();
    let status_str  = encode_status(appointment.status).to_owned();
    let created_str = encode_dt(appointment.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO appointments (
             id, name, email, phone, doctor, date, time, reason,
             status, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
          rusqlite::params![
            id_str, name, email, phone, doctor_str, date_str, time, reason,
            status_str, created_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(appointment)
  }

  async fn get(&self, id: Uuid) -> Result<Option<Appointment>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawAppointment> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLUMNS} FROM appointments WHERE id = ?1"),
              rusqlite::params![id_str],
              raw_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawAppointment::into_appointment).transpose()
  }

  async fn list_all(&self) -> Result<Vec<Appointment>> {
    let raws: Vec<RawAppointment> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {COLUMNS} FROM appointments ORDER BY created_at DESC"
        ))?;
        let rows = stmt
          .query_map([], raw_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAppointment::into_appointment).collect()
  }

  async fn list_by_status(
    &self,
    status: AppointmentStatus,
  ) -> Result<Vec<Appointment>> {
    let status_str = encode_status(status).to_owned();

    let raws: Vec<RawAppointment> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {COLUMNS} FROM appointments WHERE status = ?1"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![status_str], raw_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawAppointment::into_appointment).collect()
  }

  async fn update_status(
    &self,
    id: Uuid,
    status: AppointmentStatus,
  ) -> Result<Option<Appointment>> {
    let id_str     = encode_uuid(id);
    let status_str = encode_status(status).to_owned();

    let changed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE appointments SET status = ?1 WHERE id = ?2",
          rusqlite::params![status_str, id_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Ok(None);
    }
    self.get(id).await
  }

  async fn delete(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let removed: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM appointments WHERE id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(removed > 0)
  }
}
