//! Integration tests for `SqliteStore` against an in-memory database.

use arogya_core::{
  appointment::{AppointmentStatus, Doctor, NewAppointment},
  store::AppointmentStore,
};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn booking(name: &str, email: &str) -> NewAppointment {
  NewAppointment {
    name:   name.into(),
    email:  email.into(),
    phone:  "9876543210".into(),
    doctor: Doctor::RakeshGupta,
    date:   NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
    time:   "10:00".into(),
    reason: "checkup".into(),
  }
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_roundtrip() {
  let s = store().await;

  let created = s.create(booking("Jane Doe", "jane@example.com")).await.unwrap();
  assert_eq!(created.status, AppointmentStatus::Pending);

  let fetched = s.get(created.id).await.unwrap().expect("stored record");
  assert_eq!(fetched.id, created.id);
  assert_eq!(fetched.name, "Jane Doe");
  assert_eq!(fetched.email, "jane@example.com");
  assert_eq!(fetched.phone, "9876543210");
  assert_eq!(fetched.doctor, Doctor::RakeshGupta);
  assert_eq!(fetched.date, NaiveDate::from_ymd_opt(2030, 1, 15).unwrap());
  assert_eq!(fetched.time, "10:00");
  assert_eq!(fetched.reason, "checkup");
  assert_eq!(fetched.status, AppointmentStatus::Pending);
  assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn create_lowercases_email() {
  let s = store().await;
  let created = s
    .create(booking("Jane Doe", "Jane.Doe@Example.COM"))
    .await
    .unwrap();
  assert_eq!(created.email, "jane.doe@example.com");

  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.email, "jane.doe@example.com");
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(Uuid::new_v4()).await.unwrap().is_none());
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_all_newest_first() {
  let s = store().await;

  let first = s.create(booking("First", "a@example.com")).await.unwrap();
  let second = s.create(booking("Second", "b@example.com")).await.unwrap();
  let third = s.create(booking("Third", "c@example.com")).await.unwrap();

  let all = s.list_all().await.unwrap();
  assert_eq!(all.len(), 3);
  assert_eq!(all[0].id, third.id);
  assert_eq!(all[1].id, second.id);
  assert_eq!(all[2].id, first.id);
}

#[tokio::test]
async fn list_by_status_filters() {
  let s = store().await;

  let a = s.create(booking("A", "a@example.com")).await.unwrap();
  let b = s.create(booking("B", "b@example.com")).await.unwrap();
  s.create(booking("C", "c@example.com")).await.unwrap();

  s.update_status(a.id, AppointmentStatus::Confirmed).await.unwrap();
  s.update_status(b.id, AppointmentStatus::Cancelled).await.unwrap();

  let confirmed = s
    .list_by_status(AppointmentStatus::Confirmed)
    .await
    .unwrap();
  assert_eq!(confirmed.len(), 1);
  assert_eq!(confirmed[0].id, a.id);

  let pending = s.list_by_status(AppointmentStatus::Pending).await.unwrap();
  assert_eq!(pending.len(), 1);
  assert_eq!(pending[0].name, "C");
}

#[tokio::test]
async fn reads_do_not_mutate() {
  let s = store().await;
  let created = s.create(booking("Jane", "jane@example.com")).await.unwrap();

  s.list_all().await.unwrap();
  s.get(created.id).await.unwrap();
  s.list_all().await.unwrap();

  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.status, AppointmentStatus::Pending);
  assert_eq!(fetched.created_at, created.created_at);
}

// ─── Status updates ──────────────────────────────────────────────────────────

#[tokio::test]
async fn update_status_replaces_status_only() {
  let s = store().await;
  let created = s.create(booking("Jane", "jane@example.com")).await.unwrap();

  let updated = s
    .update_status(created.id, AppointmentStatus::Confirmed)
    .await
    .unwrap()
    .expect("existing record");

  assert_eq!(updated.status, AppointmentStatus::Confirmed);
  assert_eq!(updated.name, created.name);
  assert_eq!(updated.date, created.date);
  assert_eq!(updated.created_at, created.created_at);

  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.status, AppointmentStatus::Confirmed);
}

#[tokio::test]
async fn update_status_missing_returns_none() {
  let s = store().await;
  let result = s
    .update_status(Uuid::new_v4(), AppointmentStatus::Confirmed)
    .await
    .unwrap();
  assert!(result.is_none());
}

// ─── Deletion ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_existing_then_get_is_none() {
  let s = store().await;
  let created = s.create(booking("Jane", "jane@example.com")).await.unwrap();

  assert!(s.delete(created.id).await.unwrap());
  assert!(s.get(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_returns_false() {
  let s = store().await;
  assert!(!s.delete(Uuid::new_v4()).await.unwrap());
}

// ─── Double booking ──────────────────────────────────────────────────────────

#[tokio::test]
async fn same_doctor_and_slot_can_be_booked_twice() {
  // No scheduling-conflict constraint exists by design.
  let s = store().await;
  let a = s.create(booking("Jane", "jane@example.com")).await.unwrap();
  let b = s.create(booking("John", "john@example.com")).await.unwrap();

  assert_ne!(a.id, b.id);
  assert_eq!(s.list_all().await.unwrap().len(), 2);
}
