//! Handlers for `/appointments` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/appointments` | Validates, persists, fires best-effort emails |
//! | `GET`    | `/appointments` | All records, newest first |
//! | `GET`    | `/appointments/:id` | 404 if not found |
//! | `PUT`    | `/appointments/:id` | Body: `{"status":"confirmed"}` |
//! | `DELETE` | `/appointments/:id` | 404 if nothing was removed |
//! | `GET`    | `/appointments/status/:status` | Filtered list |

use arogya_core::{
  appointment::AppointmentStatus,
  notify::Notifier,
  response::{AppointmentListResponse, AppointmentResponse, MessageResponse},
  store::AppointmentStore,
  validate::{BookingRequest, validate},
};
use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::Local;
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiState, error::ApiError};

// ─── Booking ─────────────────────────────────────────────────────────────────

/// `POST /appointments`
///
/// Runs the authoritative validation pass, persists the record, and spawns
/// the notification dispatch in the background. Booking success is decided
/// solely by the write; mail failures are logged inside the spawned task.
pub async fn book<S, N>(
  State(state): State<ApiState<S, N>>,
  Json(payload): Json<BookingRequest>,
) -> Result<impl IntoResponse, ApiError>
where
  S: AppointmentStore,
  N: Notifier + 'static,
{
  let input = validate(&payload, Local::now().date_naive())?;

  let appointment = state
    .store
    .create(input)
    .await
    .map_err(ApiError::store)?;

  let notifier = state.notifier.clone();
  let booked = appointment.clone();
  tokio::spawn(async move {
    if let Err(e) = notifier.notify_booking(&booked).await {
      tracing::warn!(id = %booked.id, error = %e, "booking notification failed");
    }
  });

  Ok((
    StatusCode::CREATED,
    Json(AppointmentResponse {
      success: true,
      message: "Appointment booked successfully!".into(),
      appointment,
    }),
  ))
}

// ─── Reads ───────────────────────────────────────────────────────────────────

/// `GET /appointments`
pub async fn list<S, N>(
  State(state): State<ApiState<S, N>>,
) -> Result<Json<AppointmentListResponse>, ApiError>
where
  S: AppointmentStore,
  N: Notifier,
{
  let appointments = state.store.list_all().await.map_err(ApiError::store)?;
  Ok(Json(AppointmentListResponse {
    success: true,
    message: "Appointments fetched successfully".into(),
    count: appointments.len(),
    appointments,
  }))
}

/// `GET /appointments/:id`
pub async fn get_one<S, N>(
  State(state): State<ApiState<S, N>>,
  Path(id): Path<Uuid>,
) -> Result<Json<AppointmentResponse>, ApiError>
where
  S: AppointmentStore,
  N: Notifier,
{
  let appointment = state
    .store
    .get(id)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound(id))?;

  Ok(Json(AppointmentResponse {
    success: true,
    message: "Appointment fetched successfully".into(),
    appointment,
  }))
}

/// `GET /appointments/status/:status`
pub async fn list_by_status<S, N>(
  State(state): State<ApiState<S, N>>,
  Path(status): Path<String>,
) -> Result<Json<AppointmentListResponse>, ApiError>
where
  S: AppointmentStore,
  N: Notifier,
{
  let status: AppointmentStatus = status
    .parse()
    .map_err(|_| ApiError::InvalidStatus(status.clone()))?;

  let appointments = state
    .store
    .list_by_status(status)
    .await
    .map_err(ApiError::store)?;

  Ok(Json(AppointmentListResponse {
    success: true,
    message: "Appointments fetched successfully".into(),
    count: appointments.len(),
    appointments,
  }))
}

// ─── Status update ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
  #[serde(default)]
  pub status: String,
}

/// `PUT /appointments/:id` — body: `{"status":"pending|confirmed|cancelled"}`
pub async fn update_status<S, N>(
  State(state): State<ApiState<S, N>>,
  Path(id): Path<Uuid>,
  Json(body): Json<UpdateStatusBody>,
) -> Result<Json<AppointmentResponse>, ApiError>
where
  S: AppointmentStore,
  N: Notifier,
{
  let status: AppointmentStatus = body
    .status
    .parse()
    .map_err(|_| ApiError::InvalidStatus(body.status.clone()))?;

  let appointment = state
    .store
    .update_status(id, status)
    .await
    .map_err(ApiError::store)?
    .ok_or(ApiError::NotFound(id))?;

  Ok(Json(AppointmentResponse {
    success: true,
    message: "Appointment updated successfully".into(),
    appointment,
  }))
}

// ─── Deletion ────────────────────────────────────────────────────────────────

/// `DELETE /appointments/:id`
pub async fn delete_one<S, N>(
  State(state): State<ApiState<S, N>>,
  Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError>
where
  S: AppointmentStore,
  N: Notifier,
{
  let removed = state.store.delete(id).await.map_err(ApiError::store)?;
  if !removed {
    return Err(ApiError::NotFound(id));
  }

  Ok(Json(MessageResponse {
    success: true,
    message: "Appointment deleted successfully".into(),
  }))
}
