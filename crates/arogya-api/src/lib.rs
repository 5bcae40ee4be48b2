//! JSON REST API for the Arogya booking service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`arogya_core::store::AppointmentStore`] and
//! [`arogya_core::notify::Notifier`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", arogya_api::api_router(state))
//! ```

pub mod appointments;
pub mod error;

use std::sync::Arc;

use arogya_core::{
  notify::Notifier, response::MessageResponse, store::AppointmentStore,
};
use axum::{Json, Router, routing::get};

pub use error::ApiError;

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct ApiState<S, N> {
  pub store:    Arc<S>,
  pub notifier: Arc<N>,
}

// Manual impl so `S` and `N` don't need to be `Clone` themselves.
impl<S, N> Clone for ApiState<S, N> {
  fn clone(&self) -> Self {
    Self { store: self.store.clone(), notifier: self.notifier.clone() }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, N>(state: ApiState<S, N>) -> Router<()>
where
  S: AppointmentStore + 'static,
  N: Notifier + 'static,
{
  Router::new()
    .route(
      "/appointments",
      get(appointments::list::<S, N>).post(appointments::book::<S, N>),
    )
    .route(
      "/appointments/{id}",
      get(appointments::get_one::<S, N>)
        .put(appointments::update_status::<S, N>)
        .delete(appointments::delete_one::<S, N>),
    )
    .route(
      "/appointments/status/{status}",
      get(appointments::list_by_status::<S, N>),
    )
    .route("/health", get(health))
    .with_state(state)
}

/// `GET /health` — liveness probe.
async fn health() -> Json<MessageResponse> {
  Json(MessageResponse { success: true, message: "Server is running".into() })
}
