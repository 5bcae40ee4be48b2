//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error body is the common `{success: false, message}` envelope.
//! Validation failures and bad status strings are the client's fault (400),
//! unknown ids are 404, and anything the store throws is a 500.

use arogya_core::{response::MessageResponse, validate::ValidationError};
use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  Validation(#[from] ValidationError),

  #[error("invalid status: {0:?}")]
  InvalidStatus(String),

  #[error("appointment {0} not found")]
  NotFound(Uuid),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Wrap a backend error; used by every handler's store calls.
  pub fn store<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
    Self::Store(Box::new(e))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::Validation(_) | ApiError::InvalidStatus(_) => {
        StatusCode::BAD_REQUEST
      }
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
      tracing::error!(error = %self, "request failed");
    }

    let body = MessageResponse { success: false, message: self.to_string() };
    (status, Json(body)).into_response()
  }
}
