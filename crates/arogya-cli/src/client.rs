//! Async HTTP client wrapping the Arogya JSON API.

use std::time::Duration;

use arogya_core::{
  response::{AppointmentListResponse, AppointmentResponse, MessageResponse},
  validate::BookingRequest,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

/// Connection settings for the booking API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Why an API call did not produce its payload. The two variants matter to
/// the caller: a [`Rejected`](ClientError::Rejected) carries the server's
/// message, while a transport failure means the server was never reached.
#[derive(Debug, Error)]
pub enum ClientError {
  /// The server answered and said no.
  #[error("{0}")]
  Rejected(String),

  /// The request never completed: connection refused, timeout, bad URL.
  #[error("connection error: {0}")]
  Transport(#[from] reqwest::Error),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

/// Async HTTP client for the Arogya JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
  }

  /// Decode a success payload, or surface the server's error envelope as
  /// [`ClientError::Rejected`].
  async fn decode<T: DeserializeOwned>(
    resp: reqwest::Response,
  ) -> Result<T> {
    let status = resp.status();
    if status.is_success() {
      return Ok(resp.json().await?);
    }

    let message = match resp.json::<MessageResponse>().await {
      Ok(envelope) => envelope.message,
      Err(_) => format!("server returned {status}"),
    };
    Err(ClientError::Rejected(message))
  }

  /// `POST /api/appointments`
  pub async fn book(
    &self,
    payload: &BookingRequest,
  ) -> Result<AppointmentResponse> {
    let resp = self
      .client
      .post(self.url("/appointments"))
      .json(payload)
      .send()
      .await?;
    Self::decode(resp).await
  }

  /// `GET /api/appointments`
  pub async fn list(&self) -> Result<AppointmentListResponse> {
    let resp = self.client.get(self.url("/appointments")).send().await?;
    Self::decode(resp).await
  }

  /// `GET /api/appointments/{id}`
  pub async fn get(&self, id: Uuid) -> Result<AppointmentResponse> {
    let resp = self
      .client
      .get(self.url(&format!("/appointments/{id}")))
      .send()
      .await?;
    Self::decode(resp).await
  }

  /// `GET /api/appointments/status/{status}`
  pub async fn list_by_status(
    &self,
    status: &str,
  ) -> Result<AppointmentListResponse> {
    let resp = self
      .client
      .get(self.url(&format!("/appointments/status/{status}")))
      .send()
      .await?;
    Self::decode(resp).await
  }

  /// `PUT /api/appointments/{id}`
  pub async fn update_status(
    &self,
    id: Uuid,
    status: &str,
  ) -> Result<AppointmentResponse> {
    let resp = self
      .client
      .put(self.url(&format!("/appointments/{id}")))
      .json(&serde_json::json!({ "status": status }))
      .send()
      .await?;
    Self::decode(resp).await
  }

  /// `DELETE /api/appointments/{id}`
  pub async fn delete(&self, id: Uuid) -> Result<MessageResponse> {
    let resp = self
      .client
      .delete(self.url(&format!("/appointments/{id}")))
      .send()
      .await?;
    Self::decode(resp).await
  }

  /// `GET /api/health`
  pub async fn health(&self) -> Result<MessageResponse> {
    let resp = self.client.get(self.url("/health")).send().await?;
    Self::decode(resp).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn url_joins_base_and_path() {
    let client = ApiClient::new(ApiConfig {
      base_url: "http://localhost:5000/".into(),
    })
    .unwrap();
    assert_eq!(
      client.url("/appointments"),
      "http://localhost:5000/api/appointments"
    );
  }
}
