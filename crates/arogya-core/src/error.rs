//! Error types for `arogya-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A status string outside the `pending`/`confirmed`/`cancelled` set.
  #[error("invalid status: {0:?}")]
  InvalidStatus(String),

  /// A doctor identifier outside the clinic's practitioner set.
  #[error("unknown doctor: {0:?}")]
  UnknownDoctor(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
