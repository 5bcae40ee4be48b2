//! Runtime server configuration, deserialised from `config.toml` and the
//! `AROGYA_*` environment.

use std::path::PathBuf;

use arogya_notify::MailConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// Optional `[mail]` table. When absent, booking emails are logged
  /// instead of sent.
  #[serde(default)]
  pub mail:       Option<MailConfig>,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 5000 }

fn default_store_path() -> PathBuf { PathBuf::from("arogya.db") }
