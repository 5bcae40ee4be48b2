//! arogya-server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens an
//! in-process SQLite store, and serves the booking API under `/api`.
//! Every setting can also be supplied through the environment, e.g.
//! `AROGYA_PORT=8080` or `AROGYA_MAIL__SMTP_HOST=smtp.example.com`.

mod config_file;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use anyhow::Context as _;
use arogya_api::ApiState;
use arogya_notify::{LogNotifier, SmtpNotifier};
use arogya_store_sqlite::SqliteStore;
use axum::Router;
use clap::Parser;
use config_file::ServerConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Arogya appointment booking server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("AROGYA").separator("__"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let store_path = expand_tilde(&server_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let api = match &server_cfg.mail {
    Some(mail) => {
      let notifier =
        SmtpNotifier::new(mail).context("invalid mail configuration")?;
      tracing::info!(smtp_host = %mail.smtp_host, "smtp notifier configured");
      arogya_api::api_router(ApiState {
        store:    Arc::new(store),
        notifier: Arc::new(notifier),
      })
    }
    None => {
      tracing::warn!(
        "no [mail] configuration; booking emails will be logged, not sent"
      );
      arogya_api::api_router(ApiState {
        store:    Arc::new(store),
        notifier: Arc::new(LogNotifier),
      })
    }
  };

  let app = Router::new()
    .nest("/api", api)
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!("Listening on http://{address}");

  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
