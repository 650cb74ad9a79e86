//! Configuration management for tunequeue.
//!
//! Configuration values come from environment variables, optionally loaded
//! from a `.env` file in the local data directory:
//!
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! | Variable                  | Default        |
//! |---------------------------|----------------|
//! | `SERVER_ADDRESS`          | `127.0.0.1:8787` |
//! | `TUNEQUEUE_API_URL`       | required       |
//! | `TUNEQUEUE_DWELL_MS`      | `3000`         |
//! | `TUNEQUEUE_REPORT_POLICY` | `keep-pending` |

use std::{env, path::PathBuf, time::Duration};

use crate::queue::{DEFAULT_DWELL, QueueSettings, ReportPolicy};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8787";

/// Directory holding the `.env` file and the session cache.
///
/// - Linux: `~/.local/share/tunequeue`
/// - macOS: `~/Library/Application Support/tunequeue`
/// - Windows: `%LOCALAPPDATA%/tunequeue`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunequeue");
    path
}

/// Loads environment variables from `.env` in the local data directory.
///
/// A missing `.env` file is not an error; variables may come from the
/// environment alone.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        log::debug!("no env file at {}", path.display());
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

/// Address the local HTTP surface binds to.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Base URL of the music backend serving the default playlist and play counts.
pub fn api_url() -> Result<String, String> {
    env::var("TUNEQUEUE_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .map_err(|_| "TUNEQUEUE_API_URL must be set".to_string())
}

/// Dwell threshold before a play is reported.
pub fn dwell() -> Result<Duration, String> {
    match env::var("TUNEQUEUE_DWELL_MS") {
        Ok(raw) => parse_dwell(&raw),
        Err(_) => Ok(DEFAULT_DWELL),
    }
}

pub fn parse_dwell(raw: &str) -> Result<Duration, String> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| format!("invalid TUNEQUEUE_DWELL_MS '{}': {}", raw, e))
}

pub fn report_policy() -> Result<ReportPolicy, String> {
    match env::var("TUNEQUEUE_REPORT_POLICY") {
        Ok(raw) => raw.parse(),
        Err(_) => Ok(ReportPolicy::default()),
    }
}

pub fn queue_settings() -> Result<QueueSettings, String> {
    Ok(QueueSettings {
        dwell: dwell()?,
        policy: report_policy()?,
    })
}
