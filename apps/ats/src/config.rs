use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory uploaded resumes are written to before extraction.
    pub upload_dir: PathBuf,
    /// File the CSV export is (over)written to.
    pub export_path: PathBuf,
    pub max_upload_bytes: usize,
    /// Optional TOML file overriding the scoring heuristics.
    pub scoring_config_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "uploads")),
            export_path: PathBuf::from(env_or("EXPORT_PATH", "ATS_Results.csv")),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "26214400")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            scoring_config_path: std::env::var("ATS_SCORING_CONFIG")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
