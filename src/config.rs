use anyhow::Context;

use crate::omdb::DEFAULT_BASE_URL;

#[derive(Clone, Debug)]
pub struct Config {
    pub omdb_api_key: String,
    pub omdb_base_url: String,
    pub database_url: String,
    pub http_timeout_secs: u64,
    pub clear_on_start: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let omdb_api_key = std::env::var("OMDB_API_KEY").unwrap_or_default();
        let omdb_base_url =
            std::env::var("OMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://movieshelf.db?mode=rwc".to_string());

        let http_timeout_secs: u64 = std::env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .context("HTTP_TIMEOUT_SECS")?;

        let clear_on_start = match std::env::var("CLEAR_ON_START") {
            Ok(v) => parse_flag(&v).context("CLEAR_ON_START")?,
            Err(_) => true,
        };

        Ok(Self { omdb_api_key, omdb_base_url, database_url, http_timeout_secs, clear_on_start })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}
