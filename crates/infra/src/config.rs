//! Configuration loading and representation.
//!
//! Everything comes from environment variables. `from_lookup` takes the lookup
//! as a closure so tests never touch the process environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::LoadError;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_REVIEW_SUBMIT_URL: &str = "https://aigoretech.rf.gd/kirim-ulasan";
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 60;

/// Source and snapshot locations of the catalogue files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CataloguePaths {
    pub products_txt: PathBuf,
    pub reviews_txt: PathBuf,
    pub products_json: PathBuf,
    pub reviews_json: PathBuf,
}

impl Default for CataloguePaths {
    fn default() -> Self {
        Self {
            products_txt: PathBuf::from("products.txt"),
            reviews_txt: PathBuf::from("review_links.txt"),
            products_json: PathBuf::from("products.json"),
            reviews_json: PathBuf::from("review_links.json"),
        }
    }
}

/// Process configuration for the bot binary.
#[derive(Clone, PartialEq, Eq)]
pub struct BotConfig {
    pub telegram_token: String,
    pub api_base_url: String,
    pub poll_timeout: Duration,
    /// Log every transport request/response at debug level.
    pub debug: bool,
    /// Shown when a review link is missing.
    pub review_submit_url: String,
    pub paths: CataloguePaths,
}

impl core::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BotConfig")
            .field("telegram_token", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("poll_timeout", &self.poll_timeout)
            .field("debug", &self.debug)
            .field("review_submit_url", &self.review_submit_url)
            .field("paths", &self.paths)
            .finish()
    }
}

impl BotConfig {
    pub fn from_env() -> Result<Self, LoadError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let telegram_token = lookup("TELEGRAM_BOT_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| LoadError::config("TELEGRAM_BOT_TOKEN is not set"))?;

        let defaults = CataloguePaths::default();
        let path = |key: &str, default: PathBuf| lookup(key).map(PathBuf::from).unwrap_or(default);
        let paths = CataloguePaths {
            products_txt: path("BOKFINDER_PRODUCTS_TXT", defaults.products_txt),
            reviews_txt: path("BOKFINDER_REVIEWS_TXT", defaults.reviews_txt),
            products_json: path("BOKFINDER_PRODUCTS_JSON", defaults.products_json),
            reviews_json: path("BOKFINDER_REVIEWS_JSON", defaults.reviews_json),
        };

        let poll_timeout_secs = match lookup("BOKFINDER_POLL_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                LoadError::config(format!("BOKFINDER_POLL_TIMEOUT_SECS={raw:?}: {e}"))
            })?,
            None => DEFAULT_POLL_TIMEOUT_SECS,
        };

        let debug = match lookup("BOKFINDER_DEBUG") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| LoadError::config(format!("BOKFINDER_DEBUG={raw:?}: expected a boolean")))?,
            None => true,
        };

        Ok(Self {
            telegram_token,
            api_base_url: lookup("TELEGRAM_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            poll_timeout: Duration::from_secs(poll_timeout_secs),
            debug,
            review_submit_url: lookup("BOKFINDER_REVIEW_SUBMIT_URL")
                .unwrap_or_else(|| DEFAULT_REVIEW_SUBMIT_URL.to_string()),
            paths,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
