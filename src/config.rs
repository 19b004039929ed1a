//! Command-line and environment configuration.
//!
//! Every option can be given as a flag or through the environment (a `.env`
//! file in the working directory is loaded first).  The API key has no
//! default: startup fails with [`ConfigError::MissingApiKey`] when it is
//! absent.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::carousel::CarouselLayout;
use crate::error::ConfigError;
use crate::source::NewsApiConfig;

/// Log file name used when `--log-file` is not given.
pub const DEFAULT_LOG_FILE: &str = "headline-carousel.log";

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// News API token
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Top-headlines endpoint
    #[arg(
        long,
        env = "NEWS_ENDPOINT",
        default_value = "https://newsapi.org/v2/top-headlines"
    )]
    pub endpoint: String,

    /// Two-letter country filter
    #[arg(long, env = "NEWS_COUNTRY", default_value = "us")]
    pub country: String,

    /// Maximum number of articles requested
    #[arg(long, env = "NEWS_PAGE_SIZE", default_value_t = 10)]
    pub page_size: u32,

    /// Request timeout in seconds
    #[arg(long, env = "NEWS_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// How long a successful fetch is reused, in seconds
    #[arg(long, env = "NEWS_CACHE_TTL_SECS", default_value_t = 3600)]
    pub cache_ttl_secs: u64,

    /// Number of fully visible cards
    #[arg(long, default_value_t = 3)]
    pub window_size: usize,

    /// Card width in pixels, used for the track offset
    #[arg(long, default_value_t = 423)]
    pub card_width: u32,

    /// Gap between cards in pixels
    #[arg(long, default_value_t = 24)]
    pub gap: u32,

    /// Title truncation length in characters
    #[arg(long, default_value_t = 60)]
    pub title_limit: usize,

    /// Description truncation length in characters
    #[arg(long, default_value_t = 100)]
    pub description_limit: usize,

    /// Append logs to this file [default: headline-carousel.log in the temp directory]
    #[arg(long, env = "HEADLINE_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Check values that clap cannot express on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.api_key.as_deref().map(str::trim) {
            None | Some("") => return Err(ConfigError::MissingApiKey),
            Some(_) => {}
        }
        if self.page_size == 0 {
            return Err(invalid("page_size", "must be a positive integer"));
        }
        if self.window_size == 0 {
            return Err(invalid("window_size", "must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("timeout_secs", "must be at least 1"));
        }
        if self.country.trim().is_empty() {
            return Err(invalid("country", "must not be empty"));
        }
        reqwest::Url::parse(&self.endpoint).map_err(|e| invalid("endpoint", e.to_string()))?;
        Ok(())
    }

    /// Settings for the headline request.  Call after [`validate`](Self::validate).
    pub fn news_api(&self) -> NewsApiConfig {
        NewsApiConfig {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone().unwrap_or_default().trim().to_string(),
            country: self.country.trim().to_string(),
            page_size: self.page_size,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Where logs go.  Stdout belongs to the TUI, so they always go to a file.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn layout(&self) -> CarouselLayout {
        CarouselLayout {
            window_size: self.window_size,
            card_width: self.card_width,
            gap: self.gap,
            title_limit: self.title_limit,
            description_limit: self.description_limit,
        }
    }
}

fn invalid(key: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        message: message.into(),
    }
}
