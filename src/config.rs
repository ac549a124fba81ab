//! Scraper configuration: defaults, JSON file, environment overrides.

use crate::error::ConfigError;
use crate::tools::extract::DescriptionFilter;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 4_000;
pub const DEFAULT_ENRICH_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_MAX_DESCRIPTION_LEN: usize = 2_500;
pub const DEFAULT_PAGE_BASE_URL: &str = "https://pump.fun/";
pub const DEFAULT_AGGREGATOR_BASE_URL: &str = "http://127.0.0.1:3001/api";

/// Fixed settings for one scraper instance. Not mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Tokens scraped concurrently per batch; `None` runs the whole input as one batch.
    pub batch_size: Option<usize>,
    pub request_timeout_ms: u64,
    pub batch_delay_ms: u64,
    pub min_description_len: usize,
    pub max_description_len: usize,
    pub enrich_timeout_ms: u64,
    /// Token pages live at `<page_base_url>/<address>`.
    pub page_base_url: String,
    /// Serves `/list` and `/detail`.
    pub aggregator_base_url: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            batch_size: None,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            batch_delay_ms: 0,
            min_description_len: 0,
            max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
            enrich_timeout_ms: DEFAULT_ENRICH_TIMEOUT_MS,
            page_base_url: DEFAULT_PAGE_BASE_URL.to_string(),
            aggregator_base_url: DEFAULT_AGGREGATOR_BASE_URL.to_string(),
        }
    }
}

impl ScraperConfig {
    /// Resolve configuration: explicit file, else the user config file if present,
    /// else defaults. Environment overrides apply last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.exists()),
        };

        let mut cfg = match file {
            Some(p) => Self::from_file(&p)?,
            None => Self::default(),
        };
        cfg.apply_env(|key| std::env::var(key).ok())?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PUMPSCRAPE_AGGREGATOR_URL") {
            self.aggregator_base_url = v;
        }
        if let Some(v) = lookup("PUMPSCRAPE_PAGE_BASE_URL") {
            self.page_base_url = v;
        }
        if let Some(v) = lookup("PUMPSCRAPE_BATCH_SIZE") {
            self.batch_size = Some(parse_env("batch_size", &v)?);
        }
        if let Some(v) = lookup("PUMPSCRAPE_REQUEST_TIMEOUT_MS") {
            self.request_timeout_ms = parse_env("request_timeout_ms", &v)?;
        }
        if let Some(v) = lookup("PUMPSCRAPE_ENRICH_TIMEOUT_MS") {
            self.enrich_timeout_ms = parse_env("enrich_timeout_ms", &v)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch_size == Some(0) {
            return Err(ConfigError::Invalid {
                field: "batch_size",
                message: "must be greater than zero".into(),
            });
        }
        if self.max_description_len < self.min_description_len {
            return Err(ConfigError::Invalid {
                field: "max_description_len",
                message: format!(
                    "{} is below min_description_len {}",
                    self.max_description_len, self.min_description_len
                ),
            });
        }
        for (field, value) in [
            ("page_base_url", &self.page_base_url),
            ("aggregator_base_url", &self.aggregator_base_url),
        ] {
            url::Url::parse(value).map_err(|e| ConfigError::Invalid {
                field,
                message: format!("{value}: {e}"),
            })?;
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    pub fn enrich_timeout(&self) -> Duration {
        Duration::from_millis(self.enrich_timeout_ms)
    }

    pub fn description_filter(&self) -> DescriptionFilter {
        DescriptionFilter {
            min_len: self.min_description_len,
            max_len: self.max_description_len,
        }
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// `<config dir>/pumpscrape/config.json` for the current user.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("io", "pumpscrape", "pumpscrape")
        .map(|proj| proj.config_dir().join("config.json"))
}

fn parse_env<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        field,
        message: format!("{raw}: {e}"),
    })
}
