use anyhow::anyhow;
use anyhow::{Context, Result};
use common::utils::logging::LogFormat;
use serde::Deserialize;

/// Environment variable overriding `pagination.items_per_page`.
pub const ITEMS_PER_PAGE_ENV: &str = "PAGINATE_ITEMS_PER_PAGE";

/// Upper bound accepted for `pagination.items_per_page`.
pub const MAX_ITEMS_PER_PAGE: i64 = 10_000;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: i64,
    #[serde(default = "default_base")]
    pub base: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { items_per_page: default_items_per_page(), base: default_base() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_items_per_page() -> i64 { 20 }
fn default_base() -> i64 { 1 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {path}"))?;
    let cfg: AppConfig = toml::from_str(&content)
        .with_context(|| format!("parsing config {path}"))?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.pagination.normalize_from_env()?;
        self.pagination.validate()?;
        Ok(())
    }
}

impl PaginationConfig {
    /// Apply `PAGINATE_ITEMS_PER_PAGE`, then raise non-positive sizes to 1.
    pub fn normalize_from_env(&mut self) -> Result<()> {
        self.normalize_with(|key| std::env::var(key).ok())
    }

    /// Same as `normalize_from_env`, reading variables through `lookup`.
    pub fn normalize_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ITEMS_PER_PAGE_ENV) {
            self.items_per_page = raw
                .trim()
                .parse::<i64>()
                .map_err(|e| anyhow!("{ITEMS_PER_PAGE_ENV}={raw:?} is not an integer: {e}"))?;
        }
        self.normalize();
        Ok(())
    }

    fn normalize(&mut self) {
        if self.items_per_page < 1 {
            self.items_per_page = 1;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.items_per_page > MAX_ITEMS_PER_PAGE {
            return Err(anyhow!(
                "pagination.items_per_page must be <= {MAX_ITEMS_PER_PAGE}, got {}",
                self.items_per_page
            ));
        }
        Ok(())
    }
}
