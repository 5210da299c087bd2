use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use url::Url;

use crate::site::Site;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory relative output paths are resolved against
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Per-site scraping settings
    #[serde(default = "default_sites")]
    pub sites: Vec<SiteConfig>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// HTTP client configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Scraping settings for one wiki site
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SiteConfig {
    // @field: Site identifier
    pub site: Site,

    // @field: Whether the site is processed by default
    #[serde(default = "default_true")]
    pub enabled: bool,

    // @field: History page URL
    #[serde(default = "String::new")]
    pub url: String,

    // @field: Character pool YAML file
    #[serde(default = "String::new")]
    pub character_output: String,

    // @field: Weapon / light cone pool YAML file
    #[serde(default = "String::new")]
    pub item_output: String,
}

impl SiteConfig {
    // @param site: Site enum
    // @returns: Site config with defaults
    pub fn new(site: Site) -> Self {
        Self {
            site,
            enabled: true,
            url: site.default_url().to_string(),
            character_output: site.default_character_output().to_string(),
            item_output: site.default_item_output().to_string(),
        }
    }

    /// URL, falling back to the site default when left empty
    pub fn get_url(&self) -> String {
        if self.url.is_empty() {
            self.site.default_url().to_string()
        } else {
            self.url.clone()
        }
    }

    pub fn get_character_output(&self) -> String {
        if self.character_output.is_empty() {
            self.site.default_character_output().to_string()
        } else {
            self.character_output.clone()
        }
    }

    pub fn get_item_output(&self) -> String {
        if self.item_output.is_empty() {
            self.site.default_item_output().to_string()
        } else {
            self.item_output.clone()
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("gacha-history/{}", env!("CARGO_PKG_VERSION"))
}

fn default_true() -> bool {
    true
}

fn default_sites() -> Vec<SiteConfig> {
    Site::ALL.iter().map(|site| SiteConfig::new(*site)).collect()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.http.timeout_secs == 0 {
            return Err(anyhow!("HTTP timeout must be greater than zero"));
        }

        if !self.sites.iter().any(|s| s.enabled) {
            return Err(anyhow!("At least one site must be enabled"));
        }

        let mut seen = HashSet::new();
        for site_config in &self.sites {
            if !seen.insert(site_config.site) {
                return Err(anyhow!("Site '{}' is configured more than once", site_config.site));
            }

            let url = site_config.get_url();
            let parsed = Url::parse(&url)
                .map_err(|e| anyhow!("Invalid URL for site '{}': {} ({})", site_config.site, url, e))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(anyhow!("URL for site '{}' must be http(s): {}", site_config.site, url));
            }

            if site_config.get_character_output().trim().is_empty()
                || site_config.get_item_output().trim().is_empty()
            {
                return Err(anyhow!("Output paths for site '{}' must not be empty", site_config.site));
            }
        }

        Ok(())
    }

    /// Get the configuration for a specific site
    pub fn get_site_config(&self, site: Site) -> Option<&SiteConfig> {
        self.sites.iter().find(|s| s.site == site)
    }

    /// Sites to process when none is requested explicitly
    pub fn enabled_sites(&self) -> Vec<Site> {
        self.sites.iter().filter(|s| s.enabled).map(|s| s.site).collect()
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            http: HttpConfig::default(),
            sites: default_sites(),
            log_level: LogLevel::default(),
        }
    }
}
