use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Validation failures for a loaded config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("custom_scheme must not be empty")]
    EmptyScheme,
    #[error("custom_scheme {0:?} is not a valid URL scheme")]
    InvalidScheme(String),
    #[error("custom_scheme {0:?} collides with a built-in scheme")]
    ReservedScheme(String),
    #[error("universal_hosts must list at least one host")]
    NoUniversalHosts,
    #[error("universal host {0:?} is not a bare hostname")]
    InvalidHost(String),
    #[error("quick_action_prefix must not be empty")]
    EmptyQuickActionPrefix,
}

/// Classifier configuration loaded from `~/.config/linkdispatch/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// The app's own URL scheme (`<scheme>://...`).
    pub custom_scheme: String,
    /// HTTPS hosts whose links the OS hands to the app. A `www.` prefix is
    /// accepted implicitly.
    pub universal_hosts: Vec<String>,
    /// Prefix of home-screen quick action identifiers.
    #[serde(default = "default_quick_action_prefix")]
    pub quick_action_prefix: String,
}

fn default_quick_action_prefix() -> String {
    "mega.ios".to_string()
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            custom_scheme: "mega".to_string(),
            universal_hosts: vec![
                "mega.nz".to_string(),
                "mega.co.nz".to_string(),
                "mega.app".to_string(),
            ],
            quick_action_prefix: default_quick_action_prefix(),
        }
    }
}

impl LinkConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scheme = self.custom_scheme.trim();
        if scheme.is_empty() {
            return Err(ConfigError::EmptyScheme);
        }
        let mut chars = scheme.chars();
        let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_alpha
            || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            return Err(ConfigError::InvalidScheme(self.custom_scheme.clone()));
        }
        let lower = scheme.to_ascii_lowercase();
        if matches!(lower.as_str(), "http" | "https" | "file" | "app-settings") {
            return Err(ConfigError::ReservedScheme(self.custom_scheme.clone()));
        }

        if self.universal_hosts.is_empty() {
            return Err(ConfigError::NoUniversalHosts);
        }
        for host in &self.universal_hosts {
            let h = host.trim();
            let valid = !h.is_empty()
                && h
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
            if !valid {
                return Err(ConfigError::InvalidHost(host.clone()));
            }
        }

        if self.quick_action_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyQuickActionPrefix);
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkdispatch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`], at an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<LinkConfig> {
    if !path.exists() {
        let default_cfg = LinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: LinkConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
