// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration.
//!
//! Read from `fleetease.yaml` in the working directory when present, or
//! from an explicit `--config` path (YAML or JSON by extension).

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "fleetease.yaml";
pub const DEFAULT_PREFERENCES_FILE: &str = ".fleetease/preferences.json";
pub const DEFAULT_LOCALES_DIR: &str = "locales.d";

/// Environment variable the hosting environment sets for the backend URL.
pub const BACKEND_URL_ENV: &str = "REACT_APP_BACKEND_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend_url: Option<String>,
    pub preferences_path: Option<PathBuf>,
    pub locales_dir: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display())),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display())),
            _ => Err(anyhow!("unsupported config extension for {}", path.display())),
        }
    }

    /// Load `explicit` if given (it must exist), else the default file if it
    /// exists, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFERENCES_FILE))
    }

    pub fn locales_dir(&self) -> PathBuf {
        self.locales_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCALES_DIR))
    }

    /// Backend base URL: configured value, then the hosting environment,
    /// then empty (same-origin relative URLs).
    pub fn backend_url(&self) -> String {
        resolve_backend_url(self.backend_url.as_deref(), env::var(BACKEND_URL_ENV).ok())
    }
}

fn resolve_backend_url(configured: Option<&str>, from_env: Option<String>) -> String {
    configured
        .filter(|url| !url.trim().is_empty())
        .map(str::to_string)
        .or_else(|| from_env.filter(|url| !url.trim().is_empty()))
        .unwrap_or_default()
}
