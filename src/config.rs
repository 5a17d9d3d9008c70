// src/config.rs

//! Runtime settings for the front end.
//!
//! Layered lowest to highest: built-in defaults, `config.json` in the
//! config dir, `WLAN_AP_SELECT_*` environment variables, and the first
//! command-line argument for the scan file.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use tracing::debug;

use crate::logging::{PROJECT_NAME, get_config_dir, get_data_dir};

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_SCAN_FILE: &str = "scan.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON scan batch to run the selection on.
    pub scan_file: PathBuf,
    /// Initial SSID filter.
    pub ssid: String,
    /// Initial BSSID filter.
    pub bssid: String,
}

/// The on-disk shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    scan_file: Option<PathBuf>,
    ssid: Option<String>,
    bssid: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_file: get_data_dir().join(DEFAULT_SCAN_FILE),
            ssid: String::new(),
            bssid: String::new(),
        }
    }
}

impl Config {
    /// Loads from the real config dir, process environment and arguments.
    pub fn load() -> Result<Self> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::from_sources(
            &get_config_dir().join(CONFIG_FILE),
            |key| std::env::var(key).ok(),
            &args,
        )
    }

    /// Builds a config from explicit sources. A missing config file is
    /// fine; an unreadable or malformed one is an error.
    pub fn from_sources<F>(config_path: &Path, env: F, args: &[String]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if config_path.exists() {
            debug!(path = %config_path.display(), "Reading config file.");
            let content = std::fs::read_to_string(config_path)
                .wrap_err_with(|| format!("Failed to read config file {}", config_path.display()))?;
            let file: FileConfig = serde_json::from_str(&content)
                .wrap_err_with(|| format!("Invalid config file {}", config_path.display()))?;
            if let Some(scan_file) = file.scan_file {
                config.scan_file = scan_file;
            }
            if let Some(ssid) = file.ssid {
                config.ssid = ssid;
            }
            if let Some(bssid) = file.bssid {
                config.bssid = bssid;
            }
        }

        if let Some(scan_file) = env(&env_key("SCAN_FILE")) {
            config.scan_file = PathBuf::from(scan_file);
        }
        if let Some(ssid) = env(&env_key("SSID")) {
            config.ssid = ssid;
        }
        if let Some(bssid) = env(&env_key("BSSID")) {
            config.bssid = bssid;
        }

        if let Some(path) = args.first() {
            config.scan_file = PathBuf::from(path);
        }

        Ok(config)
    }
}

fn env_key(suffix: &str) -> String {
    format!("{}_{}", PROJECT_NAME.as_str(), suffix)
}
