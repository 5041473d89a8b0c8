//! RON configuration for the terminal app.
//!
//! Read from the path given as the first argument, or `./reader.ron` when
//! present. Every field is optional.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use reader_engine::{ExtractorSettings, Transport};
use serde::{Deserialize, Serialize};

use crate::logging::LogDestination;

pub const DEFAULT_CONFIG_FILENAME: &str = "reader.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TransportConfig {
    #[default]
    ScrapeJson,
    TextQuery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub transport: TransportConfig,
    pub endpoint: String,
    pub query_param: String,
    pub extractor_format: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let settings = ExtractorSettings::default();
        Self {
            transport: TransportConfig::ScrapeJson,
            endpoint: settings.endpoint,
            query_param: settings.query_param,
            extractor_format: settings.extractor_format,
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            max_bytes: settings.max_bytes,
        }
    }
}

impl ExtractorConfig {
    pub fn to_settings(&self) -> ExtractorSettings {
        ExtractorSettings {
            transport: match self.transport {
                TransportConfig::ScrapeJson => Transport::ScrapeJson,
                TransportConfig::TextQuery => Transport::TextQuery,
            },
            endpoint: self.endpoint.clone(),
            query_param: self.query_param.clone(),
            extractor_format: self.extractor_format.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub extractor: ExtractorConfig,
    pub download_dir: PathBuf,
    /// Where `:install` copies the executable. `None` means `~/.local/bin`.
    pub install_dir: Option<PathBuf>,
    pub offer_install: bool,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            download_dir: PathBuf::from("downloads"),
            install_dir: None,
            offer_install: true,
            log_destination: LogDestination::File,
        }
    }
}

impl AppConfig {
    pub fn resolved_install_dir(&self) -> Option<PathBuf> {
        self.install_dir
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("bin")))
    }
}

/// Loads the config. An explicit path must exist; the default file may be absent.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let path = explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILENAME));
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound && explicit.is_none() => {
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("reading config {}", path.display()));
        }
    };
    parse(&content).with_context(|| format!("parsing config {}", path.display()))
}

pub fn parse(content: &str) -> anyhow::Result<AppConfig> {
    Ok(ron::from_str(content)?)
}
