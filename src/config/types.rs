//! Configuration types for the timesheet formatter service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so a partial file (or none at all) is valid.

use std::path::PathBuf;

use serde::Deserialize;

use crate::conversion::ConversionOptions;

/// Default port, matching the upstream hosting convention.
pub const DEFAULT_PORT: u16 = 5000;

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Where generated workbooks are kept.
    pub storage: StorageConfig,
    /// How uploads are converted.
    pub conversion: ConversionOptions,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Output storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding generated workbooks.
    pub upload_dir: PathBuf,
    /// File name every generated workbook is stored under.
    pub output_filename: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("./www"),
            output_filename: "formatted_timesheet.xlsx".to_string(),
        }
    }
}
