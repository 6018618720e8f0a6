//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{TimesheetError, TimesheetResult};

use super::types::ServiceConfig;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "TIMESHEET_CONFIG";

/// Environment variable overriding the listener port.
pub const PORT_ENV: &str = "PORT";

/// Configuration file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "./config/timesheet.yaml";

/// Loads and provides access to the service configuration.
///
/// # File format
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 5000
/// storage:
///   upload_dir: ./www
///   output_filename: formatted_timesheet.xlsx
/// conversion:
///   profile: standard        # standard | manual_unpaid | leave_only
///   columns:
///     full_name: Full Name
///     duration: Duration
///     break_type: Break Type
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_formatter::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/timesheet.yaml").unwrap();
/// println!("Listening on {}", loader.config().server.bind_address());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`TimesheetError::ConfigNotFound`] if the file cannot be read
    /// - [`TimesheetError::ConfigParseError`] if it is not valid YAML for
    ///   [`ServiceConfig`]
    pub fn load<P: AsRef<Path>>(path: P) -> TimesheetResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TimesheetError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            TimesheetError::ConfigParseError { message, .. } => TimesheetError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    ///
    /// ```
    /// use timesheet_formatter::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml("server:\n  port: 8080\n").unwrap();
    /// assert_eq!(loader.config().server.port, 8080);
    /// assert_eq!(loader.config().server.host, "0.0.0.0");
    /// ```
    pub fn from_yaml(content: &str) -> TimesheetResult<Self> {
        // An empty document deserializes to unit, not to the defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(content).map_err(|e| TimesheetError::ConfigParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { config })
    }

    /// Resolves the configuration the service starts with.
    ///
    /// Reads the file named by [`CONFIG_PATH_ENV`], else
    /// [`DEFAULT_CONFIG_PATH`] when it exists, else the built-in defaults.
    /// A numeric [`PORT_ENV`] then overrides the port.
    pub fn from_env() -> TimesheetResult<Self> {
        let mut loader = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH)?,
            Err(_) => Self::default(),
        };

        if let Some(port) = std::env::var(PORT_ENV).ok().and_then(|p| p.parse().ok()) {
            loader.config.server.port = port;
        }

        Ok(loader)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
