//! Configuration loading and management for the timesheet formatter service.
//!
//! This module provides functionality to load the service configuration
//! from a YAML file: listener address, output storage, and the conversion
//! options (layout profile and input column names).
//!
//! # Example
//!
//! ```no_run
//! use timesheet_formatter::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/timesheet.yaml").unwrap();
//! println!("Layout profile: {:?}", config.config().conversion.profile);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH, PORT_ENV};
pub use types::{DEFAULT_PORT, ServerConfig, ServiceConfig, StorageConfig};
