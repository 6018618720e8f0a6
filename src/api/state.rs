//! Application state for the timesheet formatter API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::conversion::TimesheetFormatter;
use crate::error::TimesheetResult;

use super::storage::OutputStorage;

/// Shared application state.
///
/// Holds the formatter and the output storage. Neither carries per-request
/// data, so concurrent uploads never share intermediate state.
#[derive(Clone)]
pub struct AppState {
    /// The configured formatter.
    formatter: Arc<TimesheetFormatter>,
    /// Where generated workbooks are stored.
    storage: Arc<OutputStorage>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(formatter: TimesheetFormatter, storage: OutputStorage) -> Self {
        Self {
            formatter: Arc::new(formatter),
            storage: Arc::new(storage),
        }
    }

    /// Creates the state from the service configuration, preparing the
    /// storage directory.
    pub fn from_config(config: &ServiceConfig) -> TimesheetResult<Self> {
        let storage = OutputStorage::from_config(&config.storage);
        storage.init()?;
        Ok(Self::new(
            TimesheetFormatter::new(config.conversion.clone()),
            storage,
        ))
    }

    /// Returns a shared handle to the formatter.
    pub fn formatter(&self) -> Arc<TimesheetFormatter> {
        Arc::clone(&self.formatter)
    }

    /// Returns the output storage.
    pub fn storage(&self) -> &OutputStorage {
        &self.storage
    }
}
