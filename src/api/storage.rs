//! On-disk storage for generated workbooks.
//!
//! Every conversion is stored under the same configured file name. Writes go
//! to a uniquely named temporary file first and are renamed into place, so a
//! concurrent download never sees a half-written workbook.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use crate::config::StorageConfig;
use crate::error::{TimesheetError, TimesheetResult};

/// Directory-backed storage for the generated workbook.
#[derive(Debug, Clone)]
pub struct OutputStorage {
    dir: PathBuf,
    output_filename: String,
}

impl OutputStorage {
    /// Creates storage rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>, output_filename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            output_filename: output_filename.into(),
        }
    }

    /// Creates storage from the service configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.upload_dir, &config.output_filename)
    }

    /// Creates the storage directory if it does not exist yet.
    ///
    /// Run once at startup. Calling it again is a no-op.
    pub fn init(&self) -> TimesheetResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| storage_error(&self.dir, e))?;
        info!(dir = %self.dir.display(), "Upload directory ready");
        Ok(())
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file name generated workbooks are stored under.
    pub fn output_filename(&self) -> &str {
        &self.output_filename
    }

    /// Stores a generated workbook, replacing the previous one.
    pub async fn store(&self, bytes: Vec<u8>) -> TimesheetResult<PathBuf> {
        let target = self.dir.join(&self.output_filename);
        let staging = self
            .dir
            .join(format!(".{}.{}.tmp", self.output_filename, Uuid::new_v4()));

        if let Err(e) = tokio::fs::write(&staging, &bytes).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(storage_error(&staging, e));
        }
        if let Err(e) = tokio::fs::rename(&staging, &target).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(storage_error(&target, e));
        }

        debug!(path = %target.display(), bytes = bytes.len(), "Stored workbook");
        Ok(target)
    }

    /// Reads a stored file by name.
    ///
    /// Returns `Ok(None)` if no such file exists. Callers must check the name
    /// with [`is_safe_filename`] first.
    pub async fn read(&self, name: &str) -> TimesheetResult<Option<Vec<u8>>> {
        let path = self.dir.join(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error(&path, e)),
        }
    }
}

/// Returns true for a plain file name that stays inside the storage directory.
///
/// ```
/// use timesheet_formatter::api::is_safe_filename;
///
/// assert!(is_safe_filename("formatted_timesheet.xlsx"));
/// assert!(!is_safe_filename("../secret"));
/// assert!(!is_safe_filename(".hidden"));
/// ```
pub fn is_safe_filename(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(['/', '\\', '\0'])
}

fn storage_error(path: &Path, error: std::io::Error) -> TimesheetError {
    TimesheetError::Storage {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
