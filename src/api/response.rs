//! Response types for the timesheet formatter API.
//!
//! This module defines the JSON error body used by the download endpoint
//! and the flash codes carried back to the upload form after a failed
//! conversion.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::TimesheetError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a not found error response for a stored file.
    pub fn file_not_found(name: &str) -> Self {
        Self::with_details(
            "NOT_FOUND",
            format!("File not found: {}", name),
            "Upload a timesheet to generate a new workbook",
        )
    }

    /// Creates an error response for a file name that is not a plain name.
    pub fn invalid_filename(name: &str) -> Self {
        Self::new("INVALID_FILENAME", format!("Invalid file name: {}", name))
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<TimesheetError> for ApiErrorResponse {
    fn from(error: TimesheetError) -> Self {
        let message = error.to_string();
        let code = match error {
            TimesheetError::Storage { .. } => "STORAGE_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::with_details(code, "Failed to serve the stored workbook", message),
        }
    }
}

/// A message shown on the upload form after a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flash {
    /// The request carried no `file` part.
    NoFilePart,
    /// The browser submitted the form without choosing a file.
    NoSelectedFile,
    /// The file does not have a `.csv` extension.
    UnsupportedFile,
    /// The multipart body could not be read.
    UploadFailed,
    /// A required column is missing from the CSV.
    MissingColumn,
    /// The CSV has no data rows.
    EmptyInput,
    /// The CSV could not be parsed.
    MalformedCsv,
    /// The CSV has more columns than a sheet can lay out.
    TooManyColumns,
    /// Any other conversion or storage failure.
    ConversionFailed,
}

impl Flash {
    /// Returns the query string value for this flash.
    pub fn code(self) -> &'static str {
        match self {
            Flash::NoFilePart => "no-file-part",
            Flash::NoSelectedFile => "no-selected-file",
            Flash::UnsupportedFile => "unsupported-file",
            Flash::UploadFailed => "upload-failed",
            Flash::MissingColumn => "missing-column",
            Flash::EmptyInput => "empty-input",
            Flash::MalformedCsv => "malformed-csv",
            Flash::TooManyColumns => "too-many-columns",
            Flash::ConversionFailed => "conversion-failed",
        }
    }

    /// Returns the text shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Flash::NoFilePart => "No file part",
            Flash::NoSelectedFile => "No selected file",
            Flash::UnsupportedFile => "Only .csv files can be formatted",
            Flash::UploadFailed => "The upload could not be read, please try again",
            Flash::MissingColumn => {
                "The file is missing a required column (Full Name, Duration or Break Type)"
            }
            Flash::EmptyInput => "The file contains no timesheet rows",
            Flash::MalformedCsv => "The file is not valid CSV",
            Flash::TooManyColumns => {
                "The file has too many columns before Break Type to fit a sheet (A to Z)"
            }
            Flash::ConversionFailed => "Something went wrong while formatting the timesheet",
        }
    }
}

impl From<&TimesheetError> for Flash {
    fn from(error: &TimesheetError) -> Self {
        match error {
            TimesheetError::MissingColumn { .. } => Flash::MissingColumn,
            TimesheetError::EmptyInput => Flash::EmptyInput,
            TimesheetError::MalformedCsv { .. } => Flash::MalformedCsv,
            TimesheetError::TooManyColumns { .. } => Flash::TooManyColumns,
            _ => Flash::ConversionFailed,
        }
    }
}
