//! Upload extraction for the `/format-timesheet` endpoint.

use axum::body::Bytes;
use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;

/// Name of the multipart field carrying the CSV.
pub const FILE_FIELD: &str = "file";

/// Extensions accepted for conversion, compared case-insensitively.
pub const ALLOWED_EXTENSIONS: &[&str] = &["csv"];

/// A file received in a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// The client-supplied file name; empty when no file was chosen.
    pub filename: String,
    /// The file contents.
    pub data: Bytes,
}

/// Reads the first `file` part of a multipart body.
///
/// Returns `Ok(None)` if the body has no such part. Other parts are skipped.
pub async fn read_upload(
    multipart: &mut Multipart,
) -> Result<Option<UploadedFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        return Ok(Some(UploadedFile { filename, data }));
    }
    Ok(None)
}

/// Returns true if the file name has an allowed extension.
///
/// ```
/// use timesheet_formatter::api::is_allowed_file;
///
/// assert!(is_allowed_file("timesheet.CSV"));
/// assert!(!is_allowed_file("timesheet.xlsx"));
/// assert!(!is_allowed_file("csv"));
/// ```
pub fn is_allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}
