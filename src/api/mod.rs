//! HTTP API module for the timesheet formatter.
//!
//! This module is the upload boundary around the conversion core: an upload
//! form and conversion endpoint, a download endpoint for the generated
//! workbook, and a wakeup endpoint.

mod handlers;
mod response;
mod state;
mod storage;
mod upload;

pub use handlers::{FORMAT_TIMESHEET_PATH, MAX_UPLOAD_BYTES, UPLOADS_PATH, create_router};
pub use response::{ApiError, ApiErrorResponse, Flash};
pub use state::AppState;
pub use storage::{OutputStorage, is_safe_filename};
pub use upload::{ALLOWED_EXTENSIONS, FILE_FIELD, UploadedFile, is_allowed_file, read_upload};
