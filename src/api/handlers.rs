//! HTTP request handlers for the timesheet formatter API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, Path, Query, State, multipart::MultipartRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::response::{ApiError, ApiErrorResponse, Flash};
use super::state::AppState;
use super::storage::is_safe_filename;
use super::upload::{is_allowed_file, read_upload};

/// Path of the upload form and conversion endpoint.
pub const FORMAT_TIMESHEET_PATH: &str = "/format-timesheet";

/// Path prefix of stored workbook downloads.
pub const UPLOADS_PATH: &str = "/uploads";

/// Largest accepted request body.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(wakeup_handler))
        .route(
            FORMAT_TIMESHEET_PATH,
            get(upload_form_handler).post(format_timesheet_handler),
        )
        .route(&format!("{}/:name", UPLOADS_PATH), get(download_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Handler for GET /.
///
/// Answers immediately so a sleeping host can be woken up.
async fn wakeup_handler() -> impl IntoResponse {
    Json(json!({ "message": "wakeup complete" }))
}

/// Query parameters of the upload form.
#[derive(Debug, Deserialize)]
struct FormParams {
    flash: Option<Flash>,
}

/// Handler for GET /format-timesheet.
async fn upload_form_handler(params: Option<Query<FormParams>>) -> Html<String> {
    let flash = params
        .and_then(|Query(p)| p.flash)
        .map(|f| format!("    <p class=\"flash\">{}</p>\n", f.message()))
        .unwrap_or_default();

    Html(format!(
        r#"<!doctype html>
<title>Format timesheet</title>
<h1>Upload a timesheet export</h1>
{flash}<form method=post enctype=multipart/form-data>
    <input type=file name=file accept=".csv">
    <input type=submit value=Upload>
</form>
"#
    ))
}

/// Handler for POST /format-timesheet.
///
/// Converts the uploaded CSV, stores the workbook, and redirects to its
/// download. Every failure redirects back to the form with a flash code.
async fn format_timesheet_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet upload");

    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection,
                "Request is not a multipart upload"
            );
            return flash_redirect(Flash::NoFilePart);
        }
    };

    let upload = match read_upload(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => return flash_redirect(Flash::NoFilePart),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Failed to read upload");
            return flash_redirect(Flash::UploadFailed);
        }
    };

    // Browsers submit an empty, unnamed part when no file was chosen
    if upload.filename.is_empty() {
        return flash_redirect(Flash::NoSelectedFile);
    }
    if !is_allowed_file(&upload.filename) {
        warn!(
            correlation_id = %correlation_id,
            filename = %upload.filename,
            "Rejected file extension"
        );
        return flash_redirect(Flash::UnsupportedFile);
    }

    let formatter = state.formatter();
    let data = upload.data;
    let converted = tokio::task::spawn_blocking(move || formatter.format(&data[..])).await;

    let bytes = match converted {
        Ok(Ok(bytes)) => bytes,
        Ok(Err(err)) => {
            warn!(
                correlation_id = %correlation_id,
                filename = %upload.filename,
                error = %err,
                "Conversion failed"
            );
            return flash_redirect(Flash::from(&err));
        }
        Err(err) => {
            error!(correlation_id = %correlation_id, error = %err, "Conversion task failed");
            return flash_redirect(Flash::ConversionFailed);
        }
    };

    let storage = state.storage();
    if let Err(err) = storage.store(bytes).await {
        error!(correlation_id = %correlation_id, error = %err, "Failed to store workbook");
        return flash_redirect(Flash::ConversionFailed);
    }

    info!(
        correlation_id = %correlation_id,
        filename = %upload.filename,
        output = %storage.output_filename(),
        "Timesheet formatted"
    );
    Redirect::to(&format!("{}/{}", UPLOADS_PATH, storage.output_filename())).into_response()
}

/// Handler for GET /uploads/{name}.
async fn download_handler(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    if !is_safe_filename(&name) {
        return (StatusCode::BAD_REQUEST, Json(ApiError::invalid_filename(&name))).into_response();
    }

    match state.storage().read(&name).await {
        Ok(Some(bytes)) => {
            let content_type = if name.ends_with(".xlsx") {
                XLSX_CONTENT_TYPE
            } else {
                "application/octet-stream"
            };
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", name),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, Json(ApiError::file_not_found(&name))).into_response(),
        Err(err) => {
            error!(file = %name, error = %err, "Failed to read stored workbook");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn flash_redirect(flash: Flash) -> Response {
    Redirect::to(&format!("{}?flash={}", FORMAT_TIMESHEET_PATH, flash.code())).into_response()
}
