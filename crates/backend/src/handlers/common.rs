use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::shared::config;

/// CSV body as a file download
pub fn csv_attachment(bytes: Vec<u8>) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", config::export_file_name());
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}
