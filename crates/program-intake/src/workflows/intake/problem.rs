use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

/// Client-facing error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTitle {
    BadRequest,
    NotFound,
    SystemError,
}

impl ErrorTitle {
    pub const fn label(self) -> &'static str {
        match self {
            ErrorTitle::BadRequest => "BAD REQUEST",
            ErrorTitle::NotFound => "NOT FOUND",
            ErrorTitle::SystemError => "SYSTEM ERROR",
        }
    }

    pub const fn status(self) -> StatusCode {
        match self {
            ErrorTitle::BadRequest => StatusCode::BAD_REQUEST,
            ErrorTitle::NotFound => StatusCode::NOT_FOUND,
            ErrorTitle::SystemError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Problem-details style error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub title: &'static str,
    pub status: u16,
    pub detail: String,
}

impl Problem {
    pub fn new(title: ErrorTitle, detail: impl Into<String>) -> Self {
        Self {
            title: title.label(),
            status: title.status().as_u16(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(detail = %self.detail, "request failed");
        } else {
            warn!(status = self.status, detail = %self.detail, "request rejected");
        }
        (status, Json(self)).into_response()
    }
}
