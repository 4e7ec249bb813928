use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::intake::{
    ApplicationServiceError, ErrorTitle, Problem, ProgramServiceError,
};
use axum::response::{IntoResponse, Response};

/// Errors surfaced by the binaries: startup failures plus intake errors raised
/// outside the HTTP routers (CLI demo).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("program error: {0}")]
    Program(#[from] ProgramServiceError),
    #[error("application error: {0}")]
    Application(#[from] ApplicationServiceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let problem = match &self {
            AppError::Program(err) => Problem::from(err),
            AppError::Application(err) => Problem::from(err),
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_) => Problem::new(ErrorTitle::SystemError, self.to_string()),
        };
        problem.into_response()
    }
}
