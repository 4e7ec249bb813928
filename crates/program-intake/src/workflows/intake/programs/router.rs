use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};

use super::domain::{ProgramSubmission, ProgramUpdate};
use super::service::ProgramService;
use crate::workflows::intake::problem::Problem;
use crate::workflows::intake::repository::ProgramRepository;

/// Router builder exposing program create, update and fetch endpoints.
pub fn program_router<R>(service: Arc<ProgramService<R>>) -> Router
where
    R: ProgramRepository + 'static,
{
    Router::new()
        .route("/api/v1/program/create", post(create_handler::<R>))
        .route(
            "/api/v1/program/update/:program_id",
            put(update_handler::<R>),
        )
        .route(
            "/api/v1/program/fetch/:program_id",
            get(fetch_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    axum::Json(submission): axum::Json<ProgramSubmission>,
) -> Response
where
    R: ProgramRepository + 'static,
{
    match service.create(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(error) => Problem::from(&error).into_response(),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Path(program_id): Path<String>,
    axum::Json(update): axum::Json<ProgramUpdate>,
) -> Response
where
    R: ProgramRepository + 'static,
{
    match service.update(&program_id, update) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => Problem::from(&error).into_response(),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<ProgramService<R>>>,
    Path(program_id): Path<String>,
) -> Response
where
    R: ProgramRepository + 'static,
{
    match service.fetch(&program_id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => Problem::from(&error).into_response(),
    }
}
