use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

use super::domain::{ApplicationId, ApplicationSubmission, ApplicationView};
use super::service::ApplicationService;
use crate::workflows::intake::problem::Problem;
use crate::workflows::intake::programs::domain::ProgramId;
use crate::workflows::intake::repository::{ApplicationRepository, ProgramRepository};

/// Router builder exposing application submission, lookup and per-program listing.
pub fn application_router<P, A>(service: Arc<ApplicationService<P, A>>) -> Router
where
    P: ProgramRepository + 'static,
    A: ApplicationRepository + 'static,
{
    Router::new()
        .route("/api/v1/application/submit", post(submit_handler::<P, A>))
        .route(
            "/api/v1/application/fetch/:application_id",
            get(fetch_handler::<P, A>),
        )
        .route(
            "/api/v1/application/program/:program_id",
            get(list_handler::<P, A>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<P, A>(
    State(service): State<Arc<ApplicationService<P, A>>>,
    axum::Json(submission): axum::Json<ApplicationSubmission>,
) -> Response
where
    P: ProgramRepository + 'static,
    A: ApplicationRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(error) => Problem::from(&error).into_response(),
    }
}

pub(crate) async fn fetch_handler<P, A>(
    State(service): State<Arc<ApplicationService<P, A>>>,
    Path(application_id): Path<String>,
) -> Response
where
    P: ProgramRepository + 'static,
    A: ApplicationRepository + 'static,
{
    match service.get(&ApplicationId(application_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => Problem::from(&error).into_response(),
    }
}

pub(crate) async fn list_handler<P, A>(
    State(service): State<Arc<ApplicationService<P, A>>>,
    Path(program_id): Path<String>,
) -> Response
where
    P: ProgramRepository + 'static,
    A: ApplicationRepository + 'static,
{
    match service.for_program(&ProgramId(program_id)) {
        Ok(records) => {
            let views: Vec<ApplicationView> = records.iter().map(|record| record.view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => Problem::from(&error).into_response(),
    }
}
