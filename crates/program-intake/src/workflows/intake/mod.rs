//! Program and application intake.
//!
//! Programs declare ordered personal and custom question lists; applications
//! answer them positionally. Validation lives in [`questions`], persistence is
//! behind the traits in [`repository`], and each service has a matching axum
//! router.

pub mod applications;
pub mod problem;
pub mod programs;
pub mod questions;
pub mod repository;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use applications::{application_router, ApplicationService, ApplicationServiceError};
pub use problem::{ErrorTitle, Problem};
pub use programs::{program_router, ProgramService, ProgramServiceError};
pub use repository::{ApplicationRepository, ProgramRepository, RepositoryError};

/// Router combining the program and application endpoints.
pub fn intake_router<P, A>(
    programs: Arc<ProgramService<P>>,
    applications: Arc<ApplicationService<P, A>>,
) -> axum::Router
where
    P: ProgramRepository + 'static,
    A: ApplicationRepository + 'static,
{
    program_router(programs).merge(application_router(applications))
}
