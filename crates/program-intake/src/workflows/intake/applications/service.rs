use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{ApplicationId, ApplicationRecord, ApplicationSubmission};
use crate::workflows::intake::problem::{ErrorTitle, Problem};
use crate::workflows::intake::programs::domain::ProgramId;
use crate::workflows::intake::questions::{bind, ValidationError};
use crate::workflows::intake::repository::{
    ApplicationRepository, ProgramRepository, RepositoryError,
};

/// Service validating submissions against the program they target.
pub struct ApplicationService<P, A> {
    programs: Arc<P>,
    applications: Arc<A>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

impl<P, A> ApplicationService<P, A>
where
    P: ProgramRepository + 'static,
    A: ApplicationRepository + 'static,
{
    pub fn new(programs: Arc<P>, applications: Arc<A>) -> Self {
        Self {
            programs,
            applications,
        }
    }

    /// Submit a new application, returning the stored record.
    ///
    /// Personal answers are bound before custom answers; the first failure of
    /// either list rejects the whole submission.
    pub fn submit(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let program_id = submission
            .program_id
            .filter(|id| !id.trim().is_empty())
            .map(ProgramId)
            .ok_or(ValidationError::MissingField {
                field: "program id",
            })?;

        let program = self
            .programs
            .fetch(&program_id)?
            .ok_or_else(|| ApplicationServiceError::ProgramNotFound(program_id.clone()))?;

        if let Some(field) = submission.applicant.first_missing_field(&program.hidden) {
            return Err(ValidationError::MissingField { field }.into());
        }

        let personal_answers = bind(&program.personal_questions, submission.personal_answers)?;
        let additional_answers = bind(&program.custom_questions, submission.custom_answers)?;

        let record = ApplicationRecord {
            id: next_application_id(),
            program_id,
            applicant: submission.applicant,
            personal_answers,
            additional_answers,
            created_at: Utc::now(),
        };

        let stored = self.applications.insert(record)?;
        info!(
            application_id = %stored.id.0,
            program_id = %stored.program_id.0,
            "application submitted"
        );
        Ok(stored)
    }

    /// Fetch a stored application.
    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        self.applications
            .fetch(application_id)?
            .ok_or_else(|| ApplicationServiceError::NotFound(application_id.clone()))
    }

    /// All applications submitted against an existing program.
    pub fn for_program(
        &self,
        program_id: &ProgramId,
    ) -> Result<Vec<ApplicationRecord>, ApplicationServiceError> {
        if program_id.0.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "program id",
            }
            .into());
        }
        if self.programs.fetch(program_id)?.is_none() {
            return Err(ApplicationServiceError::ProgramNotFound(program_id.clone()));
        }
        Ok(self.applications.for_program(program_id)?)
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Program with specified id could not be found")]
    ProgramNotFound(ProgramId),
    #[error("Application with specified id could not be found")]
    NotFound(ApplicationId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<&ApplicationServiceError> for Problem {
    fn from(error: &ApplicationServiceError) -> Self {
        let title = match error {
            ApplicationServiceError::Validation(_) => ErrorTitle::BadRequest,
            ApplicationServiceError::ProgramNotFound(_)
            | ApplicationServiceError::NotFound(_)
            | ApplicationServiceError::Repository(RepositoryError::NotFound) => {
                ErrorTitle::NotFound
            }
            ApplicationServiceError::Repository(_) => ErrorTitle::SystemError,
        };
        Problem::new(title, error.to_string())
    }
}
