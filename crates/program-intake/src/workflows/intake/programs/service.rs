use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{ProgramId, ProgramRecord, ProgramSubmission, ProgramUpdate};
use crate::workflows::intake::problem::{ErrorTitle, Problem};
use crate::workflows::intake::questions::{
    merge, parse_questions, parse_updates, QuestionDefinition, ValidationError,
};
use crate::workflows::intake::repository::{ProgramRepository, RepositoryError};

/// Service owning program creation, lookup and partial updates.
pub struct ProgramService<R> {
    repository: Arc<R>,
}

static PROGRAM_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_program_id() -> ProgramId {
    let id = PROGRAM_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProgramId(format!("prog-{id:06}"))
}

impl<R> ProgramService<R>
where
    R: ProgramRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validate both question lists and persist a new program.
    pub fn create(
        &self,
        submission: ProgramSubmission,
    ) -> Result<ProgramRecord, ProgramServiceError> {
        require_text(&submission.title, "program title")?;
        require_text(&submission.description, "program description")?;
        require_prompts(&submission.personal_questions)?;
        require_prompts(&submission.custom_questions)?;

        let personal_questions = parse_questions(submission.personal_questions)?;
        let custom_questions = parse_questions(submission.custom_questions)?;

        let now = Utc::now();
        let record = ProgramRecord {
            id: next_program_id(),
            title: submission.title,
            description: submission.description,
            hidden: submission.hidden,
            personal_questions,
            custom_questions,
            created_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(record)?;
        info!(
            program_id = %stored.id.0,
            personal = stored.personal_questions.len(),
            custom = stored.custom_questions.len(),
            "program created"
        );
        Ok(stored)
    }

    /// Fetch a program by id.
    pub fn fetch(&self, program_id: &str) -> Result<ProgramRecord, ProgramServiceError> {
        if program_id.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "program id",
            }
            .into());
        }

        let id = ProgramId(program_id.to_string());
        self.repository
            .fetch(&id)?
            .ok_or(ProgramServiceError::NotFound(id))
    }

    /// Apply a partial update; questions are merged by index and never removed.
    pub fn update(
        &self,
        program_id: &str,
        update: ProgramUpdate,
    ) -> Result<ProgramRecord, ProgramServiceError> {
        let mut record = self.fetch(program_id)?;

        let personal = parse_updates(update.personal_questions)?;
        let custom = parse_updates(update.custom_questions)?;
        let personal_questions = merge(record.personal_questions.clone(), &personal)?;
        let custom_questions = merge(record.custom_questions.clone(), &custom)?;

        if let Some(title) = update.title.filter(|value| !value.trim().is_empty()) {
            record.title = title;
        }
        if let Some(description) = update.description.filter(|value| !value.trim().is_empty()) {
            record.description = description;
        }
        record.hidden = update.visibility.apply(record.hidden);
        record.personal_questions = personal_questions;
        record.custom_questions = custom_questions;
        record.updated_at = Utc::now();

        self.repository.update(record.clone())?;
        info!(program_id = %record.id.0, "program updated");
        Ok(record)
    }
}

fn require_text(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

fn require_prompts(questions: &[QuestionDefinition]) -> Result<(), ValidationError> {
    questions
        .iter()
        .try_for_each(|definition| require_text(&definition.question, "question"))
}

/// Error raised by the program service.
#[derive(Debug, thiserror::Error)]
pub enum ProgramServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Program with specified id could not be found")]
    NotFound(ProgramId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<&ProgramServiceError> for Problem {
    fn from(error: &ProgramServiceError) -> Self {
        let title = match error {
            ProgramServiceError::Validation(_) => ErrorTitle::BadRequest,
            ProgramServiceError::NotFound(_)
            | ProgramServiceError::Repository(RepositoryError::NotFound) => ErrorTitle::NotFound,
            ProgramServiceError::Repository(_) => ErrorTitle::SystemError,
        };
        Problem::new(title, error.to_string())
    }
}
