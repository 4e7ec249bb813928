use super::applications::domain::{ApplicationId, ApplicationRecord};
use super::programs::domain::{ProgramId, ProgramRecord};

/// Storage abstraction for program documents.
pub trait ProgramRepository: Send + Sync {
    fn insert(&self, record: ProgramRecord) -> Result<ProgramRecord, RepositoryError>;
    fn update(&self, record: ProgramRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ProgramId) -> Result<Option<ProgramRecord>, RepositoryError>;
}

/// Storage abstraction for submitted applications.
pub trait ApplicationRepository: Send + Sync {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn for_program(&self, program_id: &ProgramId) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
