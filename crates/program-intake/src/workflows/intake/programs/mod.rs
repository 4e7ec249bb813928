pub mod domain;
pub mod router;
pub mod service;

pub use domain::{
    HiddenFields, HiddenFieldsUpdate, ProgramId, ProgramRecord, ProgramSubmission, ProgramUpdate,
    ProgramView,
};
pub use router::program_router;
pub use service::{ProgramService, ProgramServiceError};
