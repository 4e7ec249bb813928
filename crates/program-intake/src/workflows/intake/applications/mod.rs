pub mod domain;
pub mod router;
pub mod service;

pub use domain::{
    ApplicantDetails, ApplicationId, ApplicationRecord, ApplicationSubmission, ApplicationView,
};
pub use router::application_router;
pub use service::{ApplicationService, ApplicationServiceError};
