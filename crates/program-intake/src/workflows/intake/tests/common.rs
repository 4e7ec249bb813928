use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::intake::applications::domain::{
    ApplicantDetails, ApplicationId, ApplicationRecord, ApplicationSubmission,
};
use crate::workflows::intake::programs::domain::{
    HiddenFields, ProgramId, ProgramRecord, ProgramSubmission,
};
use crate::workflows::intake::questions::{Answer, QuestionDefinition};
use crate::workflows::intake::repository::{
    ApplicationRepository, ProgramRepository, RepositoryError,
};
use crate::workflows::intake::{intake_router, ApplicationService, ProgramService};

pub(super) fn definition(prompt: &str, kind: &str) -> QuestionDefinition {
    QuestionDefinition {
        question: prompt.to_string(),
        kind: kind.to_string(),
        ..QuestionDefinition::default()
    }
}

pub(super) fn choice_definition(
    prompt: &str,
    kind: &str,
    choices: &[&str],
    cap: u32,
) -> QuestionDefinition {
    QuestionDefinition {
        choices: choices.iter().map(|choice| choice.to_string()).collect(),
        max_choice_allowed: cap,
        ..definition(prompt, kind)
    }
}

/// Program hiding every optional personal field except the phone number.
pub(super) fn program_submission() -> ProgramSubmission {
    ProgramSubmission {
        title: "Summer Engineering Fellowship".to_string(),
        description: "Ten week paid fellowship for early career engineers".to_string(),
        hidden: HiddenFields {
            hide_phone: false,
            hide_nationality: true,
            hide_current_residence: true,
            hide_id_number: true,
            hide_date_of_birth: true,
            hide_gender: true,
        },
        personal_questions: vec![
            definition("Tell us about yourself", "Paragraph"),
            definition("Are you currently employed?", "YesOrNo"),
        ],
        custom_questions: vec![
            choice_definition("Preferred track", "DropDown", &["Backend", "Frontend"], 0),
            choice_definition("Languages", "MultipleChoice", &["Rust", "Go", "C#"], 2),
            definition("Years of experience", "Number"),
            definition("Earliest start date", "Date"),
        ],
    }
}

pub(super) fn applicant() -> ApplicantDetails {
    ApplicantDetails {
        first_name: "Ada".to_string(),
        last_name: "Obi".to_string(),
        email: "ada.obi@example.com".to_string(),
        phone: Some("+234 800 000 0000".to_string()),
        ..ApplicantDetails::default()
    }
}

pub(super) fn application_submission(program_id: &ProgramId) -> ApplicationSubmission {
    ApplicationSubmission {
        program_id: Some(program_id.0.clone()),
        applicant: applicant(),
        personal_answers: vec![
            Some(Answer::text("I like compilers")),
            Some(Answer::text("YES")),
        ],
        custom_answers: vec![
            Some(Answer::text("Backend")),
            Some(Answer::choices(["Rust", "Go"])),
            Some(Answer::number(3.0)),
            Some(Answer::text("2025-06-02")),
        ],
    }
}

pub(super) type Programs = ProgramService<MemoryPrograms>;
pub(super) type Applications = ApplicationService<MemoryPrograms, MemoryApplications>;

pub(super) fn build_services() -> (
    Programs,
    Applications,
    Arc<MemoryPrograms>,
    Arc<MemoryApplications>,
) {
    let programs = Arc::new(MemoryPrograms::default());
    let applications = Arc::new(MemoryApplications::default());
    (
        ProgramService::new(programs.clone()),
        ApplicationService::new(programs.clone(), applications.clone()),
        programs,
        applications,
    )
}

pub(super) fn router_with_services(programs: Programs, applications: Applications) -> axum::Router {
    intake_router(Arc::new(programs), Arc::new(applications))
}

#[derive(Default, Clone)]
pub(super) struct MemoryPrograms {
    pub(super) records: Arc<Mutex<HashMap<ProgramId, ProgramRecord>>>,
}

impl ProgramRepository for MemoryPrograms {
    fn insert(&self, record: ProgramRecord) -> Result<ProgramRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProgramRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ProgramId) -> Result<Option<ProgramRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryApplications {
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl MemoryApplications {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ApplicationRepository for MemoryApplications {
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_program(&self, program_id: &ProgramId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| &record.program_id == program_id)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailablePrograms;

impl ProgramRepository for UnavailablePrograms {
    fn insert(&self, _record: ProgramRecord) -> Result<ProgramRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ProgramRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ProgramId) -> Result<Option<ProgramRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn json_request(
    method: axum::http::Method,
    uri: &str,
    payload: &impl serde::Serialize,
) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("payload serializes"),
        ))
        .expect("request builds")
}
