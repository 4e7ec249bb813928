use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::intake::programs::domain::{HiddenFields, ProgramId};
use crate::workflows::intake::questions::{Answer, BoundAnswer};

/// Identifier wrapper for submitted applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Personal details collected from every applicant.
///
/// The optional fields become mandatory unless the program hides them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantDetails {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_residence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl ApplicantDetails {
    /// Name of the first required field left blank, given what the program hides.
    pub fn first_missing_field(&self, hidden: &HiddenFields) -> Option<&'static str> {
        let always = [
            (self.first_name.as_str(), "first name"),
            (self.last_name.as_str(), "last name"),
            (self.email.as_str(), "email address"),
        ];
        if let Some((_, field)) = always.iter().find(|(value, _)| is_blank(Some(*value))) {
            return Some(*field);
        }

        let optional = [
            (hidden.hide_phone, &self.phone, "phone number"),
            (hidden.hide_nationality, &self.nationality, "nationality"),
            (
                hidden.hide_current_residence,
                &self.current_residence,
                "current residence",
            ),
            (hidden.hide_id_number, &self.id_number, "id number"),
            (hidden.hide_date_of_birth, &self.date_of_birth, "date of birth"),
            (hidden.hide_gender, &self.gender, "gender"),
        ];
        optional
            .into_iter()
            .find(|(hidden, value, _)| !hidden && is_blank(value.as_deref()))
            .map(|(_, _, field)| field)
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |value| value.trim().is_empty())
}

/// Inbound application payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    #[serde(default)]
    pub program_id: Option<String>,
    #[serde(flatten)]
    pub applicant: ApplicantDetails,
    #[serde(default)]
    pub personal_answers: Vec<Option<Answer>>,
    #[serde(default)]
    pub custom_answers: Vec<Option<Answer>>,
}

/// Stored application with answers bound to the program's questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub program_id: ProgramId,
    #[serde(flatten)]
    pub applicant: ApplicantDetails,
    pub personal_answers: Vec<BoundAnswer>,
    pub additional_answers: Vec<BoundAnswer>,
    pub created_at: DateTime<Utc>,
}

impl ApplicationRecord {
    pub fn view(&self) -> ApplicationView {
        ApplicationView {
            application_id: self.id.clone(),
            program_id: self.program_id.clone(),
            applicant_name: format!("{} {}", self.applicant.first_name, self.applicant.last_name),
            personal_answers: self.personal_answers.clone(),
            additional_answers: self.additional_answers.clone(),
            submitted_at: self.created_at,
        }
    }
}

/// Representation returned after submission and lookups.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationView {
    pub application_id: ApplicationId,
    pub program_id: ProgramId,
    pub applicant_name: String,
    pub personal_answers: Vec<BoundAnswer>,
    pub additional_answers: Vec<BoundAnswer>,
    pub submitted_at: DateTime<Utc>,
}
