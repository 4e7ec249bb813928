use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::intake::questions::{FieldStatus, Question, QuestionDefinition, QuestionUpdate};

/// Identifier wrapper for programs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub String);

/// Personal applicant fields a program may choose not to collect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenFields {
    #[serde(default)]
    pub hide_phone: bool,
    #[serde(default)]
    pub hide_nationality: bool,
    #[serde(default)]
    pub hide_current_residence: bool,
    #[serde(default)]
    pub hide_id_number: bool,
    #[serde(default)]
    pub hide_date_of_birth: bool,
    #[serde(default)]
    pub hide_gender: bool,
}

/// Payload used to create a program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramSubmission {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub hidden: HiddenFields,
    #[serde(default)]
    pub personal_questions: Vec<QuestionDefinition>,
    #[serde(default)]
    pub custom_questions: Vec<QuestionDefinition>,
}

/// Per-field visibility changes; each status only touches its own flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenFieldsUpdate {
    #[serde(default)]
    pub phone_field_status: FieldStatus,
    #[serde(default)]
    pub nationality_field_status: FieldStatus,
    #[serde(default)]
    pub current_residence_field_status: FieldStatus,
    #[serde(default)]
    pub id_number_field_status: FieldStatus,
    #[serde(default)]
    pub date_of_birth_field_status: FieldStatus,
    #[serde(default)]
    pub gender_field_status: FieldStatus,
}

impl HiddenFieldsUpdate {
    pub fn apply(&self, hidden: HiddenFields) -> HiddenFields {
        HiddenFields {
            hide_phone: self.phone_field_status.apply(hidden.hide_phone),
            hide_nationality: self.nationality_field_status.apply(hidden.hide_nationality),
            hide_current_residence: self
                .current_residence_field_status
                .apply(hidden.hide_current_residence),
            hide_id_number: self.id_number_field_status.apply(hidden.hide_id_number),
            hide_date_of_birth: self
                .date_of_birth_field_status
                .apply(hidden.hide_date_of_birth),
            hide_gender: self.gender_field_status.apply(hidden.hide_gender),
        }
    }
}

/// Partial update of a program. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub visibility: HiddenFieldsUpdate,
    #[serde(default)]
    pub personal_questions: Vec<QuestionUpdate>,
    #[serde(default)]
    pub custom_questions: Vec<QuestionUpdate>,
}

/// Stored program document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRecord {
    pub id: ProgramId,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub hidden: HiddenFields,
    pub personal_questions: Vec<Question>,
    pub custom_questions: Vec<Question>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProgramRecord {
    pub fn view(&self) -> ProgramView {
        ProgramView {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            hidden: self.hidden,
            personal_questions: self.personal_questions.clone(),
            custom_questions: self.custom_questions.clone(),
        }
    }
}

/// Public representation returned to form renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramView {
    pub id: ProgramId,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub hidden: HiddenFields,
    pub personal_questions: Vec<Question>,
    pub custom_questions: Vec<Question>,
}
