use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// The fixed set of question kinds a program may ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    Paragraph,
    YesOrNo,
    DropDown,
    MultipleChoice,
    Number,
    Date,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 6] = [
        QuestionKind::Paragraph,
        QuestionKind::YesOrNo,
        QuestionKind::DropDown,
        QuestionKind::MultipleChoice,
        QuestionKind::Number,
        QuestionKind::Date,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            QuestionKind::Paragraph => "Paragraph",
            QuestionKind::YesOrNo => "YesOrNo",
            QuestionKind::DropDown => "DropDown",
            QuestionKind::MultipleChoice => "MultipleChoice",
            QuestionKind::Number => "Number",
            QuestionKind::Date => "Date",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a wire-level type label names none of the built-in kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized question type '{0}'")]
pub struct UnknownQuestionKind(pub String);

impl FromStr for QuestionKind {
    type Err = UnknownQuestionKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        QuestionKind::ALL
            .into_iter()
            .find(|kind| kind.label() == value)
            .ok_or_else(|| UnknownQuestionKind(value.to_string()))
    }
}

/// Question definition as submitted when a program is created.
///
/// The type stays a plain label here so an unrecognized kind surfaces as a
/// validation error naming the question instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDefinition {
    #[serde(default)]
    pub question: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default, deserialize_with = "choice_cap")]
    pub max_choice_allowed: u32,
    #[serde(default)]
    pub other_option_enabled: bool,
}

/// Negative caps collapse to 0 so they fail the cap rule with the question named.
fn clamp_cap(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

fn choice_cap<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(clamp_cap(i64::deserialize(deserializer)?))
}

fn optional_choice_cap<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.map(clamp_cap))
}

/// A validated question owned by a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub max_choice_allowed: u32,
    #[serde(default)]
    pub other_option_enabled: bool,
}

impl Question {
    /// Whether `value` is one of the declared choices.
    pub fn declares_choice(&self, value: &str) -> bool {
        self.choices.iter().any(|choice| choice == value)
    }

    /// Whether `value` is acceptable for a choice-based answer.
    pub fn accepts_choice(&self, value: &str) -> bool {
        self.other_option_enabled || self.declares_choice(value)
    }
}

/// Tri-state flag used by update payloads; `Unspecified` leaves the target untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldStatus {
    #[default]
    Unspecified,
    Enabled,
    Disabled,
}

impl FieldStatus {
    pub fn apply(self, current: bool) -> bool {
        match self {
            FieldStatus::Unspecified => current,
            FieldStatus::Enabled => true,
            FieldStatus::Disabled => false,
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, FieldStatus::Enabled)
    }
}

/// Question entry in a program update, as received on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionUpdate {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default, deserialize_with = "optional_choice_cap")]
    pub max_choice_allowed: Option<u32>,
    #[serde(default)]
    pub other_option_status: FieldStatus,
}

/// Typed form of [`QuestionUpdate`] once its kind label has been recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub question: Option<String>,
    pub kind: Option<QuestionKind>,
    pub choices: Vec<String>,
    pub max_choice_allowed: Option<u32>,
    pub other_option: FieldStatus,
}

impl QuestionPatch {
    /// Prompt carried by the patch, ignoring blank text.
    pub fn prompt(&self) -> Option<&str> {
        self.question
            .as_deref()
            .filter(|prompt| !prompt.trim().is_empty())
    }

    /// Builds a fresh question when the patch carries a prompt and a kind.
    pub fn to_question(&self) -> Option<Question> {
        let question = self.prompt()?.to_string();
        let kind = self.kind?;

        Some(Question {
            question,
            kind,
            choices: self.choices.clone(),
            max_choice_allowed: self.max_choice_allowed.unwrap_or(0),
            other_option_enabled: self.other_option.is_enabled(),
        })
    }
}

/// Raw answer payload. Positional: the n-th answer responds to the n-th question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub number: Option<f64>,
    #[serde(default)]
    pub multiple_choices: Vec<String>,
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn number(value: f64) -> Self {
        Self {
            number: Some(value),
            ..Self::default()
        }
    }

    pub fn choices<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            multiple_choices: values.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// Answer that passed validation, stamped with the kind of its question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundAnswer {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub multiple_choices: Vec<String>,
}

impl BoundAnswer {
    pub(crate) fn stamp(kind: QuestionKind, answer: Answer) -> Self {
        Self {
            kind,
            text: answer.text,
            number: answer.number,
            multiple_choices: answer.multiple_choices,
        }
    }
}
