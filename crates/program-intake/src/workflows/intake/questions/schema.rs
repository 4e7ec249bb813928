use super::domain::{Question, QuestionDefinition, QuestionKind, QuestionPatch, QuestionUpdate};
use super::error::ValidationError;

/// Smallest selection cap a multiple-choice question may declare.
pub const MIN_CHOICE_CAP: u32 = 2;

/// Check every definition in order, stopping at the first invalid one.
pub fn validate(questions: &[QuestionDefinition]) -> Result<(), ValidationError> {
    questions.iter().try_for_each(|definition| {
        check_definition(definition)?;
        Ok(())
    })
}

/// Validate the definitions and convert them into typed questions.
pub fn parse_questions(questions: Vec<QuestionDefinition>) -> Result<Vec<Question>, ValidationError> {
    questions
        .into_iter()
        .map(|definition| {
            let kind = check_definition(&definition)?;
            Ok(Question {
                question: definition.question,
                kind,
                choices: definition.choices,
                max_choice_allowed: definition.max_choice_allowed,
                other_option_enabled: definition.other_option_enabled,
            })
        })
        .collect()
}

fn check_definition(definition: &QuestionDefinition) -> Result<QuestionKind, ValidationError> {
    let kind = definition
        .kind
        .parse::<QuestionKind>()
        .map_err(|_| ValidationError::InvalidQuestionType {
            question: definition.question.clone(),
        })?;

    check_choice_cap(&definition.question, kind, definition.max_choice_allowed)?;
    Ok(kind)
}

fn check_choice_cap(prompt: &str, kind: QuestionKind, cap: u32) -> Result<(), ValidationError> {
    if kind == QuestionKind::MultipleChoice && cap < MIN_CHOICE_CAP {
        return Err(ValidationError::MissingChoiceCap {
            question: prompt.to_string(),
        });
    }
    Ok(())
}

/// Recognize the type labels of an update payload.
///
/// Entries that omit the type keep it absent so the merge retains the stored kind.
pub fn parse_updates(updates: Vec<QuestionUpdate>) -> Result<Vec<QuestionPatch>, ValidationError> {
    updates
        .into_iter()
        .enumerate()
        .map(|(index, update)| {
            let kind = match update.kind.as_deref() {
                None | Some("") => None,
                Some(label) => Some(label.parse::<QuestionKind>().map_err(|_| {
                    ValidationError::InvalidQuestionType {
                        question: update_label(update.question.as_deref(), index),
                    }
                })?),
            };

            Ok(QuestionPatch {
                question: update.question,
                kind,
                choices: update.choices,
                max_choice_allowed: update.max_choice_allowed,
                other_option: update.other_option_status,
            })
        })
        .collect()
}

/// Patches past the end of `existing` become new questions, so they must be
/// complete definitions on their own.
pub fn validate_additions(
    existing: &[Question],
    patches: &[QuestionPatch],
) -> Result<(), ValidationError> {
    patches
        .iter()
        .enumerate()
        .skip(existing.len())
        .try_for_each(|(index, patch)| {
            let prompt = patch
                .prompt()
                .ok_or(ValidationError::MissingField { field: "question" })?;
            let kind = patch.kind.ok_or_else(|| ValidationError::InvalidQuestionType {
                question: update_label(Some(prompt), index),
            })?;
            check_choice_cap(prompt, kind, patch.max_choice_allowed.unwrap_or(0))
        })
}

fn update_label(prompt: Option<&str>, index: usize) -> String {
    match prompt.filter(|prompt| !prompt.trim().is_empty()) {
        Some(prompt) => prompt.to_string(),
        None => format!("#{}", index + 1),
    }
}
