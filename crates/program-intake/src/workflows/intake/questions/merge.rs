use super::domain::{Question, QuestionPatch};
use super::error::ValidationError;
use super::schema::validate_additions;

/// Reconcile stored questions with an update list, joining on index.
///
/// Patches inside the existing range amend in place; patches past the end are
/// appended and must describe complete questions, otherwise the whole update is
/// rejected. Nothing is ever removed.
pub fn merge(
    mut existing: Vec<Question>,
    incoming: &[QuestionPatch],
) -> Result<Vec<Question>, ValidationError> {
    validate_additions(&existing, incoming)?;

    let stored = existing.len();
    for (current, patch) in existing.iter_mut().zip(incoming) {
        amend(current, patch);
    }
    existing.extend(
        incoming
            .iter()
            .skip(stored)
            .filter_map(QuestionPatch::to_question),
    );
    Ok(existing)
}

fn amend(current: &mut Question, patch: &QuestionPatch) {
    if let Some(prompt) = patch.prompt() {
        current.question = prompt.to_string();
    }
    if let Some(kind) = patch.kind {
        current.kind = kind;
    }

    current.choices = union(&current.choices, &patch.choices);
    // An absent cap clears the stored one; callers resend it on every update.
    current.max_choice_allowed = patch.max_choice_allowed.filter(|cap| *cap != 0).unwrap_or(0);
    current.other_option_enabled = patch.other_option.apply(current.other_option_enabled);
}

fn union(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(existing.len() + incoming.len());
    for choice in existing.iter().chain(incoming) {
        if !merged.contains(choice) {
            merged.push(choice.clone());
        }
    }
    merged
}
