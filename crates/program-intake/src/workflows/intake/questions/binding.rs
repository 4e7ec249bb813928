use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::domain::{Answer, BoundAnswer, Question, QuestionKind};
use super::error::ValidationError;

const YES: &str = "YES";
const NO: &str = "NO";

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Validate `answers` against `questions` by position and stamp each answer
/// with its question's kind.
///
/// The first failure wins. Answers beyond the last question are ignored, so the
/// output always has exactly one entry per question.
pub fn bind(
    questions: &[Question],
    answers: Vec<Option<Answer>>,
) -> Result<Vec<BoundAnswer>, ValidationError> {
    if !questions.is_empty() && answers.len() < questions.len() {
        return Err(ValidationError::IncompleteAnswers);
    }

    let mut answers = answers.into_iter();
    let mut bound = Vec::with_capacity(questions.len());

    for question in questions {
        let answer = answers
            .next()
            .flatten()
            .ok_or(ValidationError::IncompleteAnswers)?;
        check_answer(question, &answer)?;
        bound.push(BoundAnswer::stamp(question.kind, answer));
    }

    Ok(bound)
}

fn check_answer(question: &Question, answer: &Answer) -> Result<(), ValidationError> {
    match question.kind {
        QuestionKind::Paragraph => required_text(question, answer).map(drop),
        QuestionKind::YesOrNo => check_yes_or_no(question, answer),
        QuestionKind::DropDown => check_drop_down(question, answer),
        QuestionKind::MultipleChoice => check_multiple_choice(question, answer),
        QuestionKind::Number => Ok(()),
        QuestionKind::Date => check_date(question, answer),
    }
}

fn required_text<'a>(question: &Question, answer: &'a Answer) -> Result<&'a str, ValidationError> {
    answer
        .text
        .as_deref()
        .ok_or_else(|| ValidationError::missing_answer(&question.question))
}

fn check_yes_or_no(question: &Question, answer: &Answer) -> Result<(), ValidationError> {
    match answer.text.as_deref() {
        Some(YES) | Some(NO) => Ok(()),
        _ => Err(ValidationError::invalid_answer(&question.question)),
    }
}

fn check_drop_down(question: &Question, answer: &Answer) -> Result<(), ValidationError> {
    let text = required_text(question, answer)?;
    if !question.accepts_choice(text) {
        return Err(ValidationError::invalid_answer(&question.question));
    }
    Ok(())
}

fn check_multiple_choice(question: &Question, answer: &Answer) -> Result<(), ValidationError> {
    if !answer
        .multiple_choices
        .iter()
        .all(|selected| question.accepts_choice(selected))
    {
        return Err(ValidationError::invalid_answer(&question.question));
    }

    let selected = answer.multiple_choices.len();
    if selected > question.max_choice_allowed as usize {
        return Err(ValidationError::TooManyChoices {
            question: question.question.clone(),
            max: question.max_choice_allowed,
        });
    }

    Ok(())
}

fn check_date(question: &Question, answer: &Answer) -> Result<(), ValidationError> {
    let text = required_text(question, answer)?;
    parse_calendar_date(text).ok_or_else(|| ValidationError::InvalidDateFormat {
        question: question.question.clone(),
    })?;
    Ok(())
}

/// Parse the unambiguous date representations accepted for date answers.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|value| value.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|value| value.date_naive())
        })
}
