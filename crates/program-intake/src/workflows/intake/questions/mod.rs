//! Question schema, answer binding and question-list merging.
//!
//! Everything here is pure: callers hand in owned copies of program and
//! submission data and get back either the result or the first validation error.

pub mod binding;
pub mod domain;
pub mod error;
pub mod merge;
pub mod schema;

pub use binding::{bind, parse_calendar_date};
pub use domain::{
    Answer, BoundAnswer, FieldStatus, Question, QuestionDefinition, QuestionKind, QuestionPatch,
    QuestionUpdate, UnknownQuestionKind,
};
pub use error::ValidationError;
pub use merge::merge;
pub use schema::{parse_questions, parse_updates, validate, validate_additions, MIN_CHOICE_CAP};
