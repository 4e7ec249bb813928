/// Validation failures raised while checking programs, questions and answers.
///
/// Every variant is recoverable and carries the text a client needs to locate
/// the offending field or question.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please specify the {field}")]
    MissingField { field: &'static str },
    #[error("Please provide answer to all questions")]
    IncompleteAnswers,
    #[error("Please answer the question: {question}")]
    MissingAnswer { question: String },
    #[error("Please provide a valid answer for the question: {question}")]
    InvalidAnswer { question: String },
    #[error("Specified options must not be greater than {max} for the question: ({question})")]
    TooManyChoices { question: String, max: u32 },
    #[error(
        "Please specify the date for the question: ({question}) in a valid format, such as 'yyyy-MM-dd'"
    )]
    InvalidDateFormat { question: String },
    #[error("Specified question type for question: ({question}), is not valid")]
    InvalidQuestionType { question: String },
    #[error("Please specify allowed maximum choices for the question: ({question})")]
    MissingChoiceCap { question: String },
}

impl ValidationError {
    pub(crate) fn missing_answer(question: &str) -> Self {
        Self::MissingAnswer {
            question: question.to_string(),
        }
    }

    pub(crate) fn invalid_answer(question: &str) -> Self {
        Self::InvalidAnswer {
            question: question.to_string(),
        }
    }
}
