use super::common::*;
use std::sync::Arc;

use crate::workflows::intake::programs::domain::{HiddenFieldsUpdate, ProgramId, ProgramUpdate};
use crate::workflows::intake::questions::{
    FieldStatus, QuestionKind, QuestionUpdate, ValidationError,
};
use crate::workflows::intake::repository::{ProgramRepository, RepositoryError};
use crate::workflows::intake::{ErrorTitle, Problem, ProgramService, ProgramServiceError};

#[test]
fn create_persists_typed_questions() {
    let (programs, _, repository, _) = build_services();

    let record = programs
        .create(program_submission())
        .expect("program is created");

    assert!(record.id.0.starts_with("prog-"));
    assert_eq!(record.personal_questions.len(), 2);
    assert_eq!(record.custom_questions[1].kind, QuestionKind::MultipleChoice);
    assert_eq!(record.created_at, record.updated_at);

    let stored = repository
        .fetch(&record.id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored, record);
}

#[test]
fn create_rejects_unknown_custom_question_type() {
    let (programs, _, repository, _) = build_services();
    let mut submission = program_submission();
    submission
        .custom_questions
        .push(definition("Upload your CV", "FileUpload"));

    match programs.create(submission) {
        Err(ProgramServiceError::Validation(ValidationError::InvalidQuestionType { question })) => {
            assert_eq!(question, "Upload your CV");
        }
        other => panic!("expected invalid question type, got {other:?}"),
    }
    assert!(repository.records.lock().expect("lock").is_empty());
}

#[test]
fn create_requires_choice_cap_on_either_list() {
    let (programs, _, _, _) = build_services();
    let mut submission = program_submission();
    submission.custom_questions[1].max_choice_allowed = 1;

    match programs.create(submission) {
        Err(ProgramServiceError::Validation(ValidationError::MissingChoiceCap { question })) => {
            assert_eq!(question, "Languages");
        }
        other => panic!("expected missing choice cap, got {other:?}"),
    }
}

#[test]
fn create_requires_title_and_prompts() {
    let (programs, _, _, _) = build_services();

    let mut untitled = program_submission();
    untitled.title = "   ".to_string();
    assert!(matches!(
        programs.create(untitled),
        Err(ProgramServiceError::Validation(ValidationError::MissingField {
            field: "program title"
        }))
    ));

    let mut blank_prompt = program_submission();
    blank_prompt.personal_questions[0].question.clear();
    assert!(matches!(
        programs.create(blank_prompt),
        Err(ProgramServiceError::Validation(ValidationError::MissingField {
            field: "question"
        }))
    ));
}

#[test]
fn fetch_distinguishes_missing_id_from_unknown_program() {
    let (programs, _, _, _) = build_services();

    assert!(matches!(
        programs.fetch(""),
        Err(ProgramServiceError::Validation(ValidationError::MissingField {
            field: "program id"
        }))
    ));
    assert!(matches!(
        programs.fetch("prog-unknown"),
        Err(ProgramServiceError::NotFound(ProgramId(id))) if id == "prog-unknown"
    ));
}

#[test]
fn update_retains_unspecified_fields() {
    let (programs, _, _, _) = build_services();
    let created = programs.create(program_submission()).expect("created");

    let updated = programs
        .update(&created.id.0, ProgramUpdate::default())
        .expect("empty update succeeds");

    assert_eq!(updated.title, created.title);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.hidden, created.hidden);
    assert_eq!(updated.personal_questions, created.personal_questions);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn update_applies_each_visibility_status_to_its_own_flag() {
    let (programs, _, _, _) = build_services();
    let created = programs.create(program_submission()).expect("created");

    let update = ProgramUpdate {
        title: Some("Winter Fellowship".to_string()),
        visibility: HiddenFieldsUpdate {
            phone_field_status: FieldStatus::Enabled,
            gender_field_status: FieldStatus::Disabled,
            ..HiddenFieldsUpdate::default()
        },
        ..ProgramUpdate::default()
    };
    let updated = programs.update(&created.id.0, update).expect("updated");

    assert_eq!(updated.title, "Winter Fellowship");
    assert!(updated.hidden.hide_phone);
    assert!(!updated.hidden.hide_gender);
    assert!(updated.hidden.hide_nationality);
    assert!(updated.hidden.hide_id_number);
}

#[test]
fn update_merges_each_question_list_independently() {
    let (programs, _, repository, _) = build_services();
    let created = programs.create(program_submission()).expect("created");

    let update = ProgramUpdate {
        personal_questions: vec![QuestionUpdate {
            question: Some("Describe yourself".to_string()),
            ..QuestionUpdate::default()
        }],
        custom_questions: vec![
            QuestionUpdate {
                choices: vec!["Data".to_string()],
                ..QuestionUpdate::default()
            },
            QuestionUpdate {
                choices: vec!["Rust".to_string(), "Zig".to_string()],
                max_choice_allowed: Some(3),
                other_option_status: FieldStatus::Enabled,
                ..QuestionUpdate::default()
            },
        ],
        ..ProgramUpdate::default()
    };
    programs.update(&created.id.0, update).expect("updated");

    let stored = repository
        .fetch(&created.id)
        .expect("fetch succeeds")
        .expect("present");

    assert_eq!(stored.personal_questions[0].question, "Describe yourself");
    assert_eq!(stored.personal_questions[1], created.personal_questions[1]);
    assert_eq!(stored.custom_questions.len(), created.custom_questions.len());
    assert_eq!(
        stored.custom_questions[0].choices,
        vec!["Backend", "Frontend", "Data"]
    );
    assert_eq!(
        stored.custom_questions[1].choices,
        vec!["Rust", "Go", "C#", "Zig"]
    );
    assert_eq!(stored.custom_questions[1].max_choice_allowed, 3);
    assert!(stored.custom_questions[1].other_option_enabled);
}

#[test]
fn update_appends_complete_new_questions() {
    let (programs, _, _, _) = build_services();
    let created = programs.create(program_submission()).expect("created");

    let mut personal: Vec<QuestionUpdate> = vec![QuestionUpdate::default(); 2];
    personal.push(QuestionUpdate {
        question: Some("Date of graduation".to_string()),
        kind: Some("Date".to_string()),
        ..QuestionUpdate::default()
    });
    let update = ProgramUpdate {
        personal_questions: personal,
        ..ProgramUpdate::default()
    };

    let updated = programs.update(&created.id.0, update).expect("updated");

    assert_eq!(updated.personal_questions.len(), 3);
    assert_eq!(updated.personal_questions[2].kind, QuestionKind::Date);
}

#[test]
fn update_rejects_unknown_types_and_incomplete_additions() {
    let (programs, _, _, _) = build_services();
    let created = programs.create(program_submission()).expect("created");

    let unknown = ProgramUpdate {
        custom_questions: vec![QuestionUpdate {
            kind: Some("Rating".to_string()),
            question: Some("Rate us".to_string()),
            ..QuestionUpdate::default()
        }],
        ..ProgramUpdate::default()
    };
    assert!(matches!(
        programs.update(&created.id.0, unknown),
        Err(ProgramServiceError::Validation(ValidationError::InvalidQuestionType { .. }))
    ));

    let mut custom: Vec<QuestionUpdate> = vec![QuestionUpdate::default(); 4];
    custom.push(QuestionUpdate {
        question: Some("Pick two".to_string()),
        kind: Some("MultipleChoice".to_string()),
        choices: vec!["a".to_string(), "b".to_string()],
        ..QuestionUpdate::default()
    });
    let uncapped = ProgramUpdate {
        custom_questions: custom,
        ..ProgramUpdate::default()
    };
    assert!(matches!(
        programs.update(&created.id.0, uncapped),
        Err(ProgramServiceError::Validation(ValidationError::MissingChoiceCap { .. }))
    ));

    let unchanged = programs.fetch(&created.id.0).expect("still present");
    assert_eq!(unchanged.custom_questions, created.custom_questions);
}

#[test]
fn update_of_unknown_program_is_not_found() {
    let (programs, _, _, _) = build_services();
    assert!(matches!(
        programs.update("prog-missing", ProgramUpdate::default()),
        Err(ProgramServiceError::NotFound(_))
    ));
}

#[test]
fn repository_failures_map_to_system_error() {
    let programs = ProgramService::new(Arc::new(UnavailablePrograms));

    let err = programs
        .create(program_submission())
        .expect_err("repository offline");
    assert!(matches!(
        err,
        ProgramServiceError::Repository(RepositoryError::Unavailable(_))
    ));

    let problem = Problem::from(&err);
    assert_eq!(problem.title, ErrorTitle::SystemError.label());
    assert_eq!(problem.status, 500);
}
