use crate::infra::{InMemoryApplicationRepository, InMemoryProgramRepository};
use clap::Args;
use program_intake::error::AppError;
use program_intake::workflows::intake::applications::{ApplicantDetails, ApplicationSubmission};
use program_intake::workflows::intake::programs::{
    HiddenFields, HiddenFieldsUpdate, ProgramSubmission, ProgramUpdate,
};
use program_intake::workflows::intake::questions::{
    Answer, FieldStatus, QuestionDefinition, QuestionKind, QuestionUpdate,
};
use program_intake::workflows::intake::{ApplicationService, Problem, ProgramService};
use serde::Serialize;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Applicant name used for the sample submission ("First Last").
    #[arg(long)]
    pub(crate) applicant: Option<String>,
    /// Skip the program update step and apply against the initial questions.
    #[arg(long)]
    pub(crate) skip_update: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        applicant,
        skip_update,
    } = args;

    let programs = Arc::new(InMemoryProgramRepository::default());
    let applications = Arc::new(InMemoryApplicationRepository::default());
    let program_service = ProgramService::new(programs.clone());
    let application_service = ApplicationService::new(programs, applications);

    println!("Program intake demo");
    let program = program_service.create(demo_program())?;
    print_json("Created program", &program.view());

    if !skip_update {
        let updated = program_service.update(&program.id.0, demo_update())?;
        println!(
            "\nUpdated program {}: {} personal / {} custom questions",
            updated.id.0,
            updated.personal_questions.len(),
            updated.custom_questions.len()
        );
    }
    let current = program_service.fetch(&program.id.0)?;

    println!("\nRejected submission");
    let mut incomplete = demo_submission(&current.id.0, applicant.as_deref(), !skip_update);
    incomplete.custom_answers.pop();
    match application_service.submit(incomplete) {
        Ok(record) => println!("  Unexpectedly accepted as {}", record.id.0),
        Err(err) => print_json("  Problem", &Problem::from(&err)),
    }

    let submission = demo_submission(&current.id.0, applicant.as_deref(), !skip_update);
    let record = application_service.submit(submission)?;
    print_json("\nAccepted application", &record.view());

    for (answer, question) in record
        .additional_answers
        .iter()
        .zip(&current.custom_questions)
    {
        println!("  {:<24} {}", question.question, answer.kind);
    }

    let submitted = application_service.for_program(&current.id)?;
    println!(
        "\nApplications on file for {}: {}",
        current.id.0,
        submitted.len()
    );

    Ok(())
}

fn print_json<T: Serialize>(label: &str, value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{label}:\n{json}"),
        Err(err) => println!("{label} unavailable: {err}"),
    }
}

fn definition(prompt: &str, kind: QuestionKind, choices: &[&str], cap: u32) -> QuestionDefinition {
    QuestionDefinition {
        question: prompt.to_string(),
        kind: kind.label().to_string(),
        choices: choices.iter().map(|choice| choice.to_string()).collect(),
        max_choice_allowed: cap,
        other_option_enabled: false,
    }
}

fn demo_program() -> ProgramSubmission {
    ProgramSubmission {
        title: "Summer Engineering Fellowship".to_string(),
        description: "Twelve week paid fellowship for early career engineers".to_string(),
        hidden: HiddenFields {
            hide_id_number: true,
            hide_gender: true,
            ..HiddenFields::default()
        },
        personal_questions: vec![
            definition("Tell us about yourself", QuestionKind::Paragraph, &[], 0),
            definition("Are you currently employed?", QuestionKind::YesOrNo, &[], 0),
        ],
        custom_questions: vec![
            definition(
                "Preferred track",
                QuestionKind::DropDown,
                &["Backend", "Frontend"],
                0,
            ),
            definition(
                "Languages",
                QuestionKind::MultipleChoice,
                &["Rust", "Go", "TypeScript"],
                2,
            ),
            definition("Years of experience", QuestionKind::Number, &[], 0),
            definition("Earliest start date", QuestionKind::Date, &[], 0),
        ],
    }
}

fn demo_update() -> ProgramUpdate {
    ProgramUpdate {
        visibility: HiddenFieldsUpdate {
            nationality_field_status: FieldStatus::Disabled,
            ..HiddenFieldsUpdate::default()
        },
        custom_questions: vec![
            QuestionUpdate {
                choices: vec!["Infrastructure".to_string()],
                ..QuestionUpdate::default()
            },
            QuestionUpdate {
                max_choice_allowed: Some(2),
                other_option_status: FieldStatus::Enabled,
                ..QuestionUpdate::default()
            },
            QuestionUpdate::default(),
            QuestionUpdate::default(),
            QuestionUpdate {
                question: Some("Portfolio highlights".to_string()),
                kind: Some(QuestionKind::Paragraph.label().to_string()),
                ..QuestionUpdate::default()
            },
        ],
        ..ProgramUpdate::default()
    }
}

fn demo_submission(
    program_id: &str,
    applicant: Option<&str>,
    updated: bool,
) -> ApplicationSubmission {
    let (first_name, last_name) = applicant
        .and_then(|name| name.trim().split_once(' '))
        .map(|(first, last)| (first.trim().to_string(), last.trim().to_string()))
        .unwrap_or_else(|| ("Ada".to_string(), "Obi".to_string()));

    let mut custom_answers = vec![
        Some(Answer::text(if updated { "Infrastructure" } else { "Backend" })),
        Some(Answer::choices(["Rust", "Go"])),
        Some(Answer::number(3.0)),
        Some(Answer::text("2025-06-02")),
    ];
    if updated {
        custom_answers.push(Some(Answer::text("Maintained a tracing exporter")));
    }

    ApplicationSubmission {
        program_id: Some(program_id.to_string()),
        applicant: ApplicantDetails {
            email: format!("{}@example.com", first_name.to_lowercase()),
            first_name,
            last_name,
            phone: Some("+234 800 000 0000".to_string()),
            nationality: Some("Nigerian".to_string()),
            current_residence: Some("Lagos".to_string()),
            date_of_birth: Some("1999-04-12".to_string()),
            ..ApplicantDetails::default()
        },
        personal_answers: vec![
            Some(Answer::text("Systems programmer who enjoys compilers")),
            Some(Answer::text("NO")),
        ],
        custom_answers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_with_and_without_update() {
        run_demo(DemoArgs::default()).expect("demo with update succeeds");
        run_demo(DemoArgs {
            applicant: Some("Grace Mensah".to_string()),
            skip_update: true,
        })
        .expect("demo without update succeeds");
    }

    #[test]
    fn applicant_name_is_split_on_first_space() {
        let submission = demo_submission("prog-000001", Some("Grace Ama Mensah"), false);
        assert_eq!(submission.applicant.first_name, "Grace");
        assert_eq!(submission.applicant.last_name, "Ama Mensah");
        assert_eq!(submission.custom_answers.len(), 4);
    }
}
