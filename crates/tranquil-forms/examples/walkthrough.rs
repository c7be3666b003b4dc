//! Drives the intake flow end to end with scripted input.
//!
//! Answers every wizard section, prints the recommendations, completes the
//! profile form, and submits a chat request using the timings from the
//! forms config (defaults if none has been saved).
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p tranquil-forms --example walkthrough

use tranquil_core::models::answer::AnswerValue;
use tranquil_core::models::field::name;
use tranquil_forms::chat_request::{ChatRequestForm, SubmitOutcome};
use tranquil_forms::config;
use tranquil_forms::profile::{ProfileForm, StepOutcome};
use tranquil_forms::wizard::{IntakeWizard, Step};
use tranquil_intake::questionnaires::mental_health::id;

const SCRIPT: &[(&str, &str)] = &[
    (id::AGE_RANGE, "25-34"),
    (id::PREVIOUS_THERAPY, "No"),
    (id::THERAPY_GOAL, "Reduce stress"),
    (id::MOOD_LOW, "Several days"),
    (id::ANXIETY_FREQUENCY, "Often"),
    (id::PANIC_ATTACKS, "No"),
    (id::TRAUMA_EXPERIENCE, "No"),
    (id::GRIEF_LOSS, "No"),
    (id::RELATIONSHIP_STRAIN, "Sometimes"),
    (id::SLEEP_QUALITY, "Very poor"),
    (id::STRESS_LEVEL, "Often"),
    (id::SUBSTANCE_USE, "Rarely"),
    (id::CONFIDENCE_DOUBTS, "Sometimes"),
    (id::SESSION_FORMAT, "Individual"),
    (id::SESSION_MEDIUM, "Video"),
];

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let forms_config = config::load_or_default(&config::config_path()?)?;

    // Intake wizard
    let mut wizard = IntakeWizard::for_questionnaire("mental_health_intake")?;
    for (question_id, answer) in SCRIPT {
        wizard.answer(question_id, *answer)?;
    }
    wizard.answer(id::WELLBEING_SCALE, AnswerValue::Number(4))?;

    let recommendations = loop {
        let progress = wizard.progress();
        println!(
            "Section {}/{}: {}% answered",
            progress.section + 1,
            progress.section_count,
            progress.percent
        );
        match wizard.next() {
            Step::Advanced { .. } => continue,
            Step::Completed { recommendations } => break recommendations,
            Step::Blocked { unanswered } => {
                return Err(eyre::eyre!("script left questions unanswered: {unanswered:?}"));
            }
            Step::Finished => return Err(eyre::eyre!("wizard already finished")),
        }
    };

    let report = tranquil_export::report::build_report(wizard.questionnaire(), wizard.answers());
    debug_assert_eq!(report.recommendations, recommendations);
    println!();
    println!("{}", tranquil_export::render::render_default(&report)?);

    // Profile form
    let mut profile = ProfileForm::new();
    profile.set_field(name::FULL_NAME, "Jordan Reyes");
    profile.set_field(name::DATE_OF_BIRTH, "1991-07-04");
    profile.set_field(name::PHONE, "555-010-2030");
    profile.set_field(name::EMERGENCY_CONTACT_NAME, "Sam Reyes");
    profile.set_field(name::EMERGENCY_CONTACT_PHONE, "555-010-4050");
    profile.set_field(name::PRIMARY_CONCERN, "Work stress and poor sleep");
    profile.set_field(name::AGREE_TO_TERMS, true);

    loop {
        match profile.next(|details| println!("Profile saved for {}", details.full_name))? {
            StepOutcome::Advanced(step) => println!("Profile step: {}", step.title()),
            StepOutcome::Completed => break,
            StepOutcome::Blocked(errors) => return Err(eyre::eyre!("profile invalid: {errors:?}")),
        }
    }

    // Chat request
    let mut chat = ChatRequestForm::new();
    chat.set_field(name::FULL_NAME, "Jordan Reyes")?;
    chat.set_field(name::EMAIL, "jordan@example.com")?;
    chat.set_field(name::PREFERRED_CONTACT_TIME, "Evening")?;
    chat.set_field(name::MESSAGE, "I'd like to start with a short intro call.")?;
    chat.set_field(name::AGREE_TO_TERMS, true)?;

    println!("Sending chat request...");
    match chat.submit(&forms_config).await? {
        SubmitOutcome::Accepted(receipt) => println!("Request {} received", receipt.id),
        SubmitOutcome::Rejected(errors) => return Err(eyre::eyre!("chat request invalid: {errors:?}")),
    }
    chat.auto_close(&forms_config).await?;
    println!("Chat request modal closed ({:?})", chat.status());

    Ok(())
}
