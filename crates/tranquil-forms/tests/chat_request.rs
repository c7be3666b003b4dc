use tranquil_core::models::field::name;
use tranquil_forms::chat_request::{ChatRequestForm, FormStatus, SubmitOutcome};
use tranquil_forms::config::FormsConfig;
use tranquil_forms::error::FormError;

fn filled() -> ChatRequestForm {
    let mut f = ChatRequestForm::new();
    f.set_field(name::FULL_NAME, "Riley Chen").unwrap();
    f.set_field(name::EMAIL, "riley@example.com").unwrap();
    f.set_field(name::PREFERRED_CONTACT_TIME, "Evening").unwrap();
    f.set_field(name::MESSAGE, "I'd like to talk about work stress.").unwrap();
    f.set_field(name::AGREE_TO_TERMS, true).unwrap();
    f
}

#[tokio::test(start_paused = true)]
async fn invalid_form_is_rejected_without_delay() {
    let mut f = ChatRequestForm::new();
    f.set_field(name::EMAIL, "not-an-email").unwrap();

    let before = tokio::time::Instant::now();
    let outcome = f.submit(&FormsConfig::default()).await.unwrap();
    assert_eq!(before.elapsed(), std::time::Duration::ZERO);

    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected rejection");
    };
    assert!(errors.contains_key(name::EMAIL));
    assert!(errors.contains_key(name::FULL_NAME));
    assert!(!errors.contains_key(name::PHONE));
    assert_eq!(f.status(), FormStatus::Editing);
}

#[tokio::test(start_paused = true)]
async fn valid_form_submits_after_delay() {
    let config = FormsConfig::default();
    let mut f = filled();

    let before = tokio::time::Instant::now();
    let outcome = f.submit(&config).await.unwrap();
    assert!(before.elapsed() >= config.submission_delay());

    let SubmitOutcome::Accepted(receipt) = outcome else {
        panic!("expected acceptance");
    };
    assert_eq!(receipt.request.email, "riley@example.com");
    assert_eq!(receipt.request.phone, None);
    assert_eq!(f.status(), FormStatus::Submitted);
}

#[tokio::test(start_paused = true)]
async fn auto_close_resets_form() {
    let config = FormsConfig::default();
    let mut f = filled();
    f.submit(&config).await.unwrap();

    let before = tokio::time::Instant::now();
    f.auto_close(&config).await.unwrap();
    assert!(before.elapsed() >= config.auto_close());
    assert_eq!(f.status(), FormStatus::Closed);
    assert!(f.values().is_empty());

    f.reopen();
    assert_eq!(f.status(), FormStatus::Editing);
}

#[tokio::test(start_paused = true)]
async fn submitted_form_cannot_be_edited() {
    let mut f = filled();
    f.submit(&FormsConfig::default()).await.unwrap();
    let err = f.set_field(name::MESSAGE, "changed my mind").unwrap_err();
    assert!(matches!(err, FormError::InvalidState { .. }));
}

#[tokio::test]
async fn auto_close_requires_submission() {
    let mut f = ChatRequestForm::new();
    assert!(f.auto_close(&FormsConfig::default()).await.is_err());
}

#[test]
fn optional_phone_is_validated_when_present() {
    let mut f = ChatRequestForm::new();
    f.set_field(name::PHONE, "").unwrap();
    assert_eq!(f.error(name::PHONE), None);
    f.set_field(name::PHONE, "abc").unwrap();
    assert!(f.error(name::PHONE).is_some());
}

#[tokio::test(start_paused = true)]
async fn cancelled_submission_returns_to_editing() {
    let config = FormsConfig::default();
    let mut f = filled();

    let cut_short = tokio::time::timeout(
        std::time::Duration::from_millis(10),
        f.submit(&config),
    )
    .await;
    assert!(cut_short.is_err());

    assert_eq!(f.status(), FormStatus::Editing);
    assert_eq!(f.values().len(), 5);
    f.set_field(name::MESSAGE, "Actually, mornings work better for me.").unwrap();

    let outcome = f.submit(&config).await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
    assert_eq!(f.status(), FormStatus::Submitted);
}

#[tokio::test(start_paused = true)]
async fn reset_clears_a_submitted_form() {
    let mut f = filled();
    f.submit(&FormsConfig::default()).await.unwrap();

    f.reset();
    assert_eq!(f.status(), FormStatus::Editing);
    assert!(f.values().is_empty());
    assert!(f.errors().is_empty());
    f.set_field(name::FULL_NAME, "Riley Chen").unwrap();
}

#[test]
fn pinned_today_is_used_for_date_fields() {
    let mut f = ChatRequestForm::new().with_today(jiff::civil::date(2026, 3, 15));
    f.set_field(name::DATE_OF_BIRTH, "2026-03-15").unwrap();
    assert_eq!(f.error(name::DATE_OF_BIRTH), None);
    f.set_field(name::DATE_OF_BIRTH, "2026-03-16").unwrap();
    assert_eq!(
        f.error(name::DATE_OF_BIRTH),
        Some(tranquil_forms::validation::FUTURE_DATE_MESSAGE)
    );
}
