use tranquil_core::models::field::name;
use tranquil_core::models::profile::ProfileDetails;
use tranquil_forms::profile::{ProfileForm, ProfileStep, StepOutcome};
use tranquil_forms::validation::REQUIRED_MESSAGE;

fn form() -> ProfileForm {
    ProfileForm::new().with_today(jiff::civil::date(2026, 3, 15))
}

fn fill_personal(f: &mut ProfileForm) {
    f.set_field(name::FULL_NAME, "Jordan Reyes");
    f.set_field(name::DATE_OF_BIRTH, "1991-07-04");
    f.set_field(name::PHONE, "555-010-2030");
}

fn fill_emergency(f: &mut ProfileForm) {
    f.set_field(name::EMERGENCY_CONTACT_NAME, "Sam Reyes");
    f.set_field(name::EMERGENCY_CONTACT_PHONE, "555-010-4050");
}

fn fill_preferences(f: &mut ProfileForm) {
    f.set_field(name::PRIMARY_CONCERN, "Trouble sleeping and constant worry");
    f.set_field(name::AGREE_TO_TERMS, true);
}

#[test]
fn empty_step_is_blocked_with_errors() {
    let mut f = form();
    let outcome = f.next(|_| panic!("not complete")).unwrap();
    let StepOutcome::Blocked(errors) = outcome else {
        panic!("expected Blocked");
    };
    assert_eq!(errors.len(), 3);
    assert_eq!(f.error(name::PHONE), Some(REQUIRED_MESSAGE));
    assert_eq!(f.step(), ProfileStep::PersonalDetails);
}

#[test]
fn only_current_step_is_validated() {
    let mut f = form();
    fill_personal(&mut f);
    assert_eq!(
        f.next(|_| {}).unwrap(),
        StepOutcome::Advanced(ProfileStep::EmergencyContact)
    );
    assert!(f.errors().is_empty());
}

#[test]
fn future_birth_date_blocks_step() {
    let mut f = form();
    fill_personal(&mut f);
    f.set_field(name::DATE_OF_BIRTH, "2030-01-01");
    assert!(f.error(name::DATE_OF_BIRTH).is_some());
    assert!(matches!(f.next(|_| {}).unwrap(), StepOutcome::Blocked(_)));
}

#[test]
fn fixing_a_field_clears_its_error() {
    let mut f = form();
    f.set_field(name::FULL_NAME, "J");
    assert!(f.error(name::FULL_NAME).is_some());
    f.set_field(name::FULL_NAME, "Jo");
    assert_eq!(f.error(name::FULL_NAME), None);
}

#[test]
fn back_is_unguarded() {
    let mut f = form();
    assert!(!f.back());

    fill_personal(&mut f);
    f.next(|_| {}).unwrap();
    f.set_field(name::EMERGENCY_CONTACT_PHONE, "nope");
    assert!(f.back());
    assert_eq!(f.step(), ProfileStep::PersonalDetails);
}

#[test]
fn final_step_invokes_completion_callback() {
    let mut f = form();
    fill_personal(&mut f);
    fill_emergency(&mut f);
    fill_preferences(&mut f);

    f.next(|_| {}).unwrap();
    f.next(|_| {}).unwrap();
    assert_eq!(f.step(), ProfileStep::CarePreferences);

    let mut completed: Option<ProfileDetails> = None;
    let outcome = f.next(|details| completed = Some(details)).unwrap();
    assert_eq!(outcome, StepOutcome::Completed);

    let details = completed.expect("callback ran");
    assert_eq!(details.full_name, "Jordan Reyes");
    assert_eq!(details.date_of_birth, jiff::civil::date(1991, 7, 4));
    assert!(details.agreed_to_terms);
}

#[test]
fn unchecked_terms_block_completion() {
    let mut f = form();
    fill_personal(&mut f);
    fill_emergency(&mut f);
    fill_preferences(&mut f);
    f.set_field(name::AGREE_TO_TERMS, false);
    f.next(|_| {}).unwrap();
    f.next(|_| {}).unwrap();

    let mut called = false;
    let outcome = f.next(|_| called = true).unwrap();
    assert!(matches!(outcome, StepOutcome::Blocked(_)));
    assert!(!called);
    assert_eq!(f.error(name::AGREE_TO_TERMS), Some(REQUIRED_MESSAGE));
}

#[test]
fn reset_returns_to_first_step() {
    let mut f = form();
    fill_personal(&mut f);
    f.next(|_| {}).unwrap();
    f.reset();
    assert_eq!(f.step(), ProfileStep::PersonalDetails);
    assert!(f.values().is_empty());
}
