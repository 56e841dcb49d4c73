use futures::executor::block_on;

use super::*;

fn fields(name: &str, email: &str, subject: &str, message: &str) -> ContactFields {
    ContactFields {
        name: name.to_owned(),
        email: email.to_owned(),
        subject: subject.to_owned(),
        message: message.to_owned(),
    }
}

// =============================================================
// Whole-form validation
// =============================================================

#[test]
fn valid_input_passes_every_field() {
    let result = validate(&fields(
        "Jane Doe",
        "jane@example.com",
        "Hello",
        "This is a message.",
    ));
    assert!(result.is_valid());
    assert_eq!(result.invalid_count(), 0);
}

#[test]
fn partially_invalid_input_marks_exactly_the_bad_fields() {
    let result = validate(&fields("A", "bad", "Hire you", "short"));
    assert_eq!(result.invalid_count(), 3);
    assert_eq!(result.name, Some(NAME_ERROR));
    assert_eq!(result.email, Some(EMAIL_ERROR));
    assert_eq!(result.subject, None);
    assert_eq!(result.message, Some(MESSAGE_ERROR));
}

#[test]
fn two_character_subject_is_one_short() {
    let result = validate(&fields("A", "bad", "ok", "short"));
    assert_eq!(result.invalid_count(), 4);
    assert_eq!(result.subject, Some(SUBJECT_ERROR));
}

#[test]
fn empty_form_fails_all_four_fields() {
    let result = validate(&ContactFields::default());
    assert_eq!(result.invalid_count(), 4);
}

#[test]
fn whitespace_only_values_are_rejected() {
    let result = validate(&fields("  ", "a@b.c", "   ", "          "));
    assert_eq!(result.name, Some(NAME_ERROR));
    assert_eq!(result.subject, Some(SUBJECT_ERROR));
    // Ten spaces trim to nothing.
    assert_eq!(result.message, Some(MESSAGE_ERROR));
}

#[test]
fn boundary_lengths_are_inclusive() {
    let result = validate(&fields("Jo", "j@e.io", "Hi!", "0123456789"));
    assert!(result.is_valid());
}

// =============================================================
// Email rule
// =============================================================

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("jane@example.com"));
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@sub.domain.org"));
}

#[test]
fn rejects_missing_parts() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("jane"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("jane@"));
    assert!(!is_valid_email("jane@example"));
    assert!(!is_valid_email("jane@.com"));
    assert!(!is_valid_email("jane@example."));
}

#[test]
fn rejects_whitespace_and_extra_at_signs() {
    assert!(!is_valid_email("jane doe@example.com"));
    assert!(!is_valid_email("jane@ example.com"));
    assert!(!is_valid_email("jane@exa mple.com"));
    assert!(!is_valid_email("jane@@example.com"));
}

// =============================================================
// Submit lifecycle
// =============================================================

#[test]
fn submit_status_starts_idle() {
    assert_eq!(SubmitStatus::default(), SubmitStatus::Idle);
}

fn filled() -> ContactFields {
    fields(
        "Jane Doe",
        "jane@example.com",
        "Hello",
        "This is a message.",
    )
}

async fn accepting(_: ContactFields) -> Result<(), String> {
    Ok(())
}

async fn refusing(_: ContactFields) -> Result<(), String> {
    Err("mail relay offline".to_owned())
}

#[test]
fn invalid_input_never_starts_an_attempt() {
    let mut form = FormController {
        fields: fields("A", "bad", "ok", "short"),
        ..FormController::default()
    };
    assert!(!block_on(form.submit_with(accepting)));
    assert_eq!(form.status, SubmitStatus::Idle);
    assert_eq!(form.errors.invalid_count(), 4);
    // Entered values stay for correction.
    assert_eq!(form.fields.name, "A");
}

#[test]
fn successful_submission_clears_the_form() {
    let mut form = FormController {
        fields: filled(),
        ..FormController::default()
    };
    let (snapshot, token) = form.begin().expect("valid input starts an attempt");
    assert_eq!(form.status, SubmitStatus::Submitting);
    assert_eq!(snapshot, filled());

    form.settle(token, block_on(accepting(snapshot)));
    assert_eq!(form.status, SubmitStatus::Success);
    assert_eq!(form.fields, ContactFields::default());

    form.dismiss(token);
    assert_eq!(form.status, SubmitStatus::Idle);
}

#[test]
fn failed_submission_keeps_the_entered_values() {
    let mut form = FormController {
        fields: filled(),
        ..FormController::default()
    };
    assert!(block_on(form.submit_with(refusing)));
    // Out of `Submitting` in every outcome, so the control is never stranded
    // disabled.
    assert_eq!(form.status, SubmitStatus::Error);
    assert_eq!(form.fields, filled());
    assert!(form.errors.is_valid());
}

#[test]
fn stale_notice_timer_cannot_clobber_a_newer_attempt() {
    let mut form = FormController {
        fields: filled(),
        ..FormController::default()
    };
    let (_, first) = form.begin().expect("first attempt");
    form.settle(first, Ok(()));

    // Resubmission while the first notice is still on screen.
    form.fields = filled();
    let (_, second) = form.begin().expect("second attempt");
    form.dismiss(first);
    assert_eq!(form.status, SubmitStatus::Submitting, "stale dismiss ignored");
    form.settle(first, Err("late".to_owned()));
    assert_eq!(form.status, SubmitStatus::Submitting, "stale verdict ignored");

    form.settle(second, Ok(()));
    form.dismiss(second);
    assert_eq!(form.status, SubmitStatus::Idle);
}
