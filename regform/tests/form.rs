//! Tests for the form controller event flow.

use regform::RegistrationForm;
use regform::field::{Field, FieldSet};
use regform::submit::ResultView;

fn fill(form: &mut RegistrationForm, name: &str, email: &str, password: &str) {
    form.on_field_change("name", name);
    form.on_field_change("email", email);
    form.on_field_change("password", password);
}

#[test]
fn test_missing_name_blocks_submit() {
    let mut form = RegistrationForm::new();
    fill(&mut form, "", "a@b.com", "abc123!");

    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.error(Field::Name), Some("Name is required"));
    assert!(!form.is_valid());
    assert!(form.on_submit_requested().is_none());
    assert!(!form.show_result());
    assert!(form.last_submission().is_none());
}

#[test]
fn test_bad_email_is_reported() {
    let mut form = RegistrationForm::new();
    fill(&mut form, "Jo", "bad-email", "abc123!");

    assert_eq!(form.error(Field::Email), Some("Invalid Email format."));
    assert!(!form.is_valid());
}

#[test]
fn test_valid_submit() {
    let mut form = RegistrationForm::new();
    fill(&mut form, "Jo", "jo@example.com", "abc123!");

    assert!(form.errors().is_empty());
    assert!(form.is_valid());

    let record = form.on_submit_requested().cloned().unwrap();
    assert_eq!(record.name(), "Jo");
    assert_eq!(record.email(), "jo@example.com");
    assert_eq!(record.password(), "abc123!");
    assert!(form.show_result());
    assert_eq!(
        form.result(),
        Some(ResultView {
            name: "Jo",
            email: "jo@example.com"
        })
    );
}

#[test]
fn test_script_in_name_is_stripped() {
    let mut form = RegistrationForm::new();
    fill(&mut form, "<script>alert(1)</script>", "x@y.com", "abc123!");

    assert!(form.is_valid());
    let record = form.on_submit_requested().cloned().unwrap();
    assert!(!record.name().contains("<script"));
    assert!(!record.name().contains("alert"));
    assert_eq!(record.email(), "x@y.com");
    assert_eq!(record.password(), "abc123!");
}

#[test]
fn test_values_are_kept_as_typed() {
    let mut form = RegistrationForm::new();
    form.on_field_change("name", "  Jo  ");
    assert_eq!(form.value(Field::Name), "  Jo  ");
    assert!(form.error(Field::Name).is_none());
}

#[test]
fn test_errors_follow_every_edit() {
    let mut form = RegistrationForm::new();
    fill(&mut form, "Jo", "jo@example.com", "abc123!");
    assert!(form.is_valid());

    form.on_field_change("email", "jo@");
    assert_eq!(form.error(Field::Email), Some("Invalid Email format."));
    assert!(!form.is_valid());

    form.on_field_change("email", "jo@example.com");
    assert!(form.error(Field::Email).is_none());
    assert!(form.is_valid());
}

#[test]
fn test_resubmit_is_idempotent() {
    let mut form = RegistrationForm::new();
    fill(&mut form, " Jo ", "jo@example.com", "abc123!");

    let first = form.on_submit_requested().cloned().unwrap();
    let second = form.on_submit_requested().cloned().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_resubmit_replaces_record() {
    let mut form = RegistrationForm::new();
    fill(&mut form, "Jo", "jo@example.com", "abc123!");
    form.on_submit_requested();

    form.on_field_change("name", "Jane");
    let record = form.on_submit_requested().cloned().unwrap();
    assert_eq!(record.name(), "Jane");
    assert_eq!(form.last_submission().map(|r| r.name()), Some("Jane"));
}

#[test]
fn test_result_stays_visible_after_edits() {
    let mut form = RegistrationForm::new();
    fill(&mut form, "Jo", "jo@example.com", "abc123!");
    form.on_submit_requested();

    form.on_field_change("name", "");
    assert!(!form.is_valid());
    assert!(form.show_result());
    assert_eq!(form.result().map(|r| r.name), Some("Jo"));

    // an invalid submit neither clears nor replaces the previous record
    assert!(form.on_submit_requested().is_none());
    assert!(form.show_result());
    assert_eq!(form.last_submission().map(|r| r.name()), Some("Jo"));
}

#[test]
fn test_password_is_submitted_verbatim() {
    for password in ["abc123!", "Ab1!Ab1!", "::))99zz", "abc123!@$#%&?"] {
        let mut form = RegistrationForm::new();
        fill(&mut form, "Jo", "jo@example.com", password);
        let record = form.on_submit_requested().cloned().unwrap();
        assert_eq!(record.password(), form.value(Field::Password));
    }
}

#[test]
fn test_typed_set_matches_named_change() {
    let mut by_name = RegistrationForm::new();
    let mut typed = RegistrationForm::new();
    fill(&mut by_name, "Jo", "bad", "abc123!");
    typed.set(Field::Name, "Jo");
    typed.set(Field::Email, "bad");
    typed.set(Field::Password, "abc123!");

    assert_eq!(by_name.fields(), typed.fields());
    assert_eq!(by_name.validation(), typed.validation());
}

#[test]
fn test_fields_serialize() {
    let mut form = RegistrationForm::new();
    fill(&mut form, "Jo", "jo@example.com", "abc123!");
    let json = serde_json::to_string(form.fields()).unwrap();
    let back: FieldSet = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, form.fields());
}
