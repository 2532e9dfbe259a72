//! Integration tests for the submit flow of the form controller


use std::time::Duration;
use test_support::{
    invalid_form, valid_form, CountingAnalytics, RecordingDisplay, RecordingNavigator,
    ScriptedSubmitter,
};
use waitlist_core::{
    ControllerSettings, FieldRule, FieldRuleTable, FormController, SubmitButton, SubmitControl,
    SubmitOutcome, Validator,
};

type TestController = FormController<'static, RecordingDisplay, SubmitButton, RecordingNavigator>;

fn controller(submitter: ScriptedSubmitter) -> TestController {
    FormController::new(
        RecordingDisplay::default(),
        SubmitButton::new("Join"),
        RecordingNavigator::default(),
        Box::new(submitter),
    )
}

#[tokio::test]
async fn test_valid_form_is_submitted_trimmed_and_redirects() {
    let submitter = ScriptedSubmitter::default();
    let analytics = CountingAnalytics::default();
    let mut form = controller(submitter.clone()).with_analytics(Box::new(analytics.clone()));

    let outcome = form.on_submit(&valid_form()).await;

    assert!(matches!(outcome, SubmitOutcome::Submitted(ref r) if r.reference.as_deref() == Some("test-1")));
    assert_eq!(submitter.calls(), 1);
    let received = submitter.received.lock().unwrap()[0].clone();
    assert_eq!(received.get("firstName"), Some("Grace"));
    assert_eq!(received.get("email"), Some("grace@example.com"));
    assert_eq!(analytics.count(), 1);
    assert_eq!(form.navigator().redirects, vec!["thank-you.html"]);
    assert!(form.display().errors.is_empty());
    // The page is left, so the control stays disabled
    assert!(form.control().is_disabled());
    assert_eq!(form.control().label, "Submitting...");
}

#[tokio::test]
async fn test_invalid_form_never_reaches_submitter() {
    let submitter = ScriptedSubmitter::default();
    let mut form = controller(submitter.clone());

    let outcome = form.on_submit(&invalid_form()).await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(submitter.calls(), 0);
    assert_eq!(
        form.display().error_for("firstName"),
        Some("First name must be at least 2 characters")
    );
    assert_eq!(
        form.display().error_for("email"),
        Some("Please enter a valid email address")
    );
    assert_eq!(form.display().error_for("lastName"), None);
    assert!(!form.control().is_disabled());
    assert!(form.navigator().redirects.is_empty());
}

#[tokio::test]
async fn test_failure_alerts_once_and_restores_control() {
    let analytics = CountingAnalytics::default();
    let mut form =
        controller(ScriptedSubmitter::failing()).with_analytics(Box::new(analytics.clone()));

    let outcome = form.on_submit(&valid_form()).await;

    assert!(matches!(outcome, SubmitOutcome::Failed { ref reason } if reason.contains("scripted failure")));
    assert_eq!(
        form.display().alerts,
        vec!["Sorry, there was an error submitting your information. Please try again."]
    );
    assert!(!form.control().is_disabled());
    assert_eq!(form.control().label, "Join");
    assert_eq!(analytics.count(), 0);
    assert!(form.navigator().redirects.is_empty());
}

#[tokio::test]
async fn test_missing_analytics_does_not_change_outcome() {
    let mut form = controller(ScriptedSubmitter::default());
    let outcome = form.on_submit(&valid_form()).await;
    assert!(matches!(outcome, SubmitOutcome::Submitted(_)));
    assert_eq!(form.navigator().redirects.len(), 1);
}

#[tokio::test]
async fn test_disabled_control_blocks_second_submission() {
    let submitter = ScriptedSubmitter::default();
    let mut button = SubmitButton::new("Join");
    button.set_disabled(true);
    let mut form = FormController::new(
        RecordingDisplay::default(),
        button,
        RecordingNavigator::default(),
        Box::new(submitter.clone()),
    );

    assert_eq!(form.on_submit(&valid_form()).await, SubmitOutcome::Busy);
    assert_eq!(submitter.calls(), 0);
}

#[tokio::test]
async fn test_timeout_is_reported_as_failure() {
    let settings = ControllerSettings {
        timeout: Some(Duration::from_millis(50)),
        ..ControllerSettings::default()
    };
    let mut form =
        controller(ScriptedSubmitter::slow(Duration::from_secs(5))).with_settings(settings);

    let outcome = form.on_submit(&valid_form()).await;

    match outcome {
        SubmitOutcome::Failed { reason } => assert!(reason.contains("timed out after 50ms")),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(form.display().alerts.len(), 1);
    assert!(!form.control().is_disabled());
}

#[tokio::test]
async fn test_custom_redirect_target() {
    let settings = ControllerSettings {
        redirect_target: "/welcome".to_string(),
        ..ControllerSettings::default()
    };
    let mut form = controller(ScriptedSubmitter::default()).with_settings(settings);
    form.on_submit(&valid_form()).await;
    assert_eq!(form.navigator().redirects, vec!["/welcome"]);
}

#[test]
fn test_blur_shows_and_input_clears() {
    let mut form = controller(ScriptedSubmitter::default());

    assert!(!form.on_blur("email", Some("")));
    assert_eq!(form.display().error_for("email"), Some("Email is required"));

    form.on_input("email");
    assert_eq!(form.display().error_for("email"), None);

    assert!(!form.on_blur("lastName", Some("Smith1")));
    assert!(form.on_blur("lastName", Some("Smith")));
    assert_eq!(form.display().error_for("lastName"), None);

    assert!(form.on_blur("nickname", Some("???")));
}

#[tokio::test]
async fn test_custom_rules_drive_the_controller() {
    let table = FieldRuleTable::new().with_rule(
        "handle",
        FieldRule::builder()
            .required("Handle is required")
            .build()
            .unwrap(),
    );
    let submitter = ScriptedSubmitter::default();
    let mut form = controller(submitter.clone()).with_validator(Validator::new(&table));

    let blank = waitlist_core::FormData::new().with_field("handle", " ");
    assert_eq!(form.on_submit(&blank).await, SubmitOutcome::Invalid);
    assert_eq!(form.display().error_for("handle"), Some("Handle is required"));

    // firstName has no rule in this table, so anything goes
    let ok = waitlist_core::FormData::new()
        .with_field("handle", "gh")
        .with_field("firstName", "1");
    assert!(matches!(form.on_submit(&ok).await, SubmitOutcome::Submitted(_)));
    assert_eq!(submitter.calls(), 1);
}
