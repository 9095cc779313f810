use std::sync::Arc;

use persona_core::{FlagField, NumericField, FORM_FIELDS};
use persona_sdk::{AssessmentForm, HttpClient, SdkConfig, SubmitOutcome};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn form_for(server: &MockServer) -> AssessmentForm {
    let client = HttpClient::new(SdkConfig::new(server.uri())).unwrap();
    AssessmentForm::new(Arc::new(client))
}

fn fill_valid(form: &mut AssessmentForm) {
    form.set_field(NumericField::TimeSpentAlone, 40.0);
    form.set_field(NumericField::SocialEventAttendance, 5.0);
    form.set_field(NumericField::GoingOutside, 12.0);
    form.set_field(NumericField::FriendsCircleSize, 8.0);
    form.set_field(NumericField::PostFrequency, 3.0);
    form.set_flag(FlagField::StageFear, true);
    form.set_flag(FlagField::DrainedAfterSocializing, false);
}

#[tokio::test]
async fn test_empty_form_fails_validation_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = form_for(&server);
    let outcome = form.submit().await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(form.validation_errors().len(), FORM_FIELDS.len());
    assert!(form.prediction().is_none());
}

#[tokio::test]
async fn test_out_of_bounds_field_blocks_submission() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = form_for(&server);
    fill_valid(&mut form);
    form.set_field(NumericField::PostFrequency, 101.0);

    assert_eq!(form.submit().await, SubmitOutcome::Invalid);
    assert_eq!(
        form.validation_errors()
            .get(&NumericField::PostFrequency)
            .map(String::as_str),
        Some("Social Media Activity must be between 0 and 100 posts/week")
    );
}

#[tokio::test]
async fn test_all_failing_fields_are_reported_at_once() {
    let server = MockServer::start().await;
    let mut form = form_for(&server);
    fill_valid(&mut form);
    form.set_field(NumericField::TimeSpentAlone, 0.0);
    form.set_field(NumericField::GoingOutside, 999.0);

    assert_eq!(form.submit().await, SubmitOutcome::Invalid);
    assert_eq!(form.validation_errors().len(), 2);
}

#[tokio::test]
async fn test_editing_a_field_clears_only_its_error() {
    let server = MockServer::start().await;
    let mut form = form_for(&server);
    form.submit().await;
    assert_eq!(form.validation_errors().len(), FORM_FIELDS.len());

    form.set_field(NumericField::TimeSpentAlone, 40.0);
    assert_eq!(form.validation_errors().len(), FORM_FIELDS.len() - 1);
    assert!(!form
        .validation_errors()
        .contains_key(&NumericField::TimeSpentAlone));
}

#[tokio::test]
async fn test_valid_submission_sends_all_seven_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .and(body_json(json!({
            "Time_spent_Alone": 40.0,
            "Stage_fear": true,
            "Social_event_attendance": 5.0,
            "Going_outside": 12.0,
            "Drained_after_socializing": false,
            "Friends_circle_size": 8.0,
            "Post_frequency": 3.0,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"prediction": "Extrovert"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = form_for(&server);
    fill_valid(&mut form);

    assert_eq!(form.submit().await, SubmitOutcome::Predicted);
    assert_eq!(form.prediction().unwrap().prediction, "Extrovert");
    assert_eq!(form.profile().unwrap().title, "Extrovert");
    assert!(form.error_message().is_none());
    assert!(!form.is_loading());
}

#[tokio::test]
async fn test_unknown_label_selects_default_branding() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"prediction": "Unicorn"})))
        .mount(&server)
        .await;

    let mut form = form_for(&server);
    fill_valid(&mut form);
    form.submit().await;

    assert_eq!(form.profile().unwrap().title, "Personality");
}

#[tokio::test]
async fn test_server_failure_stores_a_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Failed to make prediction",
            "details": "backend responded with status 503",
        })))
        .mount(&server)
        .await;

    let mut form = form_for(&server);
    fill_valid(&mut form);

    assert_eq!(form.submit().await, SubmitOutcome::Failed);
    assert_eq!(
        form.error_message(),
        Some("Failed to generate prediction. Please try again.")
    );
    assert!(form.prediction().is_none());
    // Backend detail never leaks into the stored message.
    assert!(!form.error_message().unwrap().contains("503"));
}

#[tokio::test]
async fn test_reset_restores_defaults_and_clears_everything() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"prediction": "Introvert"})))
        .mount(&server)
        .await;

    let mut form = form_for(&server);
    fill_valid(&mut form);
    form.submit().await;
    assert!(form.prediction().is_some());

    form.reset();

    assert_eq!(form.record(), &persona_core::AssessmentRecord::default());
    assert!(form.prediction().is_none());
    assert!(form.error_message().is_none());
    assert!(form.validation_errors().is_empty());
}

#[tokio::test]
async fn test_resubmit_after_reset_revalidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"prediction": "Introvert"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = form_for(&server);
    fill_valid(&mut form);
    form.submit().await;
    form.reset();

    // The cleared form is back to "everything required".
    assert_eq!(form.submit().await, SubmitOutcome::Invalid);
}
