//! Assessment form state
//!
//! The questionnaire as the UI drives it: field-by-field edits, per-field
//! validation on submit, a single in-flight request, an explicit reset.

use std::sync::Arc;

use persona_core::{
    AssessmentRecord, FlagField, NumericField, PersonalityProfile, PredictionResult,
    ValidationErrors,
};
use tracing::error;

use crate::client::HttpClient;

/// User-facing message stored when a submission fails. The underlying
/// error is logged, never shown.
const SUBMIT_FAILED: &str = "Failed to generate prediction. Please try again.";

/// What a call to [`AssessmentForm::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was issued.
    Invalid,
    /// A submission was already in flight; no request was issued.
    InFlight,
    /// The backend returned a prediction.
    Predicted,
    /// The request was issued and failed.
    Failed,
}

/// The assessment form's whole state.
#[derive(Debug, Clone)]
pub struct AssessmentForm {
    client: Arc<HttpClient>,
    record: AssessmentRecord,
    validation_errors: ValidationErrors,
    prediction: Option<PredictionResult>,
    error: Option<String>,
    loading: bool,
}

impl AssessmentForm {
    /// Create a fresh form with every field at its default.
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self {
            client,
            record: AssessmentRecord::default(),
            validation_errors: ValidationErrors::new(),
            prediction: None,
            error: None,
            loading: false,
        }
    }

    pub fn record(&self) -> &AssessmentRecord {
        &self.record
    }

    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.validation_errors
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        self.prediction.as_ref()
    }

    /// Branding for the current prediction, if any.
    pub fn profile(&self) -> Option<&'static PersonalityProfile> {
        self.prediction
            .as_ref()
            .map(|p| p.personality().profile())
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Updates one numeric answer and clears that field's validation error.
    pub fn set_field(&mut self, field: NumericField, value: f64) {
        self.record.set(field, value);
        self.validation_errors.remove(&field);
    }

    /// Updates one yes/no answer. Flags carry no validation state.
    pub fn set_flag(&mut self, field: FlagField, value: bool) {
        self.record.set_flag(field, value);
    }

    /// Validates and, on a clean pass, submits the assessment.
    ///
    /// All failing fields are reported at once and abort the call before
    /// any request is issued. On a request failure the stored message is
    /// generic; the cause goes to the log.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.loading {
            return SubmitOutcome::InFlight;
        }

        let errors = self.record.validate();
        if !errors.is_empty() {
            self.validation_errors = errors;
            return SubmitOutcome::Invalid;
        }

        self.loading = true;
        self.error = None;
        self.prediction = None;

        let result = self
            .client
            .post::<PredictionResult, _>("/api/predict", &self.record)
            .await;
        self.loading = false;

        match result {
            Ok(prediction) => {
                self.prediction = Some(prediction);
                SubmitOutcome::Predicted
            }
            Err(err) => {
                error!("Prediction error: {}", err);
                self.error = Some(SUBMIT_FAILED.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Restores defaults and clears the result, the error, and every
    /// validation message. Ignored while a submission is in flight.
    pub fn reset(&mut self) {
        if self.loading {
            return;
        }
        self.record = AssessmentRecord::default();
        self.validation_errors.clear();
        self.prediction = None;
        self.error = None;
    }
}
