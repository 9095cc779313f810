use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The seven-field questionnaire used as model input.
///
/// Wire keys follow the inference backend's contract, so serialized records
/// can be forwarded to `/predict` unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AssessmentRecord {
    #[serde(rename = "Time_spent_Alone")]
    pub time_spent_alone: f64,
    #[serde(rename = "Stage_fear")]
    pub stage_fear: bool,
    #[serde(rename = "Social_event_attendance")]
    pub social_event_attendance: f64,
    #[serde(rename = "Going_outside")]
    pub going_outside: f64,
    #[serde(rename = "Drained_after_socializing")]
    pub drained_after_socializing: bool,
    #[serde(rename = "Friends_circle_size")]
    pub friends_circle_size: f64,
    #[serde(rename = "Post_frequency")]
    pub post_frequency: f64,
}

/// The five bounded numeric questions of the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericField {
    TimeSpentAlone,
    SocialEventAttendance,
    GoingOutside,
    FriendsCircleSize,
    PostFrequency,
}

/// The two yes/no questions of the assessment. Never required-validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagField {
    StageFear,
    DrainedAfterSocializing,
}

/// Presentation and bounds metadata for one numeric question.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: NumericField,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
    pub tooltip: &'static str,
}

/// The numeric question set, in form display order.
pub const FORM_FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        field: NumericField::TimeSpentAlone,
        label: "Time Spent Alone",
        placeholder: "Hours spent alone weekly",
        min: 0.0,
        max: 300.0,
        unit: "hours/week",
        tooltip: "Average hours spent alone per week (including sleep)",
    },
    FieldSpec {
        field: NumericField::SocialEventAttendance,
        label: "Social Event Attendance",
        placeholder: "Hours attending social events",
        min: 0.0,
        max: 150.0,
        unit: "hours/week",
        tooltip: "Hours spent at social gatherings per week",
    },
    FieldSpec {
        field: NumericField::GoingOutside,
        label: "Time Outside",
        placeholder: "Hours spent outside",
        min: 0.0,
        max: 300.0,
        unit: "hours/week",
        tooltip: "Total hours spent outside home per week",
    },
    FieldSpec {
        field: NumericField::FriendsCircleSize,
        label: "Social Circle Size",
        placeholder: "Number of close friends",
        min: 0.0,
        max: 300.0,
        unit: "people",
        tooltip: "Number of people you regularly interact with",
    },
    FieldSpec {
        field: NumericField::PostFrequency,
        label: "Social Media Activity",
        placeholder: "Weekly social media posts",
        min: 0.0,
        max: 100.0,
        unit: "posts/week",
        tooltip: "Average number of social media posts per week",
    },
];

impl NumericField {
    pub fn spec(&self) -> &'static FieldSpec {
        match self {
            NumericField::TimeSpentAlone => &FORM_FIELDS[0],
            NumericField::SocialEventAttendance => &FORM_FIELDS[1],
            NumericField::GoingOutside => &FORM_FIELDS[2],
            NumericField::FriendsCircleSize => &FORM_FIELDS[3],
            NumericField::PostFrequency => &FORM_FIELDS[4],
        }
    }

    /// The field's wire key in the backend JSON contract.
    pub fn wire_key(&self) -> &'static str {
        match self {
            NumericField::TimeSpentAlone => "Time_spent_Alone",
            NumericField::SocialEventAttendance => "Social_event_attendance",
            NumericField::GoingOutside => "Going_outside",
            NumericField::FriendsCircleSize => "Friends_circle_size",
            NumericField::PostFrequency => "Post_frequency",
        }
    }
}

impl FlagField {
    pub fn wire_key(&self) -> &'static str {
        match self {
            FlagField::StageFear => "Stage_fear",
            FlagField::DrainedAfterSocializing => "Drained_after_socializing",
        }
    }
}

impl FieldSpec {
    /// Checks one submitted value against this question's constraints.
    ///
    /// Zero means "unset" and fails as required; anything outside the closed
    /// [min, max] interval fails with a bounds message.
    pub fn check(&self, value: f64) -> Option<String> {
        if value == 0.0 || value.is_nan() {
            Some(format!("{} is required", self.label))
        } else if value < self.min || value > self.max {
            Some(format!(
                "{} must be between {} and {} {}",
                self.label, self.min, self.max, self.unit
            ))
        } else {
            None
        }
    }
}

/// Per-field validation messages, keyed by the failing question.
pub type ValidationErrors = BTreeMap<NumericField, String>;

impl AssessmentRecord {
    pub fn get(&self, field: NumericField) -> f64 {
        match field {
            NumericField::TimeSpentAlone => self.time_spent_alone,
            NumericField::SocialEventAttendance => self.social_event_attendance,
            NumericField::GoingOutside => self.going_outside,
            NumericField::FriendsCircleSize => self.friends_circle_size,
            NumericField::PostFrequency => self.post_frequency,
        }
    }

    /// Writes one numeric answer, clamping negative input to zero.
    pub fn set(&mut self, field: NumericField, value: f64) {
        let value = if value.is_nan() { 0.0 } else { value.max(0.0) };
        match field {
            NumericField::TimeSpentAlone => self.time_spent_alone = value,
            NumericField::SocialEventAttendance => self.social_event_attendance = value,
            NumericField::GoingOutside => self.going_outside = value,
            NumericField::FriendsCircleSize => self.friends_circle_size = value,
            NumericField::PostFrequency => self.post_frequency = value,
        }
    }

    pub fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::StageFear => self.stage_fear,
            FlagField::DrainedAfterSocializing => self.drained_after_socializing,
        }
    }

    pub fn set_flag(&mut self, field: FlagField, value: bool) {
        match field {
            FlagField::StageFear => self.stage_fear = value,
            FlagField::DrainedAfterSocializing => self.drained_after_socializing = value,
        }
    }

    /// Validates every numeric question, collecting all failures at once.
    ///
    /// Boolean questions always pass; either answer is a valid measurement.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for spec in &FORM_FIELDS {
            if let Some(message) = spec.check(self.get(spec.field)) {
                errors.insert(spec.field, message);
            }
        }
        errors
    }
}
