use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::domain::assessment::AssessmentRecord;

/// One labeled record of the training dataset.
///
/// Immutable once loaded. The same shape serves CSV ingestion and the
/// `/api/data` JSON response, so boolean cells also accept the dataset's
/// `Yes`/`No` spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    #[serde(rename = "Time_spent_Alone")]
    pub time_spent_alone: f64,
    #[serde(rename = "Stage_fear", deserialize_with = "yes_no_bool")]
    pub stage_fear: bool,
    #[serde(rename = "Social_event_attendance")]
    pub social_event_attendance: f64,
    #[serde(rename = "Going_outside")]
    pub going_outside: f64,
    #[serde(rename = "Drained_after_socializing", deserialize_with = "yes_no_bool")]
    pub drained_after_socializing: bool,
    #[serde(rename = "Friends_circle_size")]
    pub friends_circle_size: f64,
    #[serde(rename = "Post_frequency")]
    pub post_frequency: f64,
    #[serde(rename = "Personality")]
    pub personality: String,
}

impl DatasetRow {
    /// The row's answers without the ground-truth label.
    pub fn record(&self) -> AssessmentRecord {
        AssessmentRecord {
            time_spent_alone: self.time_spent_alone,
            stage_fear: self.stage_fear,
            social_event_attendance: self.social_event_attendance,
            going_outside: self.going_outside,
            drained_after_socializing: self.drained_after_socializing,
            friends_circle_size: self.friends_circle_size,
            post_frequency: self.post_frequency,
        }
    }
}

fn yes_no_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct YesNoVisitor;

    impl<'de> Visitor<'de> for YesNoVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a boolean, or one of Yes/No")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v.trim().to_lowercase().as_str() {
                "yes" | "true" => Ok(true),
                "no" | "false" => Ok(false),
                other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
            }
        }
    }

    deserializer.deserialize_any(YesNoVisitor)
}
