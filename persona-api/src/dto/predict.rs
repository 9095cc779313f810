use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The seven assessment fields as they arrive at the proxy.
///
/// The proxy is pure pass-through: each field is picked up by key and kept
/// as raw JSON, so a missing key stays missing in the forwarded body and a
/// wrongly typed value is forwarded untouched for the backend to reject.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "Time_spent_Alone", skip_serializing_if = "Option::is_none")]
    pub time_spent_alone: Option<Value>,
    #[serde(rename = "Stage_fear", skip_serializing_if = "Option::is_none")]
    pub stage_fear: Option<Value>,
    #[serde(
        rename = "Social_event_attendance",
        skip_serializing_if = "Option::is_none"
    )]
    pub social_event_attendance: Option<Value>,
    #[serde(rename = "Going_outside", skip_serializing_if = "Option::is_none")]
    pub going_outside: Option<Value>,
    #[serde(
        rename = "Drained_after_socializing",
        skip_serializing_if = "Option::is_none"
    )]
    pub drained_after_socializing: Option<Value>,
    #[serde(rename = "Friends_circle_size", skip_serializing_if = "Option::is_none")]
    pub friends_circle_size: Option<Value>,
    #[serde(rename = "Post_frequency", skip_serializing_if = "Option::is_none")]
    pub post_frequency: Option<Value>,
}
