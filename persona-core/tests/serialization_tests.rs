use persona_core::domain::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_record_serializes_with_backend_wire_keys() {
    let record = AssessmentRecord {
        time_spent_alone: 40.0,
        stage_fear: true,
        social_event_attendance: 5.0,
        going_outside: 12.0,
        drained_after_socializing: false,
        friends_circle_size: 8.0,
        post_frequency: 3.0,
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(
        value,
        json!({
            "Time_spent_Alone": 40.0,
            "Stage_fear": true,
            "Social_event_attendance": 5.0,
            "Going_outside": 12.0,
            "Drained_after_socializing": false,
            "Friends_circle_size": 8.0,
            "Post_frequency": 3.0,
        })
    );
}

#[test]
fn test_record_round_trips_through_json() {
    let record = AssessmentRecord {
        time_spent_alone: 1.5,
        stage_fear: false,
        social_event_attendance: 2.0,
        going_outside: 3.0,
        drained_after_socializing: true,
        friends_circle_size: 4.0,
        post_frequency: 5.0,
    };

    let text = serde_json::to_string(&record).unwrap();
    let parsed: AssessmentRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn test_dataset_row_accepts_json_booleans() {
    let row: DatasetRow = serde_json::from_value(json!({
        "Time_spent_Alone": 9.0,
        "Stage_fear": true,
        "Social_event_attendance": 2.0,
        "Going_outside": 4.0,
        "Drained_after_socializing": false,
        "Friends_circle_size": 10.0,
        "Post_frequency": 1.0,
        "Personality": "Introvert",
    }))
    .unwrap();

    assert!(row.stage_fear);
    assert!(!row.drained_after_socializing);
    assert_eq!(row.personality, "Introvert");
}

#[test]
fn test_dataset_row_accepts_yes_no_spelling() {
    let row: DatasetRow = serde_json::from_value(json!({
        "Time_spent_Alone": 9.0,
        "Stage_fear": "Yes",
        "Social_event_attendance": 2.0,
        "Going_outside": 4.0,
        "Drained_after_socializing": "No",
        "Friends_circle_size": 10.0,
        "Post_frequency": 1.0,
        "Personality": "Extrovert",
    }))
    .unwrap();

    assert!(row.stage_fear);
    assert!(!row.drained_after_socializing);
}

#[test]
fn test_dataset_row_rejects_unrecognized_boolean_text() {
    let result: Result<DatasetRow, _> = serde_json::from_value(json!({
        "Time_spent_Alone": 9.0,
        "Stage_fear": "maybe",
        "Social_event_attendance": 2.0,
        "Going_outside": 4.0,
        "Drained_after_socializing": "No",
        "Friends_circle_size": 10.0,
        "Post_frequency": 1.0,
        "Personality": "Extrovert",
    }));

    assert!(result.is_err());
}

#[test]
fn test_row_record_strips_the_label() {
    let row = DatasetRow {
        time_spent_alone: 9.0,
        stage_fear: true,
        social_event_attendance: 2.0,
        going_outside: 4.0,
        drained_after_socializing: false,
        friends_circle_size: 10.0,
        post_frequency: 1.0,
        personality: "Introvert".to_string(),
    };

    let record = row.record();
    assert_eq!(record.time_spent_alone, 9.0);
    assert!(record.stage_fear);
    assert!(serde_json::to_value(&record)
        .unwrap()
        .get("Personality")
        .is_none());
}
