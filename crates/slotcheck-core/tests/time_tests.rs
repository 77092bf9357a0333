//! Tests for time parsing, normalization, and the draft's JSON shape.

use slotcheck_core::{minutes_since_midnight, ScheduleCollection, TimeOfDay, TimeSlot};

#[test]
fn parse_and_display_round_trip() {
    let t: TimeOfDay = "09:30".parse().unwrap();
    assert_eq!(t.hour(), 9);
    assert_eq!(t.minute(), 30);
    assert_eq!(t.to_string(), "09:30");
}

#[test]
fn unpadded_hour_is_accepted_and_repadded() {
    let t: TimeOfDay = "9:05".parse().unwrap();
    assert_eq!(t.to_string(), "09:05");
}

#[test]
fn minutes_counts_from_midnight() {
    let t: TimeOfDay = "14:45".parse().unwrap();
    assert_eq!(t.minutes(), 14 * 60 + 45);
    assert_eq!("00:00".parse::<TimeOfDay>().unwrap().minutes(), 0);
    assert_eq!("23:59".parse::<TimeOfDay>().unwrap().minutes(), 1439);
}

#[test]
fn out_of_range_components_rejected() {
    assert!("24:00".parse::<TimeOfDay>().is_err());
    assert!("10:60".parse::<TimeOfDay>().is_err());
    assert!(TimeOfDay::new(24, 0).is_err());
    assert!(TimeOfDay::new(0, 60).is_err());
}

#[test]
fn garbage_strings_rejected() {
    assert!("".parse::<TimeOfDay>().is_err());
    assert!("1030".parse::<TimeOfDay>().is_err());
    assert!("ab:cd".parse::<TimeOfDay>().is_err());
    assert!("10:30:00".parse::<TimeOfDay>().is_err());
}

#[test]
fn lenient_normalization_returns_minutes() {
    assert_eq!(minutes_since_midnight(Some("09:30")), 570);
    assert_eq!(minutes_since_midnight(Some("00:00")), 0);
    assert_eq!(minutes_since_midnight(Some(" 14:45 ")), 885);
}

#[test]
fn lenient_normalization_maps_unset_and_garbage_to_zero() {
    // An unset field normalizes to 0; callers must not read that as a real
    // midnight, which is why complete-slot counting exists elsewhere.
    assert_eq!(minutes_since_midnight(None), 0);
    assert_eq!(minutes_since_midnight(Some("")), 0);
    assert_eq!(minutes_since_midnight(Some("   ")), 0);
    assert_eq!(minutes_since_midnight(Some("not a time")), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Draft JSON shape
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn draft_round_trips_through_json() {
    let json = r#"{
        "days": [
            {
                "date": "2025-06-02",
                "weekly": true,
                "slots": [
                    { "start": "09:00", "end": "10:00" },
                    { "start": "11:00", "end": "" }
                ]
            },
            { "date": null, "slots": [] }
        ]
    }"#;

    let draft: ScheduleCollection = serde_json::from_str(json).unwrap();
    assert_eq!(draft.days.len(), 2);
    assert!(draft.days[0].weekly);
    assert!(draft.days[0].slots[0].is_complete());
    assert_eq!(draft.days[0].slots[1].end, None, "empty string reads as unset");
    assert_eq!(draft.days[1].date, None);

    let back = serde_json::to_string(&draft).unwrap();
    let reparsed: ScheduleCollection = serde_json::from_str(&back).unwrap();
    assert_eq!(reparsed, draft);
}

#[test]
fn unset_times_serialize_as_empty_strings() {
    let slot = TimeSlot::default();
    let value = serde_json::to_value(slot).unwrap();
    assert_eq!(value, serde_json::json!({ "start": "", "end": "" }));
}

#[test]
fn missing_slot_fields_default_to_unset() {
    let slot: TimeSlot = serde_json::from_str("{}").unwrap();
    assert!(!slot.is_complete());
}

#[test]
fn malformed_time_in_draft_is_an_error() {
    let json = r#"{ "days": [ { "date": "2025-06-02", "slots": [ { "start": "9am", "end": "10:00" } ] } ] }"#;
    assert!(serde_json::from_str::<ScheduleCollection>(json).is_err());
}

#[test]
fn duration_helpers_follow_the_one_hour_cap() {
    let slot = |s: &str, e: &str| {
        TimeSlot::new(
            Some(s.parse::<TimeOfDay>().unwrap()),
            Some(e.parse::<TimeOfDay>().unwrap()),
        )
    };

    assert_eq!(slot("09:00", "10:00").duration_minutes(), Some(60));
    assert!(!slot("09:00", "10:00").exceeds_max_duration());
    assert!(slot("09:00", "10:01").exceeds_max_duration());
    assert_eq!(
        slot("10:00", "09:00").duration_minutes(),
        None,
        "inverted ranges have no duration"
    );
}
