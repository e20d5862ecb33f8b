//! Integration tests for the friends, attribute, and schedule directories.

use std::sync::Arc;
use std::thread;

use hd_core::errors::Error;
use hd_directory::{
    Friend, FriendDirectory, MemoryStore, RecordStore, TeamAttributes, TeamSchedules,
};
use hd_holidays::all_holidays;
use hd_time::{ClockTime, Date, Weekday};
use proptest::prelude::*;
use serde_json::{json, Value};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn friend(id: &str, first: &str) -> Value {
    json!({
        "id": id,
        "firstName": first,
        "lastName": "Hopper",
        "telephone": "555-0142",
        "email": "grace@example.com",
        "notes": "compilers",
    })
}

// ─── Friends ──────────────────────────────────────────────────────────────────

#[test]
fn friend_lifecycle() {
    let dir = FriendDirectory::in_memory();
    assert!(dir.friends().unwrap().is_empty());

    dir.create_friend(&friend("grace", "Grace")).unwrap();
    dir.create_friend(&friend("ada", "Ada")).unwrap();
    let ids: Vec<_> = dir.friends().unwrap().into_iter().map(|f| f.id).collect();
    assert_eq!(ids, ["ada", "grace"]);

    assert_eq!(dir.friend("GRACE").unwrap().first_name, "Grace");
    assert!(matches!(
        dir.create_friend(&friend("Grace", "Other")),
        Err(Error::Duplicate(_))
    ));

    let renamed = dir.update_friend("grace", &friend("admiral", "Grace")).unwrap();
    assert_eq!(renamed.id, "admiral");
    assert!(matches!(dir.friend("grace"), Err(Error::NotFound(_))));

    dir.destroy_friend("ADMIRAL").unwrap();
    assert!(matches!(dir.destroy_friend("admiral"), Err(Error::NotFound(_))));
    assert_eq!(dir.friends().unwrap().len(), 1);
}

#[test]
fn friend_update_of_missing_id_is_not_found() {
    let dir = FriendDirectory::in_memory();
    assert!(matches!(
        dir.update_friend("nobody", &friend("nobody", "N")),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn friend_json_uses_camel_case() {
    let dir = FriendDirectory::in_memory();
    let created = dir.create_friend(&friend("ada", "Ada")).unwrap();
    let value = serde_json::to_value(created).unwrap();
    assert_eq!(value, friend("ada", "Ada"));
}

#[test]
fn concurrent_creates_admit_one_winner() {
    let dir = FriendDirectory::in_memory();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dir = dir.clone();
            thread::spawn(move || dir.create_friend(&friend("same", &format!("F{i}"))).is_ok())
        })
        .collect();
    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(winners, 1);
    assert_eq!(dir.friends().unwrap().len(), 1);
}

// ─── Team attributes ──────────────────────────────────────────────────────────

#[test]
fn attribute_crud() {
    let attrs = TeamAttributes::in_memory();
    assert!(matches!(attrs.attributes("ops"), Err(Error::NotFound(_))));

    let phone = attrs
        .create_attribute(&json!({"team": "ops", "attribute_name": "phone", "attribute_value": "x100"}))
        .unwrap();
    let queue = attrs
        .create_attribute(&json!({"team": "ops", "attribute_name": "queue", "attribute_value": "OPS-Q"}))
        .unwrap();
    assert_ne!(phone, queue);

    let listed = attrs.attributes("Ops").unwrap();
    assert_eq!(
        serde_json::to_value(&listed).unwrap(),
        json!({
            "phone": {"id": phone, "value": "x100"},
            "queue": {"id": queue, "value": "OPS-Q"},
        })
    );

    let updated = attrs
        .update_attribute(phone, &json!({"attribute_value": "x200"}))
        .unwrap();
    assert_eq!(updated.team, "ops");
    assert_eq!(updated.attribute_name, "phone");
    assert_eq!(attrs.attribute("ops", "phone").unwrap().attribute_value, "x200");

    attrs.delete_attribute(queue).unwrap();
    assert!(matches!(attrs.attribute_by_id(queue), Err(Error::NotFound(_))));
    assert!(matches!(attrs.delete_attribute(queue), Err(Error::NotFound(_))));
}

#[test]
fn attribute_create_lists_missing_fields() {
    let attrs = TeamAttributes::in_memory();
    let err = attrs.create_attribute(&json!({"team": "ops"})).unwrap_err();
    assert_eq!(
        err,
        Error::Validation(
            "team attribute is missing required fields: attribute_name, attribute_value".into()
        )
    );
}

#[test]
fn attribute_rename_onto_existing_name_is_duplicate() {
    let attrs = TeamAttributes::in_memory();
    attrs
        .create_attribute(&json!({"team": "ops", "attribute_name": "phone", "attribute_value": "1"}))
        .unwrap();
    let fax = attrs
        .create_attribute(&json!({"team": "ops", "attribute_name": "fax", "attribute_value": "2"}))
        .unwrap();
    assert!(matches!(
        attrs.update_attribute(fax, &json!({"attribute_name": "Phone"})),
        Err(Error::Duplicate(_))
    ));
}

// ─── Schedules ────────────────────────────────────────────────────────────────

fn weekday_hours(schedules: &TeamSchedules) {
    for day in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"] {
        schedules
            .create_hours(&json!({
                "team": "ops", "type": "phone", "day": day,
                "start": "08:00", "end": "17:00",
            }))
            .unwrap();
    }
}

#[test]
fn schedule_crud() {
    let schedules = TeamSchedules::in_memory();
    weekday_hours(&schedules);

    let week = schedules.schedule("ops", "phone").unwrap();
    assert_eq!(week.len(), 5);
    assert!(!week.contains_key(&Weekday::Saturday));
    assert!(matches!(schedules.schedule("ops", "walk-in"), Err(Error::NotFound(_))));
    assert!(matches!(
        schedules.hours("ops", "phone", Weekday::Sunday),
        Err(Error::NotFound(_))
    ));

    let duplicate = json!({
        "team": "OPS", "type": "Phone", "day": "mon", "start": "8:00", "end": "17:00",
    });
    assert!(matches!(schedules.create_hours(&duplicate), Err(Error::Duplicate(_))));

    let friday = schedules.hours("ops", "phone", Weekday::Friday).unwrap()[0].id;
    let moved = schedules
        .update_hours(friday, &json!({"end": "15:00", "day": "Saturday"}))
        .unwrap();
    assert_eq!(moved.day, Weekday::Friday);
    assert_eq!(moved.start.to_string(), "08:00");
    assert_eq!(moved.end.to_string(), "15:00");

    schedules.delete_hours(friday).unwrap();
    assert!(matches!(schedules.hours_by_id(friday), Err(Error::NotFound(_))));
}

#[test]
fn bad_day_or_time_is_invalid_argument() {
    let schedules = TeamSchedules::in_memory();
    let bad_day = json!({"team": "ops", "type": "phone", "day": "Funday", "start": "08:00", "end": "09:00"});
    assert!(matches!(schedules.create_hours(&bad_day), Err(Error::InvalidArgument(_))));
    let bad_time = json!({"team": "ops", "type": "phone", "day": "Monday", "start": "8am", "end": "09:00"});
    assert!(matches!(schedules.create_hours(&bad_time), Err(Error::InvalidArgument(_))));
}

#[test]
fn desk_is_closed_on_resolved_holidays() {
    let schedules = TeamSchedules::in_memory();
    weekday_hours(&schedules);
    let holidays = all_holidays(2024).unwrap();
    let ten: ClockTime = "10:00".parse().unwrap();
    let five: ClockTime = "17:00".parse().unwrap();

    // ordinary Monday
    assert!(schedules.is_open("ops", "phone", date(2024, 12, 2), ten, &holidays).unwrap());
    // closing time is exclusive
    assert!(!schedules.is_open("ops", "phone", date(2024, 12, 2), five, &holidays).unwrap());
    // Saturday
    assert!(!schedules.is_open("ops", "phone", date(2024, 12, 7), ten, &holidays).unwrap());
    // Good Friday, Memorial Day, Christmas Eve
    for closed in [date(2024, 3, 29), date(2024, 5, 27), date(2024, 12, 24)] {
        assert!(!schedules.is_open("ops", "phone", closed, ten, &holidays).unwrap(), "{closed}");
    }
    assert!(matches!(
        schedules.is_open("dev", "phone", date(2024, 12, 2), ten, &holidays),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn directories_share_a_custom_store() {
    let store: Arc<MemoryStore<Friend>> = Arc::new(MemoryStore::new());
    let dir = FriendDirectory::new(store.clone());
    dir.create_friend(&friend("ada", "Ada")).unwrap();
    assert_eq!(store.fetch_all().unwrap().len(), 1);
    assert!(store.fetch("ADA").unwrap().is_some());
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn partial_attribute_update_keeps_other_fields(
        value in "[a-z0-9]{1,12}",
        patch_team in proptest::bool::ANY,
        patch_name in proptest::bool::ANY,
    ) {
        let attrs = TeamAttributes::in_memory();
        let id = attrs
            .create_attribute(&json!({"team": "ops", "attribute_name": "phone", "attribute_value": "0"}))
            .unwrap();
        let mut patch = serde_json::Map::new();
        patch.insert("attribute_value".into(), json!(value.clone()));
        if patch_team {
            patch.insert("team".into(), json!("dev"));
        }
        if patch_name {
            patch.insert("attribute_name".into(), json!("fax"));
        }
        let updated = attrs.update_attribute(id, &Value::Object(patch)).unwrap();
        prop_assert_eq!(updated.attribute_value, value);
        prop_assert_eq!(updated.team, if patch_team { "dev" } else { "ops" });
        prop_assert_eq!(updated.attribute_name, if patch_name { "fax" } else { "phone" });
    }

    #[test]
    fn window_covers_exactly_its_minutes(start in 0u8..23, len in 1u8..60, probe in 0u16..1440) {
        let schedules = TeamSchedules::in_memory();
        let end_minutes = u16::from(start) * 60 + u16::from(len);
        let end = ClockTime::from_hm((end_minutes / 60) as u8, (end_minutes % 60) as u8).unwrap();
        let start = ClockTime::from_hm(start, 0).unwrap();
        let id = schedules
            .create_hours(&json!({
                "team": "ops", "type": "phone", "day": "Monday",
                "start": start.to_string(), "end": end.to_string(),
            }))
            .unwrap();
        let entry = schedules.hours_by_id(id).unwrap();
        let probe = ClockTime::from_hm((probe / 60) as u8, (probe % 60) as u8).unwrap();
        let inside = start.minutes_since_midnight() <= probe.minutes_since_midnight()
            && probe.minutes_since_midnight() < end.minutes_since_midnight();
        prop_assert_eq!(entry.covers(probe), inside);
    }
}
