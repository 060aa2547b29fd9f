use crate::{Bookmark, ChangeEvent, ChangeKind};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_delete_event_when_serialized_then_matches_feed_format() {
    let event = ChangeEvent::delete("2");

    let value = serde_json::to_value(&event).unwrap();

    assert_that!(value, eq(&json!({"eventType": "DELETE", "old": {"id": "2"}})));
}

#[test]
fn given_insert_payload_when_deserialized_then_new_record_is_present() {
    let payload = json!({
        "eventType": "INSERT",
        "new": {
            "id": "abc123",
            "title": "Docs",
            "url": "https://example.com",
            "user_id": "user-1",
            "created_at": "2026-01-02T03:04:05Z"
        }
    });

    let event: ChangeEvent = serde_json::from_value(payload).unwrap();

    assert_that!(event.kind(), eq(ChangeKind::Insert));
    assert_that!(event.record_id(), some(eq("abc123")));
    assert_that!(event.old, none());
}

#[test]
fn given_update_event_then_record_id_comes_from_new() {
    let bookmark = Bookmark::provisional("user-1", "Docs".into(), "https://example.com".into());
    let id = bookmark.id.clone();

    let event = ChangeEvent::update(bookmark);

    assert_that!(event.record_id(), some(eq(id.as_str())));
}
