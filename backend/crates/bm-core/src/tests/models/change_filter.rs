use crate::{Bookmark, ChangeEvent, ChangeFilter, ChangeKind};

#[test]
fn given_user_filter_when_event_for_other_user_then_rejected() {
    let filter = ChangeFilter::for_user("user-1");
    let foreign = Bookmark::provisional("user-2", "X".into(), "https://x.example".into());

    assert!(!filter.matches(&ChangeEvent::insert(foreign)));
}

#[test]
fn given_user_filter_when_event_for_same_user_then_accepted() {
    let filter = ChangeFilter::for_user("user-1");
    let own = Bookmark::provisional("user-1", "X".into(), "https://x.example".into());

    assert!(filter.matches(&ChangeEvent::insert(own.clone())));
    assert!(filter.matches(&ChangeEvent::update(own)));
    assert!(filter.matches(&ChangeEvent::delete("any")));
}

#[test]
fn given_insert_only_filter_when_delete_arrives_then_rejected() {
    let filter = ChangeFilter::for_user("user-1").with_events(&[ChangeKind::Insert]);

    assert!(filter.accepts(ChangeKind::Insert));
    assert!(!filter.matches(&ChangeEvent::delete("1")));
}
