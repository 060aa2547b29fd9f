use crate::{Bookmark, BookmarkPatch, NewBookmark};

use googletest::prelude::*;

#[test]
fn given_two_provisional_bookmarks_when_created_then_ids_differ() {
    let a = Bookmark::provisional("user-1", "Docs".into(), "https://example.com".into());
    let b = Bookmark::provisional("user-1", "Docs".into(), "https://example.com".into());

    assert_that!(a.id, not(eq(&b.id)));
    assert_that!(a.title, eq(&b.title));
    assert_that!(a.user_id, eq("user-1"));
}

#[test]
fn given_new_bookmark_without_id_when_serialized_then_id_is_omitted() {
    let new = NewBookmark::new("user-1", "Docs".into(), "https://example.com".into());

    let json = serde_json::to_value(&new).unwrap();

    assert_that!(json.get("id"), none());
    assert_that!(json["user_id"], eq(&serde_json::json!("user-1")));
}

#[test]
fn given_new_bookmark_with_id_when_serialized_then_id_is_present() {
    let new = NewBookmark::new("user-1", "Docs".into(), "https://example.com".into())
        .with_id("abc123");

    let json = serde_json::to_value(&new).unwrap();

    assert_that!(json["id"], eq(&serde_json::json!("abc123")));
}

#[test]
fn given_patch_with_title_only_when_applied_then_url_kept() {
    let mut bookmark = Bookmark::provisional("user-1", "Old".into(), "https://a.example".into());
    let patch = BookmarkPatch {
        title: Some("New".into()),
        url: None,
    };

    patch.apply(&mut bookmark);

    assert_that!(bookmark.title, eq("New"));
    assert_that!(bookmark.url, eq("https://a.example"));
}

#[test]
fn test_empty_patch_is_empty() {
    assert!(BookmarkPatch::default().is_empty());
}
