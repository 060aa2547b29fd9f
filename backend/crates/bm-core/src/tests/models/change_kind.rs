use crate::ChangeKind;

use std::str::FromStr;

#[test]
fn test_change_kind_as_str() {
    assert_eq!(ChangeKind::Insert.as_str(), "INSERT");
    assert_eq!(ChangeKind::Update.as_str(), "UPDATE");
    assert_eq!(ChangeKind::Delete.as_str(), "DELETE");
}

#[test]
fn test_change_kind_from_str() {
    assert_eq!(ChangeKind::from_str("INSERT").unwrap(), ChangeKind::Insert);
    assert_eq!(ChangeKind::from_str("update").unwrap(), ChangeKind::Update);
    assert_eq!(ChangeKind::from_str("Delete").unwrap(), ChangeKind::Delete);
    assert!(ChangeKind::from_str("upsert").is_err());
}

#[test]
fn test_change_kind_serializes_uppercase() {
    let json = serde_json::to_string(&ChangeKind::Delete).unwrap();
    assert_eq!(json, "\"DELETE\"");
}
