#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! Containers serialize as their plain JSON counterparts.

use rstest::rstest;
use super_iterables::{Optional, SuperDict, SuperList, SuperSet, superdict, superlist, superset};

#[rstest]
fn test_list_serializes_as_array() {
    let list = superlist![1, 2, 3];
    assert_eq!(serde_json::to_string(&list).unwrap(), "[1,2,3]");
    let restored: SuperList<i32> = serde_json::from_str("[1,2,3]").unwrap();
    assert_eq!(restored, list);
}

#[rstest]
fn test_dict_keeps_insertion_order() {
    let dict = superdict! {"b".to_string() => 2, "a".to_string() => 1};
    let json = serde_json::to_string(&dict).unwrap();
    assert_eq!(json, r#"{"b":2,"a":1}"#);
    let restored: SuperDict<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.key_list(), ["b".to_string(), "a".to_string()]);
}

#[rstest]
fn test_set_roundtrip() {
    let set = superset![3, 1, 2];
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[3,1,2]");
    let restored: SuperSet<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, set);
}

#[rstest]
fn test_optional_roundtrip() {
    let present = Optional::Present(5);
    let absent: Optional<i32> = Optional::Absent;
    for value in [present, absent] {
        let json = serde_json::to_string(&value).unwrap();
        let restored: Optional<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, value);
    }
}

#[rstest]
fn test_nested_list_of_dicts() {
    let rows = superlist![superdict! {"id".to_string() => 1}, superdict! {"id".to_string() => 2}];
    let json = serde_json::to_string(&rows).unwrap();
    let restored: SuperList<SuperDict<String, i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.pluck("id"), Ok(superlist![1, 2]));
}
