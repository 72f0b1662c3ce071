use std::fs;

use statbar::mute::MuteSet;

#[test]
fn mutes_accumulate_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mute.json");

    let mut first = MuteSet::load(&path).unwrap();
    first.mute("42").unwrap();

    // A second invocation sees the first mute and adds its own.
    let mut second = MuteSet::load(&path).unwrap();
    assert!(second.is_muted("42"));
    second.mute("abc").unwrap();

    let third = MuteSet::load(&path).unwrap();
    assert!(third.is_muted("42"));
    assert!(third.is_muted("abc"));
    assert!(!third.is_muted("7"));
}

#[test]
fn store_is_a_plain_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mute.json");

    let mut set = MuteSet::load(&path).unwrap();
    set.mute("b").unwrap();
    set.mute("a").unwrap();

    let data = fs::read_to_string(&path).unwrap();
    let ids: Vec<String> = serde_json::from_str(&data).unwrap();
    assert_eq!(ids, ["a", "b"]);
}
