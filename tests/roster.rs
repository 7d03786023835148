#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use roulement::{Roster, RosterError};

#[test]
fn add_keeps_order_and_trims() {
    let mut r = Roster::new();
    r.add("  Alice ").unwrap();
    r.add("Bob").unwrap();
    assert_eq!(r.names(), ["Alice", "Bob"]);
    assert!(r.contains("Alice"));
}

#[test]
fn duplicates_and_blanks_are_refused() {
    let mut r = Roster::from_names(["Alice"]).unwrap();
    assert_eq!(r.add("Alice"), Err(RosterError::Duplicate("Alice".into())));
    assert_eq!(r.add("   "), Err(RosterError::EmptyName));
    // la casse distingue deux personnes
    r.add("alice").unwrap();
    assert_eq!(r.len(), 2);
}

#[test]
fn remove_by_name_and_index() {
    let mut r = Roster::from_names(["Alice", "Bob", "Carol"]).unwrap();
    assert_eq!(r.remove("Bob").unwrap(), "Bob");
    assert_eq!(r.remove("Bob"), Err(RosterError::Unknown("Bob".into())));
    assert_eq!(r.remove_at(0).unwrap(), "Alice");
    assert_eq!(r.remove_at(5), Err(RosterError::OutOfRange(5)));
    assert_eq!(r.iter().collect::<Vec<_>>(), ["Carol"]);
}

#[test]
fn json_roster_rejects_duplicates() {
    let ok: Roster = serde_json::from_str(r#"["Alice","Bob"]"#).unwrap();
    assert_eq!(ok.len(), 2);
    assert!(serde_json::from_str::<Roster>(r#"["Alice","Alice"]"#).is_err());
}
