//! Integration tests for roster-core

use crate::{Config, Lookup, Roster, RosterError, SlotTable};

fn roster(requested: usize, load_factor: f64) -> Roster {
    Roster::new(Config::new(requested, load_factor).unwrap()).unwrap()
}

#[test]
fn test_survives_repeated_growth() {
    let mut roster = roster(3, 0.5);
    let names: Vec<String> = (0..200).map(|i| format!("name{}", i)).collect();

    let mut grow_count = 0;
    for name in &names {
        let outcome = roster.insert(name).unwrap();
        if let Some(relocation) = outcome.resize {
            assert!(relocation.grew());
            grow_count += 1;
        }
    }

    assert_eq!(roster.len(), 200);
    assert!(grow_count >= 4, "200 inserts from 7 slots must grow repeatedly");
    assert!(roster.load_factor() < roster.threshold());
    for name in &names {
        assert!(roster.search(name).is_ok());
    }
}

#[test]
fn test_digest_unchanged_across_resizes() {
    let mut roster = roster(3, 0.5);
    for i in 0..50 {
        roster.insert(&format!("name{}", i)).unwrap();
    }
    for i in 0..40 {
        roster.delete(&format!("name{}", i)).unwrap();
    }

    let before = roster.digest();
    assert_eq!(before.count(), 10);

    roster.compact().unwrap();
    assert!(roster.digest().is_identical(&before));

    // Push through another grow and check the digest moves with the set.
    for i in 50..80 {
        roster.insert(&format!("name{}", i)).unwrap();
    }
    for i in 50..80 {
        roster.delete(&format!("name{}", i)).unwrap();
    }
    assert!(roster.digest().is_identical(&before));
}

#[test]
fn test_deleted_names_stay_deleted_across_shrink() {
    let mut roster = roster(3, 0.5);
    for i in 0..30 {
        roster.insert(&format!("name{}", i)).unwrap();
    }
    let mut shrank = false;
    for i in 0..28 {
        let name = format!("name{}", i);
        let deleted = roster.delete(&name).unwrap();
        shrank |= deleted.resize.is_some();
        assert!(matches!(roster.search(&name), Err(RosterError::NotFound)));
    }
    assert!(shrank, "deleting 28 of 30 records must shrink at least once");
    assert!(roster.search("name28").is_ok());
    assert!(roster.search("name29").is_ok());
    assert_eq!(roster.len(), 2);
}

#[test]
fn test_grow_keeps_guaranteed_empty_slot() {
    // With tau < 1 the grow policy must keep at least one empty slot, so
    // an insert can never run a full unsuccessful cycle.
    let mut roster = roster(2, 0.8);
    for i in 0..100 {
        match roster.insert(&format!("name{}", i)) {
            Ok(_) => {}
            Err(err) => panic!("insert {} failed: {}", i, err),
        }
        assert!(
            roster.len() < roster.capacity(),
            "no empty slot left after insert {}",
            i
        );
    }
}

#[test]
fn test_table_full_without_grow_policy() {
    // Driving the slot table directly, without the controller, saturates
    // it and exercises the defensive full-cycle outcome.
    let mut table = SlotTable::new(7).unwrap();
    for i in 0..7 {
        let name = format!("name{}", i);
        match table.locate(&name) {
            Lookup::Absent { slot } => table.occupy(slot, name),
            other => panic!("unexpected {:?}", other),
        }
    }
    assert!(matches!(table.locate("straggler"), Lookup::AbsentFull { .. }));
}

#[test]
fn test_lookup_matches_search_and_trace() {
    let mut roster = roster(5, 0.7);
    roster.insert("ann").unwrap();
    roster.insert("bob").unwrap();
    roster.delete("bob").unwrap();

    for name in ["ann", "bob", "cid"] {
        let lookup = roster.lookup(name);
        assert_eq!(roster.probe_trace(name).outcome, lookup);
        match lookup {
            Lookup::Active { slot } => assert_eq!(roster.search(name).unwrap(), slot),
            _ => assert!(roster.search(name).is_err()),
        }
    }
}

#[test]
fn test_iter_yields_live_names_only() {
    let mut roster = roster(5, 0.7);
    for name in ["ann", "bob", "cid"] {
        roster.insert(name).unwrap();
    }
    roster.delete("bob").unwrap();

    let mut live: Vec<&str> = roster.iter().collect();
    live.sort_unstable();
    assert_eq!(live, vec!["ann", "cid"]);
}
