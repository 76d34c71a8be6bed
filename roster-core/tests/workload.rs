//! Seeded random soak test against std::collections::HashSet as a model.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use roster_core::{Config, Roster, RosterError};
use std::collections::HashSet;

fn name_for(id: u32) -> String {
    format!("member-{:03}", id)
}

#[test]
fn test_random_workload_matches_hashset_model() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut roster = Roster::new(Config::new(8, 0.6).unwrap()).unwrap();
    let mut model: HashSet<String> = HashSet::new();

    for step in 0..5_000 {
        let name = name_for(rng.gen_range(0..120));
        match rng.gen_range(0..10) {
            // Insert-heavy mix keeps the table churning through resizes.
            0..=4 => match roster.insert(&name) {
                Ok(_) => {
                    assert!(model.insert(name.clone()), "step {}: model had {}", step, name);
                }
                Err(RosterError::Duplicate { .. }) => {
                    assert!(model.contains(&name), "step {}: spurious duplicate", step);
                }
                Err(err) => panic!("step {}: insert failed: {}", step, err),
            },
            5..=7 => match roster.delete(&name) {
                Ok(_) => {
                    assert!(model.remove(&name), "step {}: model lacked {}", step, name);
                }
                Err(RosterError::NotFound) => {
                    assert!(!model.contains(&name), "step {}: spurious not-found", step);
                }
                Err(err) => panic!("step {}: delete failed: {}", step, err),
            },
            8 => assert_eq!(
                roster.search(&name).is_ok(),
                model.contains(&name),
                "step {}: search disagrees on {}",
                step,
                name
            ),
            _ => {
                roster.compact().unwrap();
            }
        }

        assert_eq!(roster.len(), model.len(), "step {}: size drift", step);
        assert!(
            roster.load_factor() < roster.threshold(),
            "step {}: load factor escaped its band",
            step
        );
    }

    // Full final audit of membership and digest consistency.
    for id in 0..120 {
        let name = name_for(id);
        assert_eq!(roster.search(&name).is_ok(), model.contains(&name));
    }
    let mut live: Vec<&str> = roster.iter().collect();
    live.sort_unstable();
    let mut expected: Vec<&str> = model.iter().map(String::as_str).collect();
    expected.sort_unstable();
    assert_eq!(live, expected);
}

#[test]
fn test_tombstone_churn_stays_searchable() {
    // Repeatedly delete and reinsert the same names so probe chains run
    // across tombstones; the table must never lose a live record.
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut roster = Roster::new(Config::new(10, 0.7).unwrap()).unwrap();

    let names: Vec<String> = (0..10).map(name_for).collect();
    for name in &names {
        roster.insert(name).unwrap();
    }

    for _ in 0..1_000 {
        let name = &names[rng.gen_range(0..names.len())];
        if roster.delete(name).is_ok() {
            roster.insert(name).unwrap();
        }
        for present in &names {
            assert!(roster.search(present).is_ok(), "{} went missing", present);
        }
    }
    assert_eq!(roster.len(), names.len());
}
