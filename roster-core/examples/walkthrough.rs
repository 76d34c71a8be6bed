//! Walkthrough of the table lifecycle
//!
//! Demonstrates:
//! - Sizing a table from a requested count and load factor
//! - Inserting past the threshold to trigger a grow
//! - Deleting down to a quarter of the threshold to trigger a shrink
//! - Compacting tombstones away and comparing content digests

use roster_core::{Config, Roster};

fn main() -> Result<(), roster_core::RosterError> {
    println!("=== Roster Table Walkthrough ===\n");

    let config = Config::new(3, 0.5)?;
    println!(
        "Requested {} records at load factor {} -> {} slots",
        config.requested(),
        config.load_factor(),
        config.initial_capacity()
    );

    let mut roster = Roster::new(config)?;

    println!("\nInserting ann, bob, cid...");
    for name in ["ann", "bob", "cid"] {
        let outcome = roster.insert(name)?;
        println!("  '{}' -> slot {}", name, outcome.slot);
    }
    println!("Stats: {}", roster.stats());

    println!("\nInserting dee (pushes load to 4/7, past 0.5)...");
    let outcome = roster.insert("dee")?;
    if let Some(relocation) = outcome.resize {
        println!(
            "  grew {} -> {} slots, {} records moved",
            relocation.old_len,
            relocation.new_len,
            relocation.moves.len()
        );
    }
    println!("Stats: {}", roster.stats());

    println!("\nDeleting ann and bob...");
    for name in ["ann", "bob"] {
        let deleted = roster.delete(name)?;
        match deleted.resize {
            Some(relocation) => println!(
                "  '{}' removed; shrank {} -> {} slots",
                name, relocation.old_len, relocation.new_len
            ),
            None => println!("  '{}' removed from slot {}", name, deleted.slot),
        }
    }
    println!("Stats: {}", roster.stats());

    println!("\nCompacting at the current capacity...");
    let digest_before = roster.digest();
    let relocation = roster.compact()?;
    println!(
        "  {} records re-homed, {} tombstones dropped",
        relocation.moves.len(),
        relocation.dropped
    );

    let digest_after = roster.digest();
    println!(
        "\nDigest unchanged by the rebuild: {}",
        digest_before.is_identical(&digest_after)
    );
    println!("Live names: {:?}", roster.iter().collect::<Vec<_>>());

    Ok(())
}
