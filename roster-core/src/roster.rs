//! Table controller: owns the slot table and its capacity policy
//!
//! Provides:
//! - Validated configuration and initial prime sizing
//! - insert / search / delete with automatic grow and shrink
//! - compact() to drop tombstones at the current capacity
//! - Stats, digest, and probe-trace accessors for callers

use crate::digest::TableDigest;
use crate::error::RosterError;
use crate::prime;
use crate::slot::{Lookup, SlotTable};
use crate::trace::ProbeTrace;
use std::fmt;

/// Smallest usable table length: `h2` divides by `M - 2`.
const MIN_CAPACITY: usize = 3;

/// Validated table configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    requested: usize,
    load_factor: f64,
}

impl Config {
    /// Validate a requested element count and load factor.
    ///
    /// The count must be positive and the load factor strictly inside
    /// (0.0, 1.0); anything else is `InvalidCount` / `InvalidLoadFactor`.
    pub fn new(requested: usize, load_factor: f64) -> Result<Config, RosterError> {
        if requested == 0 {
            return Err(RosterError::InvalidCount { got: requested });
        }
        if !(load_factor > 0.0 && load_factor < 1.0) {
            return Err(RosterError::InvalidLoadFactor { got: load_factor });
        }
        Ok(Config {
            requested,
            load_factor,
        })
    }

    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Initial table length: the first prime at least `ceil(N / tau)`,
    /// clamped to the minimum usable length.
    pub fn initial_capacity(&self) -> usize {
        let wanted = (self.requested as f64 / self.load_factor).ceil() as usize;
        prime::first_prime_at_least(wanted).max(MIN_CAPACITY)
    }
}

/// One record's move during a relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

/// Report of one relocation (grow, shrink, or compaction).
#[derive(Clone, Debug)]
pub struct Relocation {
    pub old_len: usize,
    pub new_len: usize,
    /// Live records in old-slot order with their new homes.
    pub moves: Vec<Move>,
    /// Tombstones reclaimed by the rebuild.
    pub dropped: usize,
}

impl Relocation {
    pub fn grew(&self) -> bool {
        self.new_len > self.old_len
    }

    pub fn shrank(&self) -> bool {
        self.new_len < self.old_len
    }
}

/// Outcome of a successful insert. `slot` refers to the table as it was
/// when the record was written, before any triggered resize.
#[derive(Debug)]
pub struct Inserted {
    pub slot: usize,
    /// The insert revived a tombstone instead of claiming an empty slot.
    pub reused_tombstone: bool,
    pub resize: Option<Relocation>,
}

/// Outcome of a successful delete. `slot` refers to the pre-resize table.
#[derive(Debug)]
pub struct Deleted {
    pub slot: usize,
    pub resize: Option<Relocation>,
}

/// Snapshot of the table's occupancy.
#[derive(Clone, Copy, Debug)]
pub struct RosterStats {
    pub active: usize,
    pub capacity: usize,
    pub tombstones: usize,
    pub load_factor: f64,
    pub threshold: f64,
}

impl fmt::Display for RosterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} active / {} slots ({} tombstoned), load {:.3} of {:.3}",
            self.active, self.capacity, self.tombstones, self.load_factor, self.threshold
        )
    }
}

/// The table controller. Exclusively owns its `SlotTable`; operations are
/// synchronous and any triggered relocation completes before they return,
/// so callers only ever see a fully built table.
pub struct Roster {
    table: SlotTable,
    active: usize,
    threshold: f64,
}

impl Roster {
    /// Build an empty table sized for the configuration.
    pub fn new(config: Config) -> Result<Roster, RosterError> {
        let capacity = config.initial_capacity();
        log::debug!(
            "building table: {} slots for {} requested records at load factor {}",
            capacity,
            config.requested(),
            config.load_factor()
        );
        Ok(Roster {
            table: SlotTable::new(capacity)?,
            active: 0,
            threshold: config.load_factor(),
        })
    }

    /// Insert `name` as a live record.
    ///
    /// Revives a tombstone of the same name in place. Fails with
    /// `Duplicate` if the name is already live and `TableFull` if every
    /// slot was probed without room. A successful insert that pushes the
    /// load factor to the threshold grows the table to the first prime at
    /// least twice the current length.
    pub fn insert(&mut self, name: &str) -> Result<Inserted, RosterError> {
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let (slot, reused_tombstone) = match self.table.locate(name) {
            Lookup::Active { slot } => return Err(RosterError::Duplicate { slot }),
            Lookup::AbsentFull { .. } => return Err(RosterError::TableFull),
            Lookup::Absent { slot } => {
                self.table.occupy(slot, name.to_owned());
                (slot, false)
            }
            Lookup::Tombstoned { slot } => {
                self.table.revive(slot);
                (slot, true)
            }
        };
        self.active += 1;
        let resize = if self.load_factor() >= self.threshold {
            let target = prime::first_prime_at_least(self.capacity() * 2);
            Some(self.relocate_into(target)?)
        } else {
            None
        };
        Ok(Inserted {
            slot,
            reused_tombstone,
            resize,
        })
    }

    /// Find the slot of the live record named `name`.
    ///
    /// A tombstoned match reports `NotFound`, indistinguishable from
    /// absence.
    pub fn search(&self, name: &str) -> Result<usize, RosterError> {
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        match self.table.locate(name) {
            Lookup::Active { slot } => Ok(slot),
            Lookup::Absent { .. } | Lookup::AbsentFull { .. } | Lookup::Tombstoned { .. } => {
                Err(RosterError::NotFound)
            }
        }
    }

    /// Soft-delete the live record named `name`, leaving a tombstone.
    ///
    /// A successful delete that drops the load factor to a quarter of the
    /// threshold shrinks the table to the first prime at least half the
    /// current length.
    pub fn delete(&mut self, name: &str) -> Result<Deleted, RosterError> {
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let slot = match self.table.locate(name) {
            Lookup::Active { slot } => slot,
            Lookup::Absent { .. } | Lookup::AbsentFull { .. } | Lookup::Tombstoned { .. } => {
                return Err(RosterError::NotFound)
            }
        };
        self.table.bury(slot);
        self.active -= 1;
        let resize = if self.load_factor() <= self.threshold * 0.25 {
            let target = prime::first_prime_at_least(self.capacity() / 2).max(MIN_CAPACITY);
            Some(self.relocate_into(target)?)
        } else {
            None
        };
        Ok(Deleted { slot, resize })
    }

    /// Rebuild at the current capacity, dropping every tombstone.
    pub fn compact(&mut self) -> Result<Relocation, RosterError> {
        self.relocate_into(self.capacity())
    }

    /// Rebuild the table at `new_len` slots, re-inserting every live
    /// record in increasing old-slot order and dropping tombstones. The
    /// old storage is replaced only after the new table is fully built.
    fn relocate_into(&mut self, new_len: usize) -> Result<Relocation, RosterError> {
        let old_len = self.capacity();
        let dropped = self.table.tombstones();
        let mut fresh = SlotTable::new(new_len)?;
        let mut moves = Vec::new();
        for (from, name) in self.table.iter_occupied() {
            let to = match fresh.locate(name) {
                Lookup::Absent { slot } => slot,
                // Unreachable: names are unique and the new table has at
                // least as many slots as live records.
                _ => return Err(RosterError::TableFull),
            };
            fresh.occupy(to, name.to_owned());
            moves.push(Move { from, to });
        }
        debug_assert_eq!(moves.len(), self.active);
        log::debug!(
            "relocated {} records: {} -> {} slots, {} tombstones dropped",
            moves.len(),
            old_len,
            new_len,
            dropped
        );
        self.table = fresh;
        Ok(Relocation {
            old_len,
            new_len,
            moves,
            dropped,
        })
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Table length M.
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Current load: live records over table length.
    pub fn load_factor(&self) -> f64 {
        self.active as f64 / self.capacity() as f64
    }

    /// Configured load-factor threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of tombstoned slots awaiting reclamation.
    pub fn tombstones(&self) -> usize {
        self.table.tombstones()
    }

    /// Live names in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.table.iter_occupied().map(|(_, name)| name)
    }

    /// Read-only probe outcome for `name`.
    pub fn lookup(&self, name: &str) -> Lookup {
        self.table.locate(name)
    }

    /// Name held at `slot`, live or tombstoned.
    pub fn name_at(&self, slot: usize) -> Option<&str> {
        self.table.name_at(slot)
    }

    /// Record the probe walk for `name` without mutating the table.
    pub fn probe_trace(&self, name: &str) -> ProbeTrace {
        ProbeTrace::record(&self.table, name)
    }

    pub fn stats(&self) -> RosterStats {
        RosterStats {
            active: self.active,
            capacity: self.capacity(),
            tombstones: self.tombstones(),
            load_factor: self.load_factor(),
            threshold: self.threshold,
        }
    }

    /// Order-independent digest of the live record set.
    pub fn digest(&self) -> TableDigest {
        TableDigest::from_names(self.iter())
    }
}
