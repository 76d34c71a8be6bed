//! Fixed-capacity slot table with double-hash probing
//!
//! Provides:
//! - Three-state slots (empty / occupied / tombstone)
//! - The shared `locate` probe routine returning a tagged `Lookup`
//! - In-place slot mutation primitives used by the controller
//!
//! The table never resizes itself; the controller replaces it wholesale
//! when the load factor leaves its band.

use crate::error::RosterError;
use crate::hash;

/// State of one slot in the backing array.
///
/// A tombstone keeps its name so probing can still match it and so an
/// insert of the same name can revive the slot in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(String),
    Tombstone(String),
}

impl Slot {
    /// Name held by an occupied or tombstoned slot.
    pub fn name(&self) -> Option<&str> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(name) | Slot::Tombstone(name) => Some(name),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }
}

/// Outcome of a probe walk for one name.
///
/// - `Absent`: name not present; `slot` is the empty slot an insert may use.
/// - `AbsentFull`: name not present and the walk cycled back to its start
///   without meeting an empty slot; `slot` is the last slot probed.
/// - `Tombstoned`: a soft-deleted record with this name sits at `slot`.
/// - `Active`: a live record with this name sits at `slot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    Absent { slot: usize },
    AbsentFull { slot: usize },
    Tombstoned { slot: usize },
    Active { slot: usize },
}

impl Lookup {
    /// The slot index carried by any outcome.
    pub fn slot(&self) -> usize {
        match *self {
            Lookup::Absent { slot }
            | Lookup::AbsentFull { slot }
            | Lookup::Tombstoned { slot }
            | Lookup::Active { slot } => slot,
        }
    }
}

/// The backing array of slots. Length is fixed at construction and must
/// be a prime above 2 for the probe sequence to cover every slot.
pub struct SlotTable {
    slots: Vec<Slot>,
}

impl SlotTable {
    /// Allocate an all-empty table of `m` slots.
    ///
    /// Allocation failure surfaces as `RosterError::Allocation` instead of
    /// aborting the process.
    pub fn new(m: usize) -> Result<Self, RosterError> {
        debug_assert!(m > 2, "table length must be a prime above 2");
        let mut slots = Vec::new();
        slots.try_reserve_exact(m)?;
        slots.resize_with(m, Slot::default);
        Ok(SlotTable { slots })
    }

    /// Number of slots (the table length M).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The shared probe routine behind insert, search, delete, and
    /// relocation.
    ///
    /// Walks the double-hash probe sequence from `probe(name, 0)` until it
    /// matches the name, reaches an empty slot, or cycles back to the
    /// starting slot. Terminates within M probes because the step `h2` is
    /// nonzero and M is prime.
    pub fn locate(&self, name: &str) -> Lookup {
        let m = self.slots.len();
        let initial = hash::probe(name, 0, m);
        let mut slot = initial;
        let mut collisions = 0;
        loop {
            match &self.slots[slot] {
                Slot::Empty => return Lookup::Absent { slot },
                Slot::Occupied(held) if held == name => return Lookup::Active { slot },
                Slot::Tombstone(held) if held == name => return Lookup::Tombstoned { slot },
                _ => {
                    collisions += 1;
                    slot = hash::probe(name, collisions, m);
                    if slot == initial {
                        return Lookup::AbsentFull { slot };
                    }
                }
            }
        }
    }

    /// Write a live record into an empty slot.
    pub fn occupy(&mut self, slot: usize, name: String) {
        debug_assert!(self.slots[slot].is_empty(), "occupy target must be empty");
        log::trace!("slot {}: empty -> occupied '{}'", slot, name);
        self.slots[slot] = Slot::Occupied(name);
    }

    /// Flip a tombstone back to a live record in place, reusing its name.
    pub fn revive(&mut self, slot: usize) {
        let current = std::mem::take(&mut self.slots[slot]);
        match current {
            Slot::Tombstone(name) => {
                log::trace!("slot {}: tombstone -> occupied '{}'", slot, name);
                self.slots[slot] = Slot::Occupied(name);
            }
            other => {
                debug_assert!(false, "revive target must be a tombstone");
                self.slots[slot] = other;
            }
        }
    }

    /// Flip a live record to a tombstone in place, keeping its name for
    /// probing continuity.
    pub fn bury(&mut self, slot: usize) {
        let current = std::mem::take(&mut self.slots[slot]);
        match current {
            Slot::Occupied(name) => {
                log::trace!("slot {}: occupied '{}' -> tombstone", slot, name);
                self.slots[slot] = Slot::Tombstone(name);
            }
            other => {
                debug_assert!(false, "bury target must be occupied");
                self.slots[slot] = other;
            }
        }
    }

    /// The slot at `index`.
    pub fn get(&self, index: usize) -> &Slot {
        &self.slots[index]
    }

    /// Name of the record (live or tombstoned) at `index`, if any.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.slots[index].name()
    }

    /// Live records as `(slot, name)` pairs in increasing slot order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| match slot {
            Slot::Occupied(name) => Some((i, name.as_str())),
            _ => None,
        })
    }

    /// Number of tombstoned slots.
    pub fn tombstones(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Tombstone(_)))
            .count()
    }
}
