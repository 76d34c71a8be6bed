//! Structured record of one probe walk
//!
//! The table core never prints; a caller that wants per-probe diagnostics
//! records the walk with `ProbeTrace::record` and formats it itself. The
//! trace replays the same walk `SlotTable::locate` performs, read-only.

use crate::hash;
use crate::slot::{Lookup, Slot, SlotTable};

/// What the walk met at one probed slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDisposition {
    /// Slot holds a record with a different name; the walk continues.
    OccupiedByOther,
    /// Slot holds a live record with the searched name.
    MatchedLive,
    /// Slot holds a tombstoned record with the searched name.
    MatchedTombstone,
    /// Slot is empty; the name is absent.
    Empty,
    /// The walk returned to its starting slot without meeting an empty one.
    Cycle,
}

/// One probed slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeStep {
    /// Collision count when this slot was probed.
    pub collisions: usize,
    pub slot: usize,
    pub disposition: StepDisposition,
}

/// Full record of a probe walk for one name.
#[derive(Clone, Debug)]
pub struct ProbeTrace {
    pub h1: usize,
    pub h2: usize,
    pub steps: Vec<ProbeStep>,
    pub outcome: Lookup,
}

impl ProbeTrace {
    /// Replay the probe walk for `name` against `table` without mutating
    /// anything. The outcome always equals `table.locate(name)`.
    pub fn record(table: &SlotTable, name: &str) -> ProbeTrace {
        let m = table.len();
        let h1 = hash::h1(name, m);
        let h2 = hash::h2(name, m);
        let initial = h1;
        let mut steps = Vec::new();
        let mut collisions = 0;
        let mut slot = initial;
        let outcome = loop {
            match table.get(slot) {
                Slot::Empty => {
                    steps.push(ProbeStep {
                        collisions,
                        slot,
                        disposition: StepDisposition::Empty,
                    });
                    break Lookup::Absent { slot };
                }
                Slot::Occupied(held) if held == name => {
                    steps.push(ProbeStep {
                        collisions,
                        slot,
                        disposition: StepDisposition::MatchedLive,
                    });
                    break Lookup::Active { slot };
                }
                Slot::Tombstone(held) if held == name => {
                    steps.push(ProbeStep {
                        collisions,
                        slot,
                        disposition: StepDisposition::MatchedTombstone,
                    });
                    break Lookup::Tombstoned { slot };
                }
                _ => {
                    steps.push(ProbeStep {
                        collisions,
                        slot,
                        disposition: StepDisposition::OccupiedByOther,
                    });
                    collisions += 1;
                    slot = hash::probe(name, collisions, m);
                    if slot == initial {
                        steps.push(ProbeStep {
                            collisions,
                            slot,
                            disposition: StepDisposition::Cycle,
                        });
                        break Lookup::AbsentFull { slot };
                    }
                }
            }
        };
        ProbeTrace {
            h1,
            h2,
            steps,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(table: &mut SlotTable, name: &str) -> usize {
        match table.locate(name) {
            Lookup::Absent { slot } => {
                table.occupy(slot, name.to_owned());
                slot
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_trace_agrees_with_locate() {
        let mut table = SlotTable::new(7).unwrap();
        occupy(&mut table, "ann");
        occupy(&mut table, "bob");
        for name in ["ann", "bob", "cid"] {
            let trace = ProbeTrace::record(&table, name);
            assert_eq!(trace.outcome, table.locate(name));
            assert_eq!(trace.h1, hash::h1(name, 7));
            assert_eq!(trace.h2, hash::h2(name, 7));
            assert!(!trace.steps.is_empty());
        }
    }

    #[test]
    fn test_trace_ends_with_terminal_step() {
        let mut table = SlotTable::new(7).unwrap();
        let slot = occupy(&mut table, "ann");
        table.bury(slot);

        let trace = ProbeTrace::record(&table, "ann");
        let last = trace.steps.last().unwrap();
        assert_eq!(last.disposition, StepDisposition::MatchedTombstone);
        assert_eq!(last.slot, slot);
        // Every step before the terminal one passed an occupied slot.
        for step in &trace.steps[..trace.steps.len() - 1] {
            assert_eq!(step.disposition, StepDisposition::OccupiedByOther);
        }
    }

    #[test]
    fn test_trace_records_full_cycle() {
        let mut table = SlotTable::new(5).unwrap();
        for name in ["ann", "bob", "cid", "dee", "eve"] {
            occupy(&mut table, name);
        }
        let trace = ProbeTrace::record(&table, "fay");
        assert!(matches!(trace.outcome, Lookup::AbsentFull { .. }));
        assert_eq!(trace.steps.last().unwrap().disposition, StepDisposition::Cycle);
        // Five occupied probes then the cycle step.
        assert_eq!(trace.steps.len(), 6);
    }
}
