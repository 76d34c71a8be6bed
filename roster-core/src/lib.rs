//! Roster - open-addressing string table with double hashing
//!
//! Core library providing:
//! - Prime-sized backing storage with soft (tombstone) deletion
//! - Double-hash probing that covers every slot before repeating
//! - Automatic grow/shrink keeping the load factor in its band
//! - Structured probe traces and an order-independent content digest

pub mod digest;
pub mod error;
pub mod hash;
pub mod prime;
pub mod roster;
pub mod slot;
pub mod trace;

pub use digest::TableDigest;
pub use error::RosterError;
pub use roster::{Config, Deleted, Inserted, Move, Relocation, Roster, RosterStats};
pub use slot::{Lookup, Slot, SlotTable};
pub use trace::{ProbeStep, ProbeTrace, StepDisposition};

#[cfg(test)]
mod tests;
