//! Error taxonomy for table operations
//!
//! Every variant except `Allocation` is an ordinary, recoverable outcome
//! that leaves the table unchanged; `Allocation` is the one fatal kind.

use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    /// Requested element count was zero.
    #[error("element count must be positive (got {got})")]
    InvalidCount { got: usize },

    /// Load factor outside the open interval (0.0, 1.0).
    #[error("load factor must be strictly between 0.0 and 1.0 (got {got})")]
    InvalidLoadFactor { got: f64 },

    /// An empty string where a record name is required.
    #[error("record name must not be empty")]
    EmptyName,

    /// Insert of a name that is already live in the table.
    #[error("name is already in the table at slot {slot}")]
    Duplicate { slot: usize },

    /// Search or delete of a name that is absent or tombstoned.
    #[error("name is not in the table")]
    NotFound,

    /// Every slot probed during an insert without finding room. The grow
    /// policy prevents this structurally; handled here regardless.
    #[error("table is full")]
    TableFull,

    /// Backing storage could not be allocated.
    #[error("failed to allocate table storage: {0}")]
    Allocation(#[from] TryReserveError),
}

impl RosterError {
    /// True only for resource exhaustion; every other variant is a normal
    /// per-operation outcome the caller reports and moves past.
    pub fn is_fatal(&self) -> bool {
        matches!(self, RosterError::Allocation(_))
    }
}
