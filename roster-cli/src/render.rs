//! Status-line and debug-trace formatting
//!
//! All presentation lives here; the core returns structured outcomes and
//! never prints. Functions build strings so they stay unit-testable.

use crate::shell::Action;
use roster_core::{Inserted, ProbeTrace, Relocation, Roster, RosterError, StepDisposition};

pub fn insert_ok(name: &str, outcome: &Inserted) -> String {
    format!("'{}' inserted into address: {}.", name, outcome.slot)
}

pub fn insert_err(name: &str, err: &RosterError) -> String {
    match err {
        RosterError::Duplicate { .. } => format!(
            "Couldn't insert '{}' into table because it is already in table.",
            name
        ),
        RosterError::TableFull => "Table is full.".to_string(),
        other => other.to_string(),
    }
}

pub fn search_outcome(name: &str, result: &Result<usize, RosterError>) -> String {
    match result {
        Ok(slot) => format!("'{}' is at the address: {}.", name, slot),
        Err(_) => format!("Couldn't find '{}' in the table.", name),
    }
}

pub fn delete_ok(name: &str, slot: usize) -> String {
    format!("Removed '{}' from address: {}.", name, slot)
}

pub fn delete_err(name: &str) -> String {
    format!("Couldn't find '{}' in the table.", name)
}

/// Explanation of why a relocation happened; nothing for a plain
/// compaction, which the user asked for explicitly.
pub fn resize_notice(relocation: &Relocation, threshold: f64) -> Option<String> {
    let load = relocation.moves.len() as f64 / relocation.old_len as f64;
    if relocation.grew() {
        Some(format!(
            "Current load factor ({:.3}) is bigger than the maximum allowed ({:.3}).\n\
             Relocating records into a bigger table. (new size: {} ||| old size: {})",
            load, threshold, relocation.new_len, relocation.old_len
        ))
    } else if relocation.shrank() {
        Some(format!(
            "Current load factor is too low ({:.3}).\n\
             Relocating records into a smaller table. (new size: {} ||| old size: {})",
            load, relocation.new_len, relocation.old_len
        ))
    } else {
        None
    }
}

/// Per-record move lines; names are resolved against the post-relocation
/// table, where every destination slot holds its record.
pub fn relocation_moves(roster: &Roster, relocation: &Relocation) -> Vec<String> {
    relocation
        .moves
        .iter()
        .map(|m| {
            let name = roster.name_at(m.to).unwrap_or("?");
            format!(
                "Relocating '{}' into new table. (old address {} -> new address {})",
                name, m.from, m.to
            )
        })
        .collect()
}

pub fn compaction_summary(relocation: &Relocation) -> String {
    format!(
        "Rebuilt table at {} slots; {} records re-homed, {} tombstones dropped.",
        relocation.new_len,
        relocation.moves.len(),
        relocation.dropped
    )
}

/// The debug rendition of one probe walk: header, hash values, then one
/// line per probed slot, worded for the action being performed.
pub fn trace_lines(action: Action, name: &str, trace: &ProbeTrace) -> Vec<String> {
    let mut lines = vec![
        format!("DEBUG DESCRIPTION FOR {}", action_label(action)),
        String::new(),
        format!("h1(\"{}\") = {}", name, trace.h1),
        format!("h2(\"{}\") = {}", name, trace.h2),
        String::new(),
    ];
    for step in &trace.steps {
        lines.push(step_line(action, name, step.slot, step.disposition));
    }
    lines
}

fn action_label(action: Action) -> &'static str {
    match action {
        Action::Insert => "INSERT",
        Action::Search => "SEARCH",
        Action::Delete => "DELETE",
        Action::Relocate => "RELOCATE",
    }
}

fn step_line(action: Action, name: &str, slot: usize, disposition: StepDisposition) -> String {
    match disposition {
        StepDisposition::OccupiedByOther => match action {
            Action::Insert | Action::Relocate => format!(
                "DEBUG: Couldn't find empty slot at index {} to insert '{}'.",
                slot, name
            ),
            Action::Search => format!("DEBUG: Couldn't find '{}' at address {}.", name, slot),
            Action::Delete => format!(
                "DEBUG: Couldn't find '{}' at address {} (delete attempt failed).",
                name, slot
            ),
        },
        StepDisposition::MatchedLive => match action {
            Action::Insert | Action::Relocate => {
                format!("DEBUG: '{}' is already in table at position {}.", name, slot)
            }
            Action::Search => format!("DEBUG: '{}' is found at position {}.", name, slot),
            Action::Delete => format!("DEBUG: '{}' is removed from position {}.", name, slot),
        },
        StepDisposition::MatchedTombstone => match action {
            Action::Insert | Action::Relocate => format!(
                "DEBUG: Empty slot for inserting '{}' is found at {} (reusing deleted record).",
                name, slot
            ),
            Action::Search | Action::Delete => {
                format!("DEBUG: Couldn't find '{}' in the table.", name)
            }
        },
        StepDisposition::Empty => match action {
            Action::Insert | Action::Relocate => format!(
                "DEBUG: Empty slot for inserting '{}' into table is found at index {}.",
                name, slot
            ),
            Action::Search => format!("DEBUG: Couldn't find '{}' at address {}.", name, slot),
            Action::Delete => format!(
                "DEBUG: Couldn't find '{}' at address {} (delete attempt failed).",
                name, slot
            ),
        },
        StepDisposition::Cycle => "DEBUG: Table is full.".to_string(),
    }
}
