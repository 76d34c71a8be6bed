//! Prompt loops, menu dispatch, and input validation
//!
//! The shell owns all I/O. Invalid configuration and empty names are
//! re-prompted here so the table controller never sees them; the
//! controller still revalidates on its side.

use crate::render;
use anyhow::{bail, Context, Result};
use roster_core::{Config, Relocation, Roster, RosterError};
use std::io::{BufRead, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Insert,
    Search,
    Delete,
    Relocate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Exit,
}

/// Positive integer, or None to re-prompt.
pub fn parse_count(line: &str) -> Option<usize> {
    line.trim().parse().ok().filter(|&n| n > 0)
}

/// Load factor strictly inside (0.0, 1.0), or None to re-prompt.
pub fn parse_load_factor(line: &str) -> Option<f64> {
    line.trim().parse().ok().filter(|&f| f > 0.0 && f < 1.0)
}

/// Single-letter menu command, or None for anything unrecognized.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim() {
        "i" => Some(Command::Act(Action::Insert)),
        "s" => Some(Command::Act(Action::Search)),
        "d" => Some(Command::Act(Action::Delete)),
        "r" => Some(Command::Act(Action::Relocate)),
        "e" => Some(Command::Exit),
        _ => None,
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    debug: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, debug: bool) -> Self {
        Shell {
            input,
            output,
            debug,
        }
    }

    /// Print `text` and read one line; None at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line).context("reading input")?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Settle on a valid configuration, starting from any command-line
    /// values and prompting for whatever is missing or out of range.
    pub fn configure(
        &mut self,
        count: Option<usize>,
        load_factor: Option<f64>,
    ) -> Result<Config> {
        let mut count = count.filter(|&n| n > 0);
        while count.is_none() {
            match self.prompt(
                "Please enter maximum number of elements that can be added to the table: ",
            )? {
                Some(line) => count = parse_count(&line),
                None => bail!("input ended during configuration"),
            }
        }
        let mut load_factor = load_factor.filter(|&f| f > 0.0 && f < 1.0);
        while load_factor.is_none() {
            match self.prompt("Please enter a load factor between 0.0 and 1.0: ")? {
                Some(line) => load_factor = parse_load_factor(&line),
                None => bail!("input ended during configuration"),
            }
        }
        writeln!(self.output)?;
        Config::new(count.unwrap(), load_factor.unwrap()).map_err(Into::into)
    }

    /// The menu loop; returns on 'e' or end of input.
    pub fn run(&mut self, roster: &mut Roster) -> Result<()> {
        loop {
            self.print_menu()?;
            let line = match self.prompt("Action: ")? {
                Some(line) => line,
                None => return Ok(()),
            };
            let action = match parse_command(&line) {
                Some(Command::Act(action)) => action,
                Some(Command::Exit) => return Ok(()),
                None => {
                    writeln!(self.output, "\nUnexpected command.\n")?;
                    continue;
                }
            };
            let name = if action == Action::Relocate {
                None
            } else {
                match self.read_name(action)? {
                    Some(name) => Some(name),
                    None => return Ok(()),
                }
            };
            self.dispatch(roster, action, name.as_deref())?;
            writeln!(self.output)?;
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Press 'i' for creating a new record.")?;
        writeln!(self.output, "Press 'd' for deleting a record.")?;
        writeln!(self.output, "Press 's' for searching a record with name.")?;
        writeln!(self.output, "Press 'r' for moving records into a new table.")?;
        writeln!(self.output, "Press 'e' for exit.")?;
        Ok(())
    }

    /// Non-empty name, re-prompted until valid; None at end of input.
    fn read_name(&mut self, action: Action) -> Result<Option<String>> {
        let verb = match action {
            Action::Insert => "insert",
            Action::Delete => "delete",
            _ => "search for",
        };
        loop {
            match self.prompt(&format!("Please enter a name to {}: ", verb))? {
                None => return Ok(None),
                Some(name) if !name.is_empty() => return Ok(Some(name)),
                Some(_) => writeln!(self.output, "Invalid name.")?,
            }
        }
    }

    fn dispatch(&mut self, roster: &mut Roster, action: Action, name: Option<&str>) -> Result<()> {
        if self.debug {
            if let Some(name) = name {
                writeln!(self.output)?;
                for line in render::trace_lines(action, name, &roster.probe_trace(name)) {
                    writeln!(self.output, "{}", line)?;
                }
            }
        }
        writeln!(self.output)?;
        match action {
            Action::Insert => {
                let name = name.expect("insert requires a name");
                match roster.insert(name) {
                    Ok(outcome) => {
                        writeln!(self.output, "{}", render::insert_ok(name, &outcome))?;
                        if let Some(relocation) = &outcome.resize {
                            self.report_relocation(roster, relocation)?;
                        }
                    }
                    Err(err) if err.is_fatal() => return Err(err.into()),
                    Err(err) => writeln!(self.output, "{}", render::insert_err(name, &err))?,
                }
            }
            Action::Search => {
                let name = name.expect("search requires a name");
                let result = roster.search(name);
                writeln!(self.output, "{}", render::search_outcome(name, &result))?;
            }
            Action::Delete => {
                let name = name.expect("delete requires a name");
                match roster.delete(name) {
                    Ok(deleted) => {
                        writeln!(self.output, "{}", render::delete_ok(name, deleted.slot))?;
                        if let Some(relocation) = &deleted.resize {
                            self.report_relocation(roster, relocation)?;
                        }
                    }
                    Err(err) if err.is_fatal() => return Err(err.into()),
                    Err(RosterError::NotFound) => {
                        writeln!(self.output, "{}", render::delete_err(name))?
                    }
                    Err(err) => writeln!(self.output, "{}", err)?,
                }
            }
            Action::Relocate => {
                let relocation = roster.compact()?;
                self.report_relocation(roster, &relocation)?;
                writeln!(self.output, "{}", render::compaction_summary(&relocation))?;
            }
        }
        Ok(())
    }

    fn report_relocation(&mut self, roster: &Roster, relocation: &Relocation) -> Result<()> {
        if let Some(notice) = render::resize_notice(relocation, roster.threshold()) {
            writeln!(self.output, "{}", notice)?;
        }
        for line in render::relocation_moves(roster, relocation) {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }
}
