//! Interactive shell around the roster table

mod cli;
mod render;
mod shell;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use roster_core::Roster;
use shell::Shell;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), cli.debug);
    let config = shell.configure(cli.count, cli.load_factor)?;
    let mut roster = Roster::new(config)?;
    log::debug!("table ready: {}", roster.stats());
    shell.run(&mut roster)
}
