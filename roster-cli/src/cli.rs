use clap::Parser;

/// Interactive double-hashed string table with soft deletion.
///
/// Configuration left off the command line is prompted for interactively,
/// and invalid flag values fall back to prompting as well.
#[derive(Parser)]
#[command(name = "roster", about = "Double-hashed string table with soft deletion", version)]
pub struct Cli {
    /// Maximum number of elements expected in the table.
    #[arg(long)]
    pub count: Option<usize>,

    /// Load-factor threshold, strictly between 0.0 and 1.0.
    #[arg(long = "load-factor")]
    pub load_factor: Option<f64>,

    /// Print h1/h2 and per-probe diagnostics before each action's result.
    #[arg(long)]
    pub debug: bool,
}
