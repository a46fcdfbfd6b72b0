use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tutor", version, about = "Interactive console drills")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect four tiered messages, then show the nested and outer views
    Visibility,
    /// Compute rectangle and triangle areas from prompted inputs
    Areas,
}
