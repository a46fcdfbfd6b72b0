use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use domain::models::*;
pub use services::geometry::*;
pub use services::messages::*;
pub use services::output::*;
pub use services::prompt::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Visibility => commands::handle_visibility(cli.json, &mut input, &mut out),
        Commands::Areas => commands::handle_areas(cli.json, &mut input, &mut out),
    }
}
