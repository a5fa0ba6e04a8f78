//! semnav CLI - Navigation rendering.
//!
//! Provides commands for:
//! - `render`: Render a configured navigation for a current page
//! - `tree`: Print a configured navigation tree
//! - `check`: Validate the configuration

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs, TreeArgs};
use output::Output;

/// semnav - Navigation rendering.
#[derive(Parser)]
#[command(name = "semnav", version, about)]
struct Cli {
    /// Enable info logging (otherwise `RUST_LOG` applies).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a navigation as an HTML fragment.
    Render(RenderArgs),
    /// Print a navigation tree.
    Tree(TreeArgs),
    /// Validate the configuration.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
