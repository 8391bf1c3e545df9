//! mdocs CLI - Documentation tree inspector.
//!
//! Provides commands for:
//! - `tree`: Print the documentation tree of a content root
//! - `pages`: List file pages with their output destinations

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PagesArgs, TreeArgs};
use output::Output;

/// mdocs - Documentation tree inspector.
#[derive(Parser)]
#[command(name = "mdocs", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the documentation tree.
    Tree(TreeArgs),
    /// List file pages and their destinations.
    Pages(PagesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Tree(args) => args.common.verbose,
        Commands::Pages(args) => args.common.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Tree(args) => args.execute(&output),
        Commands::Pages(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
