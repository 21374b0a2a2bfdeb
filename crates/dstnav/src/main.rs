//! dstnav CLI - Documentation sidebar catalog.
//!
//! Provides commands for:
//! - `check`: Validate sidebar definitions
//! - `order`: Print the linear reading order of a sidebar
//! - `resolve`: Locate a document and print its breadcrumbs and neighbors
//! - `nav`: Print the navigation tree of a sidebar as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NavArgs, OrderArgs, ResolveArgs};
use output::Output;

/// dstnav - Documentation sidebar catalog.
#[derive(Parser)]
#[command(name = "dstnav", version, about)]
struct Cli {
    /// Enable verbose output (catalog build logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate sidebar definitions and print a summary.
    Check(CheckArgs),
    /// Print the linear reading order of a sidebar.
    Order(OrderArgs),
    /// Print the location, breadcrumbs and neighbors of a document.
    Resolve(ResolveArgs),
    /// Print the navigation tree of a sidebar as JSON.
    Nav(NavArgs),
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
        Commands::Check(args) => args.execute(),
        Commands::Order(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
