//! PackLayer CLI - command-line interface to the PackLayer library.
//!
//! Lists installed packages, resolves logical resource names to files on
//! disk, and inspects the configuration the resolver runs with.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{config, packages, resolve};

#[derive(Debug, Parser)]
#[command(
    name = "packlayer",
    version = packlayer::VERSION,
    about = "Layered game data packages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect installed packages
    Packages {
        #[command(subcommand)]
        command: packages::PackagesCommands,
    },

    /// Resolve a logical resource name to a file on disk
    Resolve(resolve::ResolveArgs),

    /// View configuration
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

fn main() {
    // Log to stderr so command output stays clean for piping.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Packages { command } => packages::run(command),
        Commands::Resolve(args) => resolve::run(args),
        Commands::Config { command } => config::run(command),
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
