//! xtask - Development task runner for lambdagen
//!
//! Usage:
//!   cargo xtask generate [--config <yaml>] [--kind <KIND>]... [--format json|yaml] [--output <path>]
//!   cargo xtask lookup --kind <KIND> --arity <N> [--first <TYPE>] ... [--prefer-native]

mod args;
mod generate;
mod lookup;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for lambdagen")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the enumeration and write the descriptor manifest
    Generate(generate::GenerateArgs),
    /// Run the enumeration and look up descriptors by shape
    Lookup(lookup::LookupArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so a manifest on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lambdagen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::run(&args),
        Commands::Lookup(args) => lookup::run(&args),
    }
}
