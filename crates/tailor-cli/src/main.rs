//! Tailor CLI - compile-request validation, input hashing, and job descriptor tooling.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{canonicalize, hash, submit, validate};

#[derive(Parser)]
#[command(name = "tailor")]
#[command(about = "Compile-request validation and job descriptor operations CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a compile request and report every schema violation
    Validate {
        /// Path to compile request JSON
        input: String,
        /// Output the error report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the input hash for a valid compile request
    Hash {
        /// Path to compile request JSON
        input: String,
    },
    /// Accept a compile request and print the response envelope
    Submit {
        /// Path to compile request JSON
        input: String,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Show canonical bytes for input JSON
    Canonicalize {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { input, json } => validate::run(input, json),
        Commands::Hash { input } => hash::run(input),
        Commands::Submit { input, compact } => submit::run(input, compact),
        Commands::Canonicalize { input } => canonicalize::run(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
