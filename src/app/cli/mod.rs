//! CLI Adapter.

mod load;
mod run;

use crate::adapters::MemoryVariableStore;
use crate::domain::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "artvar")]
#[command(version)]
#[command(
    about = "Load artifact text files into request variables",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load one artifact into a variable and print the variables as JSON
    #[clap(visible_alias = "l")]
    Load {
        /// Artifact name, without directory or `.txt` extension
        file_name: String,
        /// Variable to publish the content under
        var_name: String,
        /// Deployment root containing `artifacts/` (defaults to the executable's directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Apply the bindings of an artvar.toml manifest
    #[clap(visible_alias = "r")]
    Run {
        /// Manifest path
        #[arg(short, long, default_value = crate::domain::MANIFEST_FILE)]
        manifest: PathBuf,
    },
}

pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Load { file_name, var_name, root } => load::run_load(&file_name, &var_name, root),
        Commands::Run { manifest } => run::run_manifest(&manifest),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the store's entries as a pretty JSON object on stdout.
fn print_store(store: &MemoryVariableStore) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(store)?);
    Ok(())
}
