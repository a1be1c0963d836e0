//! vaultsmith tools CLI.
//!
//! Provides the `vaultsmith` binary with subcommands for working with model
//! documents offline. `check` runs the same validate-and-repair pass as the
//! HTTP generate endpoint against a JSON file; `models` and `show` inspect a
//! server database.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use vaultsmith_check::{validate_and_repair, ValidationPolicy};
use vaultsmith_storage::{ModelId, ModelStore, SqliteStore};

/// vaultsmith model tools.
#[derive(Parser)]
#[command(name = "vaultsmith", about = "Data Vault model tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Validate and repair a model document from a JSON file.
    Check {
        /// Path to the JSON document.
        file: PathBuf,

        /// Enforce id prefixes and require `reasoning` fields.
        #[arg(long)]
        strict: bool,
    },
    /// List models stored in a server database.
    Models {
        /// Path to the server database file.
        #[arg(short, long)]
        db: String,
    },
    /// Print one stored model document.
    Show {
        /// Path to the server database file.
        #[arg(short, long)]
        db: String,

        /// Model id to print.
        #[arg(short, long)]
        model: i64,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check { file, strict } => run_check(&file, strict),
        Commands::Models { db } => run_models(&db),
        Commands::Show { db, model } => run_show(&db, model),
    };
    process::exit(exit_code);
}

/// Execute the check subcommand.
///
/// Prints the repaired document to stdout and warnings to stderr.
/// Returns exit code: 0 = repaired, 1 = malformed model, 3 = I/O error.
fn run_check(file: &Path, strict: bool) -> i32 {
    let raw = match std::fs::read_to_string(file) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {}", file.display(), e);
            return 3;
        }
    };
    let doc: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("Error: '{}' is not valid JSON: {}", file.display(), e);
            return 3;
        }
    };

    let policy = if strict {
        ValidationPolicy::Strict
    } else {
        ValidationPolicy::Lenient
    };

    match validate_and_repair(doc, policy) {
        Ok(repaired) => {
            for warning in &repaired.warnings {
                eprintln!("warning[{}]: {}", warning.code(), warning);
            }
            eprintln!("repair inserted {} edge(s)", repaired.added_edges);
            let json = serde_json::to_string_pretty(&repaired.model).unwrap_or_else(|e| {
                format!("{{\"error\": \"failed to serialize model: {}\"}}", e)
            });
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: malformed model: {}", e);
            1
        }
    }
}

/// Execute the models subcommand.
///
/// Returns exit code: 0 = success, 3 = I/O error.
fn run_models(db_path: &str) -> i32 {
    let store = match SqliteStore::new(db_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", db_path, e);
            return 3;
        }
    };

    match store.list_models() {
        Ok(models) => {
            for model in models {
                println!(
                    "{}\tocr={}\tgrounded={}\t{}\t{}",
                    model.id.0, model.ocr_id.0, model.grounded, model.created_at, model.filename
                );
            }
            0
        }
        Err(e) => {
            eprintln!("Error: failed to list models: {}", e);
            3
        }
    }
}

/// Execute the show subcommand.
///
/// Returns exit code: 0 = success, 1 = not found, 3 = I/O error.
fn run_show(db_path: &str, model_id: i64) -> i32 {
    let store = match SqliteStore::new(db_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", db_path, e);
            return 3;
        }
    };

    match store.get_model(ModelId(model_id)) {
        Ok(stored) => {
            println!("{}", stored.model_json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to load model {}: {}", model_id, e);
            1
        }
    }
}
