// src/lib.rs

pub mod cli;
pub mod errors;
pub mod eval;
pub mod logging;
pub mod pipeline;
pub mod settings;
pub mod store;
pub mod validate;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::pipeline::Pipeline;
use crate::store::{default_config, ConfigStore};

pub use crate::errors::{EvalError, PipelineError, StorageError, ValidationError};
pub use crate::eval::{evaluate, Bindings, Value};
pub use crate::pipeline::{CommitReceipt, EvalLimits};
pub use crate::validate::{validate_bindings, OidMap};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings loading
/// - the config store
/// - the validate-then-commit pipeline
/// and dispatches the requested subcommand.
pub async fn run(args: CliArgs) -> Result<()> {
    let settings = settings::load_or_default(&args.settings)?;

    let dir = args
        .dir
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.storage.dir.clone());
    debug!(dir = ?dir, "using storage directory");

    let store = ConfigStore::new(dir);
    let pipeline = Pipeline::new(store, settings.eval_limits());

    match args.command {
        Command::Show => {
            let text = pipeline.read()?;
            print!("{text}");
        }
        Command::Check { file } => {
            let candidate = read_candidate(&file)?;
            let oids = pipeline.check(&candidate).await?;
            for (oid, value) in oids.iter() {
                println!("{oid} = {}", value.kind_name());
            }
            println!("candidate is valid ({} entries)", oids.len());
        }
        Command::Submit { file } => {
            let candidate = read_candidate(&file)?;
            let receipt = pipeline.submit(&candidate).await?;
            println!(
                "committed {} entries ({} bytes, blake3 {})",
                receipt.entries, receipt.bytes, receipt.digest
            );
        }
        Command::Backup => match pipeline.store().backup()? {
            Some(text) => print!("{text}"),
            None => println!("no backup yet (nothing has been committed)"),
        },
        Command::Default => {
            print!("{}", default_config());
        }
    }

    Ok(())
}

/// Read a candidate from a file path, or from stdin when the path is `-`.
fn read_candidate(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading candidate from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading candidate file at {path:?}"))
}
