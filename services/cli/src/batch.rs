use crate::infra::{bootstrap, load_engine};
use agape_core::batch::{score_path, write_path, write_results};
use agape_core::error::AppError;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with `id` and `text` columns
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Where to write the scored CSV (defaults to stdout)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Catalog to score against (overrides AGAPE_CATALOG)
    #[arg(long)]
    pub(crate) catalog: Option<String>,
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let engine = load_engine(&config, args.catalog.as_deref())?;

    let records = score_path(&engine, &args.input)?;
    match args.output {
        Some(path) => {
            write_path(&records, engine.catalog(), &path)?;
            eprintln!("Scored {} rows into {}", records.len(), path.display());
        }
        None => write_results(&records, engine.catalog(), std::io::stdout().lock())?,
    }
    Ok(())
}
