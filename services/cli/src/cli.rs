use crate::batch::{run_batch, BatchArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::evaluate::{run_catalogs, run_evaluate, run_quick, EvaluateArgs, QuickArgs};
use agape_core::error::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "agape-core",
    about = "Score text against weighted criteria catalogs from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one text against a catalog and print a report
    Evaluate(EvaluateArgs),
    /// Screen a single response without a catalog
    Quick(QuickArgs),
    /// Score every row of an `id,text` CSV file
    Batch(BatchArgs),
    /// List the built-in catalogs
    Catalogs,
    /// Run the standard probe suite against a scripted responder
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Evaluate(args) => run_evaluate(args),
        Command::Quick(args) => run_quick(args),
        Command::Batch(args) => run_batch(args),
        Command::Catalogs => run_catalogs(),
        Command::Demo(args) => run_demo(args),
    }
}
