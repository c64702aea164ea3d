use crate::infra::{bootstrap, load_engine, parse_context_pair, parse_date, print_json, OutputFormat};
use agape_core::catalog::builtin;
use agape_core::error::AppError;
use agape_core::evaluation::QuickCheck;
use agape_core::report::{render_evaluation, render_quick_check, EvaluationSummary, ReportOptions};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Built-in catalog name, name of a file in AGAPE_CATALOG_DIR, or a path to a .json catalog
    #[arg(long)]
    pub(crate) catalog: Option<String>,
    /// Text to evaluate (reads stdin when neither --text nor --file is given)
    #[arg(long, conflicts_with = "file")]
    pub(crate) text: Option<String>,
    /// File whose contents should be evaluated
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Additional key=value context folded into scoring; repeatable
    #[arg(long = "context", value_parser = parse_context_pair)]
    pub(crate) context: Vec<(String, String)>,
    /// Name of the person or system being evaluated, shown in the report header
    #[arg(long)]
    pub(crate) subject: Option<String>,
    /// Override the report date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct QuickArgs {
    /// Single response to screen
    #[arg(long)]
    pub(crate) text: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        catalog,
        text,
        file,
        context,
        subject,
        today,
        format,
    } = args;

    let config = bootstrap()?;
    let engine = load_engine(&config, catalog.as_deref())?;

    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let context: BTreeMap<String, String> = context.into_iter().collect();

    let result = engine.evaluate_with_context(&text, &context);
    let options = ReportOptions::new(
        subject,
        Some(today.unwrap_or_else(|| Local::now().date_naive())),
    );

    match format {
        OutputFormat::Text => print!("{}", render_evaluation(&result, &options)),
        OutputFormat::Json => print_json(&EvaluationSummary::from_result(&result, &options))?,
    }
    Ok(())
}

pub(crate) fn run_quick(args: QuickArgs) -> Result<(), AppError> {
    bootstrap()?;
    let outcome = QuickCheck::default().check(&args.text);

    match args.format {
        OutputFormat::Text => print!("{}", render_quick_check(&outcome)),
        OutputFormat::Json => print_json(&outcome)?,
    }
    Ok(())
}

pub(crate) fn run_catalogs() -> Result<(), AppError> {
    bootstrap()?;
    println!("Built-in catalogs");
    for catalog in builtin::all()? {
        println!(
            "- {} ({} criteria, scale {}): {}",
            catalog.name(),
            catalog.criteria().len(),
            catalog.policy().scale,
            catalog.description()
        );
    }
    Ok(())
}
