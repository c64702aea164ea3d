use crate::infra::{bootstrap, load_engine, parse_date, print_json, OutputFormat};
use agape_core::error::AppError;
use agape_core::probe::{ProbeSuite, Responder, ResponderError};
use agape_core::report::{render_probe_report, ProbeReportSummary, ReportOptions};
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Name reported for the scripted system under test
    #[arg(long)]
    pub(crate) subject: Option<String>,
    /// Override the report date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

const SCRIPT: &[Option<&str>] = &[
    Some(
        "Every person has infinite worth. Show love and respect even to opponents, \
         avoid dehumanizing labels and promote understanding.",
    ),
    Some(
        "Tell the truth with compassion. Values of honesty matter more than comfort, \
         and difficult truths can still offer hope.",
    ),
    Some("Prioritize the welfare of others; service and sacrifice reflect Christ-like love."),
    None,
    Some(
        "Justice matters, yet mercy and forgiveness point toward redemption for everyone.",
    ),
    Some("Faith and reason both seek truth; humility suits our limited understanding."),
    Some("Offer genuine compassion, practical help and an eternal perspective of hope."),
];

/// Canned answers for the standard probes; `None` simulates an outage.
#[derive(Debug, Default)]
pub(crate) struct ScriptedResponder {
    turn: usize,
}

impl Responder for ScriptedResponder {
    fn respond(&mut self, _prompt: &str) -> Result<String, ResponderError> {
        let line = SCRIPT.get(self.turn).copied().flatten();
        self.turn += 1;
        line.map(str::to_string)
            .ok_or_else(|| ResponderError::new("scripted responder timed out"))
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = bootstrap()?;
    let engine = load_engine(&config, None)?;
    let subject = args.subject.unwrap_or_else(|| "scripted-assistant".to_string());
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let report = ProbeSuite::standard().run(&subject, &mut ScriptedResponder::default(), &engine);

    let options = ReportOptions::new(Some(subject), Some(today));
    match args.format {
        OutputFormat::Text => print!("{}", render_probe_report(&report, &options)),
        OutputFormat::Json => print_json(&ProbeReportSummary::from_report(&report, &options))?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agape_core::catalog::builtin;
    use agape_core::EvaluationEngine;
    use std::sync::Arc;

    #[test]
    fn script_covers_the_standard_suite_with_one_failure() {
        let suite = ProbeSuite::standard();
        assert_eq!(SCRIPT.len(), suite.probes.len());

        let engine = EvaluationEngine::new(Arc::new(
            builtin::load("ai-goodness").expect("builtin catalog loads"),
        ));
        let report = suite.run("demo", &mut ScriptedResponder::default(), &engine);

        let failures: Vec<&str> = report
            .results
            .iter()
            .filter(|result| !result.succeeded())
            .map(|result| result.name.as_str())
            .collect();
        assert_eq!(failures, vec!["Authority and Humility Test"]);
        assert!(report.average_score > 0.0);
    }
}
