use crate::evaluation::EvaluationResult;
use crate::probe::ProbeReport;
use chrono::NaiveDate;
use serde::Serialize;

/// Presentation knobs shared by every rendered report.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub subject: Option<String>,
    pub generated_on: Option<NaiveDate>,
}

impl ReportOptions {
    pub fn new(subject: Option<String>, generated_on: Option<NaiveDate>) -> Self {
        Self {
            subject,
            generated_on,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CriterionScoreView {
    pub name: String,
    pub label: String,
    pub weight: f64,
    pub score: f64,
}

/// Flattened, JSON-friendly view of one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationSummary {
    pub catalog: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_on: Option<NaiveDate>,
    pub overall_score: f64,
    pub scale: f64,
    pub compatibility_pct: f64,
    pub level: String,
    pub level_rank: usize,
    pub criteria: Vec<CriterionScoreView>,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

impl EvaluationSummary {
    pub fn from_result(result: &EvaluationResult, options: &ReportOptions) -> Self {
        let criteria = result
            .scores
            .iter()
            .map(|entry| CriterionScoreView {
                name: entry.name.clone(),
                label: entry.label.clone(),
                weight: entry.weight,
                score: round_to(entry.score, 3),
            })
            .collect();

        Self {
            catalog: result.catalog.clone(),
            subject: options.subject.clone(),
            generated_on: options.generated_on,
            overall_score: round_to(result.overall_score, 3),
            scale: result.scale,
            compatibility_pct: round_to(result.compatibility() * 100.0, 1),
            level: result.level.label.clone(),
            level_rank: result.level.rank,
            criteria,
            strengths: result.strengths.clone(),
            concerns: result.concerns.clone(),
            recommendations: result.recommendations.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeResultView {
    pub name: String,
    pub score: f64,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProbeReportSummary {
    pub subject: String,
    pub average_score: f64,
    pub passed: Vec<String>,
    pub failed: Vec<String>,
    pub probes: Vec<ProbeResultView>,
    pub evaluation: EvaluationSummary,
}

impl ProbeReportSummary {
    /// `options.subject` overrides the subject recorded on the report.
    pub fn from_report(report: &ProbeReport, options: &ReportOptions) -> Self {
        let subject = options
            .subject
            .clone()
            .unwrap_or_else(|| report.subject.clone());
        let options = ReportOptions {
            subject: Some(subject.clone()),
            generated_on: options.generated_on,
        };

        Self {
            subject,
            average_score: round_to(report.average_score, 3),
            passed: report.passed.clone(),
            failed: report.failed.clone(),
            probes: report
                .results
                .iter()
                .map(|result| ProbeResultView {
                    name: result.name.clone(),
                    score: round_to(result.score, 3),
                    weight: result.weight,
                    error: result.error.clone(),
                })
                .collect(),
            evaluation: EvaluationSummary::from_result(&report.evaluation, &options),
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
