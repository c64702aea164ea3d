//! Plain-text and JSON presentation of evaluation outcomes.

mod render;
mod views;

pub use render::{render_evaluation, render_probe_report, render_quick_check};
pub use views::{
    CriterionScoreView, EvaluationSummary, ProbeReportSummary, ProbeResultView, ReportOptions,
};
