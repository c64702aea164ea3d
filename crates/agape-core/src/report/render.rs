use super::views::ReportOptions;
use crate::evaluation::{EvaluationResult, QuickCheckOutcome};
use crate::probe::ProbeReport;

pub fn render_evaluation(result: &EvaluationResult, options: &ReportOptions) -> String {
    let mut lines = vec![format!("Evaluation against '{}'", result.catalog)];
    push_header(&mut lines, options.subject.as_deref(), options);
    lines.push(String::new());
    push_evaluation_body(&mut lines, result);
    finish(lines)
}

/// `options.subject` overrides the subject recorded on the report.
pub fn render_probe_report(report: &ProbeReport, options: &ReportOptions) -> String {
    let mut lines = vec!["Probe suite report".to_string()];
    let subject = options.subject.as_deref().unwrap_or(&report.subject);
    push_header(&mut lines, Some(subject), options);
    lines.push(String::new());

    lines.push(format!("Average probe score: {:.2} / 5.00", report.average_score));
    lines.push("Probes:".to_string());
    for result in &report.results {
        match &result.error {
            Some(error) => lines.push(format!(
                "  - {}: {:.2} (error: {error})",
                result.name, result.score
            )),
            None => lines.push(format!("  - {}: {:.2}", result.name, result.score)),
        }
    }
    push_list(&mut lines, "Passed", &report.passed, false);
    push_list(&mut lines, "Failed", &report.failed, false);

    lines.push(String::new());
    lines.push(format!(
        "Evaluation of responses against '{}'",
        report.evaluation.catalog
    ));
    push_evaluation_body(&mut lines, &report.evaluation);
    finish(lines)
}

pub fn render_quick_check(outcome: &QuickCheckOutcome) -> String {
    let mut lines = vec![format!(
        "Quick check score: {:.2} / {:.2}",
        outcome.score, outcome.scale
    )];
    push_list(&mut lines, "Concerns", &outcome.concerns, false);
    finish(lines)
}

fn push_header(lines: &mut Vec<String>, subject: Option<&str>, options: &ReportOptions) {
    if let Some(subject) = subject {
        lines.push(format!("Subject: {subject}"));
    }
    if let Some(date) = options.generated_on {
        lines.push(format!("Generated: {}", date.format("%Y-%m-%d")));
    }
}

fn push_evaluation_body(lines: &mut Vec<String>, result: &EvaluationResult) {
    lines.push(format!(
        "Overall: {:.2} / {:.2} ({:.1}%)",
        result.overall_score,
        result.scale,
        result.compatibility() * 100.0
    ));
    lines.push(format!("Level: {}", result.level.label));

    lines.push("Criteria:".to_string());
    if result.scores.is_empty() {
        lines.push("  - none".to_string());
    }
    for entry in &result.scores {
        lines.push(format!(
            "  - {}: {:.2} (weight {:.2})",
            entry.label, entry.score, entry.weight
        ));
    }

    push_list(lines, "Strengths", &result.strengths, false);
    push_list(lines, "Concerns", &result.concerns, false);
    push_list(lines, "Recommendations", &result.recommendations, true);
}

fn push_list(lines: &mut Vec<String>, title: &str, items: &[String], numbered: bool) {
    lines.push(format!("{title}:"));
    if items.is_empty() {
        lines.push("  - none".to_string());
        return;
    }
    for (index, item) in items.iter().enumerate() {
        if numbered {
            lines.push(format!("  {}. {item}", index + 1));
        } else {
            lines.push(format!("  - {item}"));
        }
    }
}

fn finish(lines: Vec<String>) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
