//! CSV in, CSV out: score many texts against one catalog.

mod parser;

use crate::catalog::Catalog;
use crate::evaluation::{EvaluationEngine, EvaluationResult};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid batch CSV: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchRecord {
    pub id: String,
    pub result: EvaluationResult,
}

/// Scores every `id,text` row, keeping input order.
pub fn score_reader<R: Read>(
    engine: &EvaluationEngine,
    reader: R,
) -> Result<Vec<BatchRecord>, BatchError> {
    let rows = parser::parse_rows(reader)?;
    let records: Vec<BatchRecord> = rows
        .into_iter()
        .map(|row| BatchRecord {
            result: engine.evaluate(&row.text),
            id: row.id,
        })
        .collect();

    info!(
        catalog = %engine.catalog().name(),
        rows = records.len(),
        "scored batch"
    );
    Ok(records)
}

pub fn score_path<P: AsRef<Path>>(
    engine: &EvaluationEngine,
    path: P,
) -> Result<Vec<BatchRecord>, BatchError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    score_reader(engine, file)
}

/// Writes `id, overall_score, level` then one column per criterion.
pub fn write_results<W: Write>(
    records: &[BatchRecord],
    catalog: &Catalog,
    writer: W,
) -> Result<(), BatchError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec![
        "id".to_string(),
        "overall_score".to_string(),
        "level".to_string(),
    ];
    header.extend(catalog.criteria().iter().map(|criterion| criterion.name.clone()));
    csv_writer.write_record(&header)?;

    for record in records {
        csv_writer.write_record(&row_for(record, catalog))?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_path<P: AsRef<Path>>(
    records: &[BatchRecord],
    catalog: &Catalog,
    path: P,
) -> Result<(), BatchError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_results(records, catalog, file)
}

fn row_for(record: &BatchRecord, catalog: &Catalog) -> Vec<String> {
    let mut row = vec![
        record.id.clone(),
        format_score(record.result.overall_score),
        record.result.level.label.clone(),
    ];
    row.extend(catalog.criteria().iter().map(|criterion| {
        record
            .result
            .score_of(&criterion.name)
            .map(format_score)
            .unwrap_or_default()
    }));
    row
}

fn format_score(score: f64) -> String {
    format!("{score:.3}")
}
