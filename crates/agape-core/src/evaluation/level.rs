use crate::catalog::{Boundary, LevelScale};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative level; `rank` 0 is the lowest band of the scale.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Level {
    pub rank: usize,
    pub label: String,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Maps a score onto the scale's bands. Total over every `f64`: NaN and
/// anything below the first threshold land in the lowest band.
pub fn classify(score: f64, scale: &LevelScale) -> Level {
    let rank = scale
        .thresholds()
        .iter()
        .take_while(|threshold| match scale.boundary() {
            Boundary::InclusiveLower => score >= **threshold,
            Boundary::InclusiveUpper => score > **threshold,
        })
        .count();

    level_at(scale, rank)
}

pub fn lowest(scale: &LevelScale) -> Level {
    level_at(scale, 0)
}

fn level_at(scale: &LevelScale, rank: usize) -> Level {
    let label = scale
        .band(rank)
        .map(|band| band.label.clone())
        .unwrap_or_default();
    Level { rank, label }
}
