use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::assessment::AssessmentStatus;

/// Scores at or above this are green.
pub const GREEN_THRESHOLD: f64 = 80.0;

/// Scores below this are red, and an overall score below it needs attention.
pub const ATTENTION_THRESHOLD: f64 = 50.0;

/// Color band a dimension or overall score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreColor {
    Green,
    Amber,
    Red,
    /// No answered questions and no override.
    NoData,
}

impl ScoreColor {
    pub fn classify(score: Option<f64>) -> Self {
        match score {
            None => ScoreColor::NoData,
            Some(s) if s.is_nan() => ScoreColor::NoData,
            Some(s) if s >= GREEN_THRESHOLD => ScoreColor::Green,
            Some(s) if s >= ATTENTION_THRESHOLD => ScoreColor::Amber,
            Some(_) => ScoreColor::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreColor::Green => "green",
            ScoreColor::Amber => "amber",
            ScoreColor::Red => "red",
            ScoreColor::NoData => "no data",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            ScoreColor::Green => "#28a745",
            ScoreColor::Amber => "#ffc107",
            ScoreColor::Red => "#dc3545",
            ScoreColor::NoData => "#e0e0e0",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ScoreColor::Green => "bg-status-green",
            ScoreColor::Amber => "bg-status-amber",
            ScoreColor::Red => "bg-status-red",
            ScoreColor::NoData => "bg-slate-300",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreAndColor {
    /// Percentage score. A no-data entry carries 0.
    pub score: f64,
    pub color: ScoreColor,
}

impl ScoreAndColor {
    pub fn from_score(score: Option<f64>) -> Self {
        let color = ScoreColor::classify(score);
        let score = match color {
            ScoreColor::NoData => 0.0,
            _ => score.unwrap_or_default(),
        };
        Self { score, color }
    }

    pub fn is_no_data(&self) -> bool {
        self.color == ScoreColor::NoData
    }
}

/// Direction of a department's overall score between its two latest periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    New,
}

impl Trend {
    /// Fixed sort order: improving < stable < new < declining.
    pub fn rank(self) -> u8 {
        match self {
            Trend::Improving => 0,
            Trend::Stable => 1,
            Trend::New => 2,
            Trend::Declining => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
            Trend::New => "new",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Change of a single dimension's score against the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Movement {
    Up,
    Down,
    Same,
}

/// One department's row in the management heatmap.
///
/// Rebuilt on every query; `scores` is keyed by dimension name so that
/// templates with differently numbered dimensions still line up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeatmapData {
    pub department_name: String,
    pub assessment_id: String,
    pub status: AssessmentStatus,
    pub scores: IndexMap<String, ScoreAndColor>,
    /// Overall score per period, oldest first.
    pub historical_overall_scores: Vec<f64>,
    pub overall_score: f64,
    pub trend: Trend,
}

impl HeatmapData {
    pub fn needs_attention(&self) -> bool {
        self.overall_score < ATTENTION_THRESHOLD
    }

    pub fn overall(&self) -> ScoreAndColor {
        ScoreAndColor::from_score(Some(self.overall_score))
    }
}

/// Dimension names across `rows` in the order they are first seen, which
/// is template order for rows built from the same template.
pub fn dimension_names(rows: &[HeatmapData]) -> Vec<&str> {
    let mut names: IndexSet<&str> = IndexSet::new();
    for row in rows {
        names.extend(row.scores.keys().map(String::as_str));
    }
    names.into_iter().collect()
}
