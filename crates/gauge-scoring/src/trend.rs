use gauge_core::models::heatmap::{HeatmapData, Trend};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Classify a department's direction from its overall scores, oldest first.
///
/// Only the two most recent entries matter.
pub fn classify(history: &[f64]) -> Trend {
    let [.., previous, latest] = history else {
        return Trend::New;
    };

    if latest > previous {
        Trend::Improving
    } else if latest < previous {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Number of heatmap rows per trend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendSummary {
    pub improving: usize,
    pub declining: usize,
    pub stable: usize,
    pub new: usize,
}

impl TrendSummary {
    pub fn from_rows(rows: &[HeatmapData]) -> Self {
        rows.iter().fold(Self::default(), |mut summary, row| {
            match row.trend {
                Trend::Improving => summary.improving += 1,
                Trend::Declining => summary.declining += 1,
                Trend::Stable => summary.stable += 1,
                Trend::New => summary.new += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.improving + self.declining + self.stable + self.new
    }
}
