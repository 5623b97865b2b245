//! Filtering and ordering of heatmap rows for the management dashboard.

use std::cmp::Ordering;
use std::str::FromStr;

use gauge_core::models::heatmap::HeatmapData;
use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Sort value used for a dimension with no data in a row.
const NO_DATA_RANK: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusFilter {
    #[default]
    All,
    Draft,
    Submitted,
    Locked,
    /// Overall score below the attention threshold, whatever the status.
    NeedsAttention,
}

impl StatusFilter {
    pub fn matches(self, row: &HeatmapData) -> bool {
        use gauge_core::models::assessment::AssessmentStatus as S;
        match self {
            StatusFilter::All => true,
            StatusFilter::Draft => row.status == S::Draft,
            StatusFilter::Submitted => row.status == S::Submitted,
            StatusFilter::Locked => row.status == S::Locked,
            StatusFilter::NeedsAttention => row.needs_attention(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "all" => Ok(StatusFilter::All),
            "draft" => Ok(StatusFilter::Draft),
            "submitted" => Ok(StatusFilter::Submitted),
            "locked" => Ok(StatusFilter::Locked),
            "needsattention" => Ok(StatusFilter::NeedsAttention),
            _ => Err(ScoringError::UnknownStatusFilter(s.to_string())),
        }
    }
}

/// Column to order dashboard rows by. Any name other than the fixed columns
/// is taken to be a dimension name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    DepartmentName,
    OverallScore,
    Status,
    Trend,
    Dimension(String),
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::DepartmentName => "departmentName",
            SortKey::OverallScore => "overallScore",
            SortKey::Status => "status",
            SortKey::Trend => "trend",
            SortKey::Dimension(name) => name.as_str(),
        }
    }

    fn compare(&self, a: &HeatmapData, b: &HeatmapData) -> Ordering {
        match self {
            SortKey::DepartmentName => a.department_name.cmp(&b.department_name),
            SortKey::OverallScore => a.overall_score.total_cmp(&b.overall_score),
            SortKey::Status => a.status.rank().cmp(&b.status.rank()),
            SortKey::Trend => a.trend.rank().cmp(&b.trend.rank()),
            SortKey::Dimension(name) => {
                dimension_rank(a, name).total_cmp(&dimension_rank(b, name))
            }
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value {
            "departmentName" => SortKey::DepartmentName,
            "overallScore" => SortKey::OverallScore,
            "status" => SortKey::Status,
            "trend" => SortKey::Trend,
            other => SortKey::Dimension(other.to_string()),
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::from(value.as_str())
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

fn dimension_rank(row: &HeatmapData, name: &str) -> f64 {
    match row.scores.get(name) {
        Some(entry) if !entry.is_no_data() => entry.score,
        _ => NO_DATA_RANK,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::DepartmentName,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortSpec {
    pub fn new(key: impl Into<SortKey>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// Sort order after a user clicks the `key` column header: the same key
    /// flips direction, a different key starts ascending.
    pub fn select(&self, key: impl Into<SortKey>) -> Self {
        let key = key.into();
        let direction = if key == self.key {
            self.direction.toggled()
        } else {
            SortDirection::Ascending
        };
        Self { key, direction }
    }

    fn compare(&self, a: &HeatmapData, b: &HeatmapData) -> Ordering {
        let ordering = self.key.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Everything the dashboard needs to turn projected rows into display rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub sort: SortSpec,
}

/// Rows matching both the status filter and the department search text.
pub fn filter_rows(rows: Vec<HeatmapData>, search: &str, status: StatusFilter) -> Vec<HeatmapData> {
    let needle = search.to_lowercase();
    rows.into_iter()
        .filter(|row| status.matches(row))
        .filter(|row| needle.is_empty() || row.department_name.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort: rows with equal keys keep their relative order in either
/// direction.
pub fn sort_rows(rows: &mut [HeatmapData], spec: &SortSpec) {
    rows.sort_by(|a, b| spec.compare(a, b));
}

pub fn apply_query(rows: Vec<HeatmapData>, query: &DashboardQuery) -> Vec<HeatmapData> {
    let mut rows = filter_rows(rows, &query.search, query.status);
    sort_rows(&mut rows, &query.sort);
    rows
}
