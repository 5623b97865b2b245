//! gauge-scoring
//!
//! The scoring and aggregation engine. Pure functions over a snapshot of
//! assessments and templates: dimension and overall scores, period ordering,
//! trend classification, the management heatmap and its sort/filter rules.

pub mod comparison;
pub mod dashboard;
pub mod error;
pub mod heatmap;
pub mod period;
pub mod scoring;
pub mod stats;
pub mod trend;

use gauge_core::models::heatmap::HeatmapData;
use gauge_core::models::snapshot::Snapshot;

use dashboard::DashboardQuery;
use heatmap::PeriodFilter;

/// Project the heatmap for `filter` and apply the dashboard query to it.
pub fn dashboard_rows(
    snapshot: &Snapshot,
    filter: &PeriodFilter,
    query: &DashboardQuery,
) -> Vec<HeatmapData> {
    let rows = heatmap::project_heatmap(&snapshot.assessments, &snapshot.templates, filter);
    dashboard::apply_query(rows, query)
}
