//! Per-department heatmap rows for a reporting period.

use std::collections::{BTreeMap, HashMap};

use gauge_core::models::assessment::Assessment;
use gauge_core::models::heatmap::HeatmapData;
use gauge_core::models::template::AssessmentTemplate;
use indexmap::IndexMap;

use crate::period::sort_chronologically;
use crate::scoring::{dimension_scores, overall_score, validate_assessment};
use crate::trend::classify;

/// Which period the heatmap shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PeriodFilter {
    /// Each department's most recent assessment.
    #[default]
    Latest,
    /// Exactly this period label; departments without it are left out.
    Period(String),
}

impl PeriodFilter {
    pub const ALL: &'static str = "all";

    pub fn as_str(&self) -> &str {
        match self {
            PeriodFilter::Latest => Self::ALL,
            PeriodFilter::Period(p) => p,
        }
    }
}

impl From<&str> for PeriodFilter {
    fn from(value: &str) -> Self {
        if value == Self::ALL {
            PeriodFilter::Latest
        } else {
            PeriodFilter::Period(value.to_string())
        }
    }
}

/// Build one row per department that has an assessment for `filter`.
///
/// Rows come back ordered by department name. A department whose selected
/// assessment references a missing template still gets a row, with an empty
/// score map.
pub fn project_heatmap(
    assessments: &[Assessment],
    templates: &[AssessmentTemplate],
    filter: &PeriodFilter,
) -> Vec<HeatmapData> {
    let templates_by_id: HashMap<&str, &AssessmentTemplate> =
        templates.iter().map(|t| (t.id.as_str(), t)).collect();

    let mut departments: BTreeMap<&str, Vec<&Assessment>> = BTreeMap::new();
    for assessment in assessments {
        departments
            .entry(assessment.department_name.as_str())
            .or_default()
            .push(assessment);
    }

    let mut rows = Vec::with_capacity(departments.len());
    for (department_name, mut history) in departments {
        sort_chronologically(&mut history);

        let selected = match filter {
            PeriodFilter::Latest => history.last().copied(),
            PeriodFilter::Period(period) => history.iter().copied().find(|a| &a.period == period),
        };
        let Some(selected) = selected else {
            tracing::debug!(
                department = department_name,
                period = filter.as_str(),
                "no assessment for period, skipping department"
            );
            continue;
        };

        let scores = match templates_by_id.get(selected.template_id.as_str()) {
            Some(template) => {
                let violations = validate_assessment(selected, template);
                if !violations.is_empty() {
                    tracing::warn!(
                        assessment_id = %selected.id,
                        violations = violations.len(),
                        first = %violations[0],
                        "assessment does not match its template"
                    );
                }
                dimension_scores(selected, template)
            }
            None => {
                tracing::warn!(
                    assessment_id = %selected.id,
                    template_id = %selected.template_id,
                    "template not found, dimension scores unavailable"
                );
                IndexMap::new()
            }
        };

        let historical_overall_scores: Vec<f64> =
            history.iter().map(|a| overall_score(&a.scores)).collect();
        let trend = classify(&historical_overall_scores);

        rows.push(HeatmapData {
            department_name: department_name.to_string(),
            assessment_id: selected.id.clone(),
            status: selected.status,
            scores,
            overall_score: overall_score(&selected.scores),
            historical_overall_scores,
            trend,
        });
    }

    tracing::debug!(rows = rows.len(), period = filter.as_str(), "projected heatmap");
    rows
}
