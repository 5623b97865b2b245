//! Dimension-by-dimension comparison of a department's assessments over time.

use std::collections::HashMap;

use gauge_core::models::assessment::Assessment;
use gauge_core::models::heatmap::{Movement, ScoreColor};
use gauge_core::models::template::AssessmentTemplate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::period::department_history;
use crate::scoring::dimension_score;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonCell {
    pub period: String,
    pub score: Option<f64>,
    pub color: ScoreColor,
    /// Change from the previous period; absent for the first period or when
    /// either side has no data.
    pub movement: Option<Movement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DimensionComparison {
    pub dimension_name: String,
    pub cells: Vec<ComparisonCell>,
}

/// Compare each dimension of the newest template across `history`
/// (oldest first).
///
/// Dimensions are matched by name, so a dimension renumbered between
/// template versions still lines up with its earlier scores.
pub fn compare_dimensions(
    history: &[(&Assessment, &AssessmentTemplate)],
) -> Vec<DimensionComparison> {
    let Some((_, latest_template)) = history.last() else {
        return Vec::new();
    };

    latest_template
        .dimensions
        .iter()
        .map(|master| {
            let mut previous: Option<f64> = None;
            let cells = history
                .iter()
                .enumerate()
                .map(|(index, (assessment, template))| {
                    let score = template
                        .dimension_by_name(&master.name)
                        .and_then(|dim| assessment.score_for(dim.id))
                        .and_then(dimension_score);

                    let movement = match (index, previous, score) {
                        (0, _, _) => None,
                        (_, Some(before), Some(now)) if now > before => Some(Movement::Up),
                        (_, Some(before), Some(now)) if now < before => Some(Movement::Down),
                        (_, Some(_), Some(_)) => Some(Movement::Same),
                        _ => None,
                    };
                    previous = score;

                    ComparisonCell {
                        period: assessment.period.clone(),
                        score,
                        color: ScoreColor::classify(score),
                        movement,
                    }
                })
                .collect();

            DimensionComparison {
                dimension_name: master.name.clone(),
                cells,
            }
        })
        .collect()
}

/// Comparison over a department's full history. Assessments whose template
/// cannot be found are left out.
pub fn department_comparison(
    assessments: &[Assessment],
    templates: &[AssessmentTemplate],
    department_name: &str,
) -> Vec<DimensionComparison> {
    let templates_by_id: HashMap<&str, &AssessmentTemplate> =
        templates.iter().map(|t| (t.id.as_str(), t)).collect();

    let history: Vec<(&Assessment, &AssessmentTemplate)> =
        department_history(assessments, department_name)
            .into_iter()
            .filter_map(|a| {
                let template = templates_by_id.get(a.template_id.as_str()).copied();
                if template.is_none() {
                    tracing::warn!(
                        assessment_id = %a.id,
                        template_id = %a.template_id,
                        "template not found, assessment left out of comparison"
                    );
                }
                template.map(|t| (a, t))
            })
            .collect();

    compare_dimensions(&history)
}
