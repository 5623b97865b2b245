//! CSV exports.
//!
//! Output uses `\n` line endings with no trailing newline. Fields containing
//! a comma, a double quote or a newline are quoted, with inner quotes doubled.

use gauge_core::models::assessment::Assessment;
use gauge_core::models::heatmap::{dimension_names, HeatmapData};
use gauge_core::models::snapshot::Snapshot;
use gauge_core::models::template::AssessmentTemplate;
use gauge_scoring::scoring::response_score;

pub const RESPONSE_HEADERS: [&str; 9] = [
    "Department Name",
    "Assessment Period",
    "Assessment Status",
    "Template Name",
    "Dimension Name",
    "Dimension Score (%)",
    "Sub-Question Text",
    "Response",
    "Dimension Comments",
];

const NOT_AVAILABLE: &str = "N/A";

/// One row per recorded response whose dimension and sub-question resolve in
/// the assessment's template. Records that do not resolve are skipped.
///
/// The dimension score column is computed from the responses alone; manual
/// overrides are not reflected.
pub fn responses_csv(entries: &[(&Assessment, &AssessmentTemplate)]) -> String {
    let mut lines = vec![row_line(&RESPONSE_HEADERS)];

    for (assessment, template) in entries {
        for record in &assessment.scores {
            let Some(dimension) = template.dimension(record.dimension_id) else {
                continue;
            };
            let score = format_score(response_score(&record.responses));

            for response in &record.responses {
                let Some(question) = dimension.sub_question(response.sub_question_id) else {
                    continue;
                };
                lines.push(row_line(&[
                    &assessment.department_name,
                    &assessment.period,
                    assessment.status.as_str(),
                    &template.name,
                    &dimension.name,
                    &score,
                    &question.text,
                    response.response.label(),
                    &record.comments,
                ]));
            }
        }
    }

    lines.join("\n")
}

/// [`responses_csv`] over every assessment in `snapshot` whose template is
/// present. Assessments referencing an unknown template are left out.
pub fn snapshot_responses_csv(snapshot: &Snapshot) -> String {
    let entries: Vec<(&Assessment, &AssessmentTemplate)> = snapshot
        .assessments
        .iter()
        .filter_map(|assessment| match snapshot.template(&assessment.template_id) {
            Some(template) => Some((assessment, template)),
            None => {
                tracing::warn!(
                    assessment_id = %assessment.id,
                    template_id = %assessment.template_id,
                    "skipping assessment with unknown template in export"
                );
                None
            }
        })
        .collect();

    tracing::debug!(assessments = entries.len(), "exporting responses");
    responses_csv(&entries)
}

/// Heatmap rows as displayed: department, status, overall score, trend,
/// then one column per dimension name seen in any row, in template order.
pub fn heatmap_csv(rows: &[HeatmapData]) -> String {
    let dimensions = dimension_names(rows);

    let mut header = vec!["Department Name", "Status", "Overall Score (%)", "Trend"];
    header.extend(dimensions.iter().copied());
    let mut lines = vec![row_line(&header)];

    for row in rows {
        let mut fields = vec![
            row.department_name.clone(),
            row.status.to_string(),
            format!("{:.1}", row.overall_score),
            row.trend.to_string(),
        ];
        fields.extend(dimensions.iter().map(|name| {
            let score = row
                .scores
                .get(*name)
                .filter(|entry| !entry.is_no_data())
                .map(|entry| entry.score);
            format_score(score)
        }));
        let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
        lines.push(row_line(&fields));
    }

    lines.join("\n")
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) => format!("{value:.1}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn row_line(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| escape_csv(field))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        let escaped = value.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}
