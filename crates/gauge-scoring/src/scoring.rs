use std::collections::HashSet;

use gauge_core::models::assessment::Assessment;
use gauge_core::models::heatmap::ScoreAndColor;
use gauge_core::models::response::{DimensionScore, SubQuestionResponse};
use gauge_core::models::template::AssessmentTemplate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::ScoringError;

/// Percentage score for one dimension, or `None` when nothing is answered.
///
/// A manual override wins outright; otherwise see [`response_score`].
pub fn dimension_score(score: &DimensionScore) -> Option<f64> {
    if let Some(overridden) = score.overridden_score {
        return Some(overridden);
    }
    response_score(&score.responses)
}

/// Mean points of the answered questions as a percentage, ignoring any
/// override. Unanswered questions count toward neither the numerator nor
/// the denominator.
pub fn response_score(responses: &[SubQuestionResponse]) -> Option<f64> {
    let (total_points, answered) = responses
        .iter()
        .filter(|r| r.response.is_answered())
        .fold((0.0, 0usize), |(sum, count), r| {
            (sum + r.response.points(), count + 1)
        });

    if answered == 0 {
        return None;
    }

    let max_points = answered as f64 * 100.0;
    Some(total_points / max_points * 100.0)
}

/// Unweighted mean of the dimensions that have a score; 0 when none do.
pub fn overall_score(scores: &[DimensionScore]) -> f64 {
    let valid: Vec<f64> = scores
        .iter()
        .filter_map(dimension_score)
        .filter(|s| !s.is_nan())
        .collect();

    if valid.is_empty() {
        return 0.0;
    }
    valid.iter().sum::<f64>() / valid.len() as f64
}

/// Scores keyed by dimension name for every dimension of `template`, in
/// template order.
///
/// A dimension with no score record in the assessment is reported as no-data.
pub fn dimension_scores(
    assessment: &Assessment,
    template: &AssessmentTemplate,
) -> IndexMap<String, ScoreAndColor> {
    template
        .dimensions
        .iter()
        .map(|dim| {
            let value = assessment.score_for(dim.id).and_then(dimension_score);
            (dim.name.clone(), ScoreAndColor::from_score(value))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ViolationKind {
    UnknownDimension,
    DuplicateDimension,
    UnknownSubQuestion,
    DuplicateResponse,
    MissingResponse,
    OverrideOutOfRange,
}

/// An assessment whose score records disagree with its template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub assessment_id: String,
    pub dimension_id: u32,
    pub sub_question_id: Option<u32>,
    pub kind: ViolationKind,
    pub message: String,
}

/// Check every score record of `assessment` against `template`.
///
/// A template dimension without a score record is not a violation; it is
/// scored as no-data.
pub fn validate_assessment(
    assessment: &Assessment,
    template: &AssessmentTemplate,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen_dimensions = HashSet::new();

    let mut push = |dimension_id: u32, sub_question_id: Option<u32>, kind, message: String| {
        errors.push(ValidationError {
            assessment_id: assessment.id.clone(),
            dimension_id,
            sub_question_id,
            kind,
            message: format!("{} ({}): {message}", assessment.department_name, assessment.period),
        });
    };

    for record in &assessment.scores {
        let Some(dimension) = template.dimension(record.dimension_id) else {
            push(
                record.dimension_id,
                None,
                ViolationKind::UnknownDimension,
                format!(
                    "dimension {} is not part of template '{}'",
                    record.dimension_id, template.id
                ),
            );
            continue;
        };

        if !seen_dimensions.insert(record.dimension_id) {
            push(
                record.dimension_id,
                None,
                ViolationKind::DuplicateDimension,
                format!("dimension '{}' has more than one score record", dimension.name),
            );
            continue;
        }

        if let Some(value) = record.overridden_score
            && !(0.0..=100.0).contains(&value)
        {
            push(
                record.dimension_id,
                None,
                ViolationKind::OverrideOutOfRange,
                format!(
                    "override {value} for '{}' is outside [0, 100]",
                    dimension.name
                ),
            );
        }

        let mut answered = HashSet::new();
        for response in &record.responses {
            if dimension.sub_question(response.sub_question_id).is_none() {
                push(
                    record.dimension_id,
                    Some(response.sub_question_id),
                    ViolationKind::UnknownSubQuestion,
                    format!(
                        "sub-question {} is not part of '{}'",
                        response.sub_question_id, dimension.name
                    ),
                );
            } else if !answered.insert(response.sub_question_id) {
                push(
                    record.dimension_id,
                    Some(response.sub_question_id),
                    ViolationKind::DuplicateResponse,
                    format!(
                        "sub-question {} of '{}' has more than one response",
                        response.sub_question_id, dimension.name
                    ),
                );
            }
        }

        for sub_question in &dimension.sub_questions {
            if !answered.contains(&sub_question.id) {
                push(
                    record.dimension_id,
                    Some(sub_question.id),
                    ViolationKind::MissingResponse,
                    format!(
                        "sub-question {} of '{}' has no response record",
                        sub_question.id, dimension.name
                    ),
                );
            }
        }
    }

    errors
}

/// Fail on the first assessment that references an unknown template or
/// disagrees with its template.
pub fn validate_snapshot(
    assessments: &[Assessment],
    templates: &[AssessmentTemplate],
) -> Result<(), ScoringError> {
    for assessment in assessments {
        let template = templates
            .iter()
            .find(|t| t.id == assessment.template_id)
            .ok_or_else(|| ScoringError::UnknownTemplate {
                assessment_id: assessment.id.clone(),
                template_id: assessment.template_id.clone(),
            })?;

        let violations = validate_assessment(assessment, template);
        if let Some(first) = violations.into_iter().next() {
            return Err(first.into());
        }
    }
    Ok(())
}
