#![allow(dead_code)]

use gauge_core::models::assessment::{Assessment, AssessmentStatus};
use gauge_core::models::response::{DimensionScore, ResponseValue, SubQuestionResponse};
use gauge_core::models::template::{AssessmentTemplate, Dimension, SubQuestion};

pub use ResponseValue::{No, Unanswered, WorkInProgress as Wip, Yes};

pub fn ts(s: &str) -> jiff::Timestamp {
    s.parse().unwrap()
}

/// Template with `(id, name, question count)` dimensions.
pub fn template(id: &str, dimensions: &[(u32, &str, u32)]) -> AssessmentTemplate {
    AssessmentTemplate {
        id: id.to_string(),
        name: format!("Template {id}"),
        description: String::new(),
        dimensions: dimensions
            .iter()
            .map(|&(dim_id, name, questions)| Dimension {
                id: dim_id,
                name: name.to_string(),
                sub_questions: (1..=questions)
                    .map(|q| SubQuestion {
                        id: q,
                        text: format!("{name} question {q}"),
                    })
                    .collect(),
                retention_policy: None,
            })
            .collect(),
    }
}

pub fn dim_score(dimension_id: u32, values: &[ResponseValue]) -> DimensionScore {
    DimensionScore {
        dimension_id,
        responses: values
            .iter()
            .zip(1u32..)
            .map(|(&response, sub_question_id)| SubQuestionResponse {
                sub_question_id,
                response,
            })
            .collect(),
        comments: String::new(),
        overridden_score: None,
    }
}

pub fn overridden(dimension_id: u32, questions: usize, score: f64) -> DimensionScore {
    DimensionScore {
        overridden_score: Some(score),
        ..dim_score(dimension_id, &vec![Unanswered; questions])
    }
}

pub fn assessment(
    id: &str,
    department: &str,
    period: &str,
    template_id: &str,
    scores: Vec<DimensionScore>,
) -> Assessment {
    Assessment {
        id: id.to_string(),
        department_name: department.to_string(),
        period: period.to_string(),
        status: AssessmentStatus::Submitted,
        last_saved: ts("2024-06-01T12:00:00Z"),
        scores,
        template_id: template_id.to_string(),
        submission_notes: None,
        duration: None,
        due_date: None,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
