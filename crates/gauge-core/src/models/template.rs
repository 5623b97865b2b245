use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::assessment::{Assessment, AssessmentStatus};
use super::response::{DimensionScore, ResponseValue, SubQuestionResponse};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubQuestion {
    pub id: u32,
    pub text: String,
}

/// A named category of governance maturity, made up of sub-questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Dimension {
    pub id: u32,
    pub name: String,
    pub sub_questions: Vec<SubQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub retention_policy: Option<String>,
}

impl Dimension {
    pub fn sub_question(&self, id: u32) -> Option<&SubQuestion> {
        self.sub_questions.iter().find(|sq| sq.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub dimensions: Vec<Dimension>,
}

impl AssessmentTemplate {
    pub fn dimension(&self, id: u32) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.id == id)
    }

    pub fn dimension_by_name(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    /// Total number of sub-questions across all dimensions.
    pub fn question_count(&self) -> usize {
        self.dimensions.iter().map(|d| d.sub_questions.len()).sum()
    }

    /// One all-unanswered score record per dimension, in template order.
    pub fn initial_scores(&self) -> Vec<DimensionScore> {
        self.dimensions
            .iter()
            .map(|dim| DimensionScore {
                dimension_id: dim.id,
                responses: dim
                    .sub_questions
                    .iter()
                    .map(|sq| SubQuestionResponse {
                        sub_question_id: sq.id,
                        response: ResponseValue::Unanswered,
                    })
                    .collect(),
                comments: String::new(),
                overridden_score: None,
            })
            .collect()
    }

    /// Start a fresh Draft assessment for `department_name` in `period`.
    pub fn new_draft(
        &self,
        department_name: impl Into<String>,
        period: impl Into<String>,
        now: jiff::Timestamp,
    ) -> Assessment {
        Assessment {
            id: format!("assessment-{}", Uuid::new_v4()),
            department_name: department_name.into(),
            period: period.into(),
            status: AssessmentStatus::Draft,
            last_saved: now,
            scores: self.initial_scores(),
            template_id: self.id.clone(),
            submission_notes: None,
            duration: None,
            due_date: None,
        }
    }
}
