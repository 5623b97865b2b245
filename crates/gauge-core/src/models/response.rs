use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A department head's answer to a single sub-question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ResponseValue {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "Work in Progress")]
    WorkInProgress,
    #[serde(rename = "No")]
    No,
    #[serde(rename = "Unanswered")]
    Unanswered,
}

impl ResponseValue {
    /// Points awarded for this answer, out of 100.
    ///
    /// `Unanswered` maps to 0 but is excluded from scoring entirely; callers
    /// should check [`ResponseValue::is_answered`] before summing.
    pub fn points(self) -> f64 {
        match self {
            ResponseValue::Yes => 100.0,
            ResponseValue::WorkInProgress => 50.0,
            ResponseValue::No | ResponseValue::Unanswered => 0.0,
        }
    }

    pub fn is_answered(self) -> bool {
        self != ResponseValue::Unanswered
    }

    /// Label as shown to users and written to exports.
    pub fn label(self) -> &'static str {
        match self {
            ResponseValue::Yes => "Yes",
            ResponseValue::WorkInProgress => "Work in Progress",
            ResponseValue::No => "No",
            ResponseValue::Unanswered => "Unanswered",
        }
    }
}

impl std::fmt::Display for ResponseValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubQuestionResponse {
    pub sub_question_id: u32,
    pub response: ResponseValue,
}

/// The response record for one dimension of an assessment.
///
/// `overridden_score` is the management override path: when present it
/// replaces whatever the responses would compute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DimensionScore {
    pub dimension_id: u32,
    pub responses: Vec<SubQuestionResponse>,
    #[serde(default)]
    pub comments: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub overridden_score: Option<f64>,
}

impl DimensionScore {
    pub fn answered_count(&self) -> usize {
        self.responses
            .iter()
            .filter(|r| r.response.is_answered())
            .count()
    }

    pub fn response_for(&self, sub_question_id: u32) -> Option<ResponseValue> {
        self.responses
            .iter()
            .find(|r| r.sub_question_id == sub_question_id)
            .map(|r| r.response)
    }
}
