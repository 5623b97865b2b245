use thiserror::Error;

use crate::models::assessment::AssessmentStatus;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("cannot {action} an assessment in status {from}")]
    InvalidTransition {
        from: AssessmentStatus,
        action: &'static str,
    },

    #[error("assessment {id} is {status} and cannot be edited")]
    NotEditable { id: String, status: AssessmentStatus },

    #[error("incomplete submission ({answered} of {total} answered) requires notes")]
    MissingSubmissionNotes { answered: usize, total: usize },

    #[error("override score {0} is outside [0, 100]")]
    OverrideOutOfRange(f64),

    #[error("unknown dimension: {0}")]
    UnknownDimension(u32),

    #[error("unknown sub-question {sub_question_id} in dimension {dimension_id}")]
    UnknownSubQuestion {
        dimension_id: u32,
        sub_question_id: u32,
    },
}
