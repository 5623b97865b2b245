use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown status filter: {0}")]
    UnknownStatusFilter(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("assessment '{assessment_id}' references unknown template '{template_id}'")]
    UnknownTemplate {
        assessment_id: String,
        template_id: String,
    },
}
