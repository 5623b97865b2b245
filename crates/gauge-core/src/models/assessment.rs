use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::response::{DimensionScore, ResponseValue};
use super::template::AssessmentTemplate;
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AssessmentStatus {
    Draft,
    Submitted,
    Locked,
}

impl AssessmentStatus {
    /// Fixed display order: Draft < Submitted < Locked.
    pub fn rank(self) -> u8 {
        match self {
            AssessmentStatus::Draft => 0,
            AssessmentStatus::Submitted => 1,
            AssessmentStatus::Locked => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssessmentStatus::Draft => "Draft",
            AssessmentStatus::Submitted => "Submitted",
            AssessmentStatus::Locked => "Locked",
        }
    }

    /// Submitted and Locked assessments count as completed.
    pub fn is_completed(self) -> bool {
        matches!(self, AssessmentStatus::Submitted | AssessmentStatus::Locked)
    }
}

impl std::fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One department's questionnaire for one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Assessment {
    pub id: String,
    pub department_name: String,
    /// Period label, e.g. "Q3 2025".
    pub period: String,
    pub status: AssessmentStatus,
    pub last_saved: jiff::Timestamp,
    pub scores: Vec<DimensionScore>,
    pub template_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub submission_notes: Option<String>,
    /// Time spent completing the assessment, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub due_date: Option<jiff::Timestamp>,
}

/// How many of a template's sub-questions have been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 / self.total as f64 * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }
}

impl Assessment {
    pub fn score_for(&self, dimension_id: u32) -> Option<&DimensionScore> {
        self.scores.iter().find(|s| s.dimension_id == dimension_id)
    }

    pub fn progress(&self, template: &AssessmentTemplate) -> Progress {
        Progress {
            answered: self.scores.iter().map(DimensionScore::answered_count).sum(),
            total: template.question_count(),
        }
    }

    /// Record a department head's answer. Only Draft assessments are editable.
    pub fn set_response(
        &mut self,
        dimension_id: u32,
        sub_question_id: u32,
        value: ResponseValue,
        now: jiff::Timestamp,
    ) -> Result<(), CoreError> {
        self.ensure_editable()?;
        let score = self
            .scores
            .iter_mut()
            .find(|s| s.dimension_id == dimension_id)
            .ok_or(CoreError::UnknownDimension(dimension_id))?;
        let response = score
            .responses
            .iter_mut()
            .find(|r| r.sub_question_id == sub_question_id)
            .ok_or(CoreError::UnknownSubQuestion {
                dimension_id,
                sub_question_id,
            })?;
        response.response = value;
        self.last_saved = now;
        Ok(())
    }

    pub fn set_comments(
        &mut self,
        dimension_id: u32,
        comments: impl Into<String>,
        now: jiff::Timestamp,
    ) -> Result<(), CoreError> {
        self.ensure_editable()?;
        let score = self
            .scores
            .iter_mut()
            .find(|s| s.dimension_id == dimension_id)
            .ok_or(CoreError::UnknownDimension(dimension_id))?;
        score.comments = comments.into();
        self.last_saved = now;
        Ok(())
    }

    /// Management override of a dimension's score. Permitted in any status;
    /// `None` removes the override.
    pub fn apply_override(
        &mut self,
        dimension_id: u32,
        score: Option<f64>,
    ) -> Result<(), CoreError> {
        if let Some(value) = score
            && !(0.0..=100.0).contains(&value)
        {
            return Err(CoreError::OverrideOutOfRange(value));
        }
        let record = self
            .scores
            .iter_mut()
            .find(|s| s.dimension_id == dimension_id)
            .ok_or(CoreError::UnknownDimension(dimension_id))?;
        record.overridden_score = score;
        Ok(())
    }

    /// Save work in progress. Clears any notes from an earlier submission.
    pub fn save_draft(&mut self, now: jiff::Timestamp) -> Result<(), CoreError> {
        self.ensure_editable()?;
        self.submission_notes = None;
        self.last_saved = now;
        Ok(())
    }

    /// Submit a Draft. An incomplete assessment needs a reason in `notes`.
    pub fn submit(
        &mut self,
        progress: Progress,
        notes: Option<String>,
        duration: Option<u64>,
        now: jiff::Timestamp,
    ) -> Result<(), CoreError> {
        if self.status != AssessmentStatus::Draft {
            return Err(CoreError::InvalidTransition {
                from: self.status,
                action: "submit",
            });
        }

        let notes = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if !progress.is_complete() && notes.is_none() {
            return Err(CoreError::MissingSubmissionNotes {
                answered: progress.answered,
                total: progress.total,
            });
        }

        self.submission_notes = notes.or(self.submission_notes.take());
        if duration.is_some() {
            self.duration = duration;
        }
        self.status = AssessmentStatus::Submitted;
        self.last_saved = now;
        Ok(())
    }

    pub fn lock(&mut self) -> Result<(), CoreError> {
        if self.status == AssessmentStatus::Locked {
            return Err(CoreError::InvalidTransition {
                from: self.status,
                action: "lock",
            });
        }
        self.status = AssessmentStatus::Locked;
        Ok(())
    }

    /// Return a Locked assessment to Draft so it can be edited again.
    pub fn unlock(&mut self) -> Result<(), CoreError> {
        if self.status != AssessmentStatus::Locked {
            return Err(CoreError::InvalidTransition {
                from: self.status,
                action: "unlock",
            });
        }
        self.status = AssessmentStatus::Draft;
        Ok(())
    }

    fn ensure_editable(&self) -> Result<(), CoreError> {
        if self.status != AssessmentStatus::Draft {
            return Err(CoreError::NotEditable {
                id: self.id.clone(),
                status: self.status,
            });
        }
        Ok(())
    }
}
