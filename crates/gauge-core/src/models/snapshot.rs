use serde::{Deserialize, Serialize};

use super::assessment::Assessment;
use super::template::AssessmentTemplate;
use crate::error::CoreError;

/// A consistent view of every assessment and template, as handed over by the
/// persistence layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub assessments: Vec<Assessment>,
    #[serde(default)]
    pub templates: Vec<AssessmentTemplate>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn template(&self, id: &str) -> Option<&AssessmentTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }
}
