//! Built-in assessment template.

use std::sync::LazyLock;

use crate::models::template::{AssessmentTemplate, Dimension, SubQuestion};

pub const DEFAULT_TEMPLATE_ID: &str = "default-governance-v1";

/// The standard seven-dimension data governance questionnaire.
pub fn default_template() -> &'static AssessmentTemplate {
    static TEMPLATE: LazyLock<AssessmentTemplate> = LazyLock::new(|| {
        let dimensions = [
            (
                "Do We Know the Rules?",
                &[
                    "Have 80%+ of staff completed mandatory data governance training in the last 12 months?",
                    "Are relevant industry and sector data regulations documented and accessible to all staff?",
                    "Is there a Data Risk Register that is reviewed at least quarterly?",
                    "Are new staff onboarded with data governance training within their first month?",
                    "Do staff know who to contact for data governance questions?",
                ][..],
            ),
            (
                "What Data Do We Have?",
                &[
                    "Do you have an up-to-date inventory of all digital data records your department holds?",
                    "Do you have an up-to-date inventory of all physical data records your department holds?",
                    "Are retention schedules defined for all data types you hold?",
                    "Are archival schedules defined and followed for data no longer actively used?",
                    "Do you have secure deletion/destruction procedures for data you no longer need?",
                ][..],
            ),
            (
                "Where Is Our Data Sitting?",
                &[
                    "Have you listed all systems (cloud, on-premise, 3rd party) where your department's data resides?",
                    "Do you have data flow diagrams showing internal data movement within your department?",
                    "Do you have data flow diagrams showing external data flows (data leaving your department)?",
                    "Are external parties you share data with assessed for their data governance standards?",
                    "Do you know where backup copies of your data are stored?",
                ][..],
            ),
            (
                "Who Owns What Data?",
                &[
                    "Is there a named data owner/steward for each major data asset in your department?",
                    "Do data owners have documented responsibilities and authority?",
                    "Do data owners have the resources and training to fulfill their role?",
                    "Is data ownership information easily accessible to staff who need it?",
                    "Are data ownership assignments reviewed annually?",
                ][..],
            ),
            (
                "Who Can Access Our Data?",
                &[
                    "Are all data assets classified by sensitivity (e.g., Public, Internal, Confidential)?",
                    "Is access to sensitive data controlled by role-based permissions?",
                    "Are access permissions reviewed at least quarterly to remove inappropriate access?",
                    "Are all access requests formally logged and approved?",
                    "Is there segregation of duties for highly sensitive data (no single person has complete access)?",
                ][..],
            ),
            (
                "How Clean Is Our Data?",
                &[
                    "Are data quality standards defined for your department's key data assets?",
                    "Do you have processes to measure data quality (accuracy, completeness, consistency)?",
                    "Are data quality issues tracked and logged?",
                    "Are there defined processes for remediating data quality issues?",
                    "Is data quality reviewed regularly (at least quarterly)?",
                ][..],
            ),
            (
                "Are We Processing It Ethically?",
                &[
                    "Do you conduct Data Protection Impact Assessments (DPIAs) for new data processing activities?",
                    "Are privacy and ethical considerations reviewed for all new technology initiatives?",
                    "Do you apply Data Protection by Design principles in new systems/processes?",
                    "Do you have clear procedures for responding to data breaches or incidents?",
                    "Can data subjects (people whose data you hold) easily exercise their rights (access, correction, deletion)?",
                ][..],
            ),
        ];

        let dimensions = dimensions
            .iter()
            .zip(1u32..)
            .map(|((name, questions), id)| Dimension {
                id,
                name: name.to_string(),
                sub_questions: questions
                    .iter()
                    .zip(1u32..)
                    .map(|(text, sq_id)| SubQuestion {
                        id: sq_id,
                        text: text.to_string(),
                    })
                    .collect(),
                retention_policy: None,
            })
            .collect();

        AssessmentTemplate {
            id: DEFAULT_TEMPLATE_ID.to_string(),
            name: "Data Governance Maturity".to_string(),
            description: "Standard departmental self-assessment across seven governance dimensions"
                .to_string(),
            dimensions,
        }
    });
    &TEMPLATE
}
