//! gauge-core
//!
//! Pure domain types for governance self-assessments: templates, responses,
//! assessments and the heatmap projection shapes. No I/O. This is the shared
//! vocabulary of the scoring engine, the exporters and the UI bindings.

pub mod error;
pub mod models;
pub mod templates;
