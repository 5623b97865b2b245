//! gauge-export
//!
//! CSV exports of assessment responses and heatmap rows, and text reports
//! rendered from Tera templates.

pub mod csv;
pub mod error;
pub mod render;
