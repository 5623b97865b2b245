use serde::Serialize;
use tera::{Context, Tera};

use gauge_core::models::heatmap::HeatmapData;
use gauge_scoring::trend::TrendSummary;

use crate::error::ExportError;

/// Markdown heatmap report bundled with the crate.
pub const DEFAULT_REPORT_TEMPLATE: &str = include_str!("../templates/report.md.tera");

const DEFAULT_TEMPLATE_NAME: &str = "report.md";

/// Render a Tera template with any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// fields of `context` become the template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateContext(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Context handed to report templates. Scores are pre-formatted to one
/// decimal place, `"N/A"` when a dimension has no data.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportContext<'a> {
    pub period: &'a str,
    pub departments: usize,
    pub attention: usize,
    pub summary: TrendSummary,
    pub rows: Vec<ReportRow<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow<'a> {
    pub department_name: &'a str,
    pub status: &'static str,
    pub overall_score: String,
    pub color: &'static str,
    pub trend: &'static str,
    pub needs_attention: bool,
    pub dimensions: Vec<ReportCell<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCell<'a> {
    pub name: &'a str,
    pub score: String,
    pub color: &'static str,
    /// For HTML templates.
    pub css_class: &'static str,
    pub hex: &'static str,
}

impl<'a> ReportContext<'a> {
    pub fn new(period: &'a str, rows: &'a [HeatmapData]) -> Self {
        Self {
            period,
            departments: rows.len(),
            attention: rows.iter().filter(|r| r.needs_attention()).count(),
            summary: TrendSummary::from_rows(rows),
            rows: rows.iter().map(ReportRow::from_row).collect(),
        }
    }
}

impl<'a> ReportRow<'a> {
    fn from_row(row: &'a HeatmapData) -> Self {
        Self {
            department_name: &row.department_name,
            status: row.status.as_str(),
            overall_score: format!("{:.1}", row.overall_score),
            color: row.overall().color.label(),
            trend: row.trend.as_str(),
            needs_attention: row.needs_attention(),
            dimensions: row
                .scores
                .iter()
                .map(|(name, entry)| ReportCell {
                    name,
                    score: if entry.is_no_data() {
                        "N/A".to_string()
                    } else {
                        format!("{:.1}", entry.score)
                    },
                    color: entry.color.label(),
                    css_class: entry.color.css_class(),
                    hex: entry.color.hex(),
                })
                .collect(),
        }
    }
}

/// Render a heatmap report for `period`. Uses the bundled Markdown template
/// unless `template_content` is given.
pub fn render_report(
    period: &str,
    rows: &[HeatmapData],
    template_content: Option<&str>,
) -> Result<String, ExportError> {
    let context = ReportContext::new(period, rows);
    tracing::debug!(
        period,
        departments = context.departments,
        custom_template = template_content.is_some(),
        "rendering heatmap report"
    );
    render_template(
        DEFAULT_TEMPLATE_NAME,
        template_content.unwrap_or(DEFAULT_REPORT_TEMPLATE),
        &context,
    )
}
