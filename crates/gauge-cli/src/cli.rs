use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "gauge",
    version,
    about = "Data-governance self-assessment scoring and heatmaps"
)]
pub struct Cli {
    /// Config file to use instead of the per-user default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject snapshots with assessments that do not match their template.
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the management heatmap for a period.
    Heatmap(HeatmapArgs),
    /// Write assessment responses or heatmap rows as CSV.
    Export(ExportArgs),
    /// Render a heatmap report through a Tera template.
    Report(ReportArgs),
    /// List the periods present in a snapshot, newest first.
    Periods(SnapshotArgs),
    /// Compare one department's dimension scores across its periods.
    Compare(CompareArgs),
    /// Check every assessment against its template.
    Validate(SnapshotArgs),
    /// Show or create the config file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// JSON file with `assessments` and `templates`.
    #[arg(long)]
    pub snapshot: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct HeatmapArgs {
    #[command(flatten)]
    pub source: SnapshotArgs,

    /// "all" for each department's latest assessment, or a period label
    /// such as "Q3 2024". Defaults to the configured period.
    #[arg(long)]
    pub period: Option<String>,

    #[arg(long, default_value = "")]
    pub search: String,

    /// all, draft, submitted, locked or needsAttention.
    #[arg(long, default_value = "all")]
    pub status: String,

    /// departmentName, overallScore, status, trend, or a dimension name.
    #[arg(long)]
    pub sort: Option<String>,

    #[arg(long, default_value_t = false)]
    pub descending: bool,

    /// Print rows as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: SnapshotArgs,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value_t = ExportKind::Responses)]
    pub kind: ExportKind,

    /// Period for heatmap exports; defaults to the configured period.
    #[arg(long)]
    pub period: Option<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ExportKind {
    Responses,
    Heatmap,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SnapshotArgs,

    #[arg(long)]
    pub period: Option<String>,

    /// Tera template to render instead of the bundled one.
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub source: SnapshotArgs,

    #[arg(long)]
    pub department: String,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommand {
    /// Print the effective config.
    Show,
    /// Write a default config file if none exists.
    Init,
}
