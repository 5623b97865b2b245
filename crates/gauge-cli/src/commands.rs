use std::io::Write;
use std::path::Path;

use eyre::{Result, WrapErr};
use gauge_core::models::heatmap::{dimension_names, HeatmapData, Movement};
use gauge_core::models::snapshot::Snapshot;
use gauge_export::{csv, render};
use gauge_scoring::comparison::department_comparison;
use gauge_scoring::dashboard::{DashboardQuery, SortDirection, SortSpec, StatusFilter};
use gauge_scoring::heatmap::PeriodFilter;
use gauge_scoring::period::{available_periods, department_history};
use gauge_scoring::scoring::{validate_assessment, validate_snapshot};
use gauge_scoring::stats::DepartmentStats;

use crate::cli::{
    CompareArgs, ConfigCommand, ExportArgs, ExportKind, HeatmapArgs, ReportArgs, SnapshotArgs,
};
use crate::config::{self, GaugeConfig};

/// Read a snapshot file. With `strict`, any assessment that does not match
/// its template is an error.
pub fn load_snapshot(path: &Path, strict: bool) -> Result<Snapshot> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read snapshot at {}", path.display()))?;
    let snapshot = Snapshot::from_json(&contents)
        .wrap_err_with(|| format!("failed to parse snapshot at {}", path.display()))?;

    if strict {
        validate_snapshot(&snapshot.assessments, &snapshot.templates)?;
    }

    tracing::debug!(
        assessments = snapshot.assessments.len(),
        templates = snapshot.templates.len(),
        "snapshot loaded"
    );
    Ok(snapshot)
}

fn period_filter(period: Option<&str>, config: &GaugeConfig) -> PeriodFilter {
    match period {
        Some(p) => PeriodFilter::from(p),
        None => config.period_filter(),
    }
}

fn sort_spec(key: Option<&str>, descending: bool, config: &GaugeConfig) -> SortSpec {
    match (key, descending) {
        (Some(key), true) => SortSpec::new(key, SortDirection::Descending),
        (Some(key), false) => SortSpec::new(key, SortDirection::Ascending),
        (None, true) => SortSpec {
            direction: SortDirection::Descending,
            ..config.default_sort.clone()
        },
        (None, false) => config.default_sort.clone(),
    }
}

pub fn heatmap(
    args: &HeatmapArgs,
    config: &GaugeConfig,
    strict: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let snapshot = load_snapshot(&args.source.snapshot, strict)?;
    let filter = period_filter(args.period.as_deref(), config);
    let query = DashboardQuery {
        search: args.search.clone(),
        status: args.status.parse::<StatusFilter>()?,
        sort: sort_spec(args.sort.as_deref(), args.descending, config),
    };

    let rows = gauge_scoring::dashboard_rows(&snapshot, &filter, &query);
    tracing::info!(period = filter.as_str(), rows = rows.len(), "heatmap built");

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    write_table(&rows, config.highlight_attention, out)
}

fn write_table(rows: &[HeatmapData], highlight: bool, out: &mut dyn Write) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "No assessments match.")?;
        return Ok(());
    }

    let dimensions = dimension_names(rows);
    let name_width = rows
        .iter()
        .map(|r| r.department_name.len())
        .max()
        .unwrap_or(0)
        .max("Department".len());

    write!(
        out,
        "  {:<name_width$}  {:<9}  {:>7}  {:<9}",
        "Department", "Status", "Overall", "Trend"
    )?;
    for dimension in &dimensions {
        write!(out, "  {dimension}")?;
    }
    writeln!(out)?;

    for row in rows {
        let marker = if highlight && row.needs_attention() { "!" } else { " " };
        write!(
            out,
            "{marker} {:<name_width$}  {:<9}  {:>7.1}  {:<9}",
            row.department_name,
            row.status.as_str(),
            row.overall_score,
            row.trend.as_str()
        )?;
        for dimension in &dimensions {
            let cell = match row.scores.get(*dimension) {
                Some(entry) if !entry.is_no_data() => format!("{:.1}", entry.score),
                _ => "N/A".to_string(),
            };
            write!(out, "  {cell:>width$}", width = dimension.len())?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn export(args: &ExportArgs, config: &GaugeConfig, strict: bool) -> Result<()> {
    let snapshot = load_snapshot(&args.source.snapshot, strict)?;

    let contents = match args.kind {
        ExportKind::Responses => {
            if snapshot.assessments.is_empty() {
                tracing::warn!("snapshot has no assessments, nothing to export");
                return Ok(());
            }
            csv::snapshot_responses_csv(&snapshot)
        }
        ExportKind::Heatmap => {
            let filter = period_filter(args.period.as_deref(), config);
            let query = DashboardQuery {
                sort: config.default_sort.clone(),
                ..DashboardQuery::default()
            };
            let rows = gauge_scoring::dashboard_rows(&snapshot, &filter, &query);
            csv::heatmap_csv(&rows)
        }
    };

    std::fs::write(&args.out, contents)
        .wrap_err_with(|| format!("failed to write {}", args.out.display()))?;
    tracing::info!(path = %args.out.display(), kind = ?args.kind, "export written");
    Ok(())
}

pub fn report(
    args: &ReportArgs,
    config: &GaugeConfig,
    strict: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let snapshot = load_snapshot(&args.source.snapshot, strict)?;
    let filter = period_filter(args.period.as_deref(), config);
    let query = DashboardQuery {
        sort: config.default_sort.clone(),
        ..DashboardQuery::default()
    };
    let rows = gauge_scoring::dashboard_rows(&snapshot, &filter, &query);

    let template = match &args.template {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read template at {}", path.display()))?,
        ),
        None => None,
    };
    let rendered = render::render_report(filter.as_str(), &rows, template.as_deref())?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, rendered)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => out.write_all(rendered.as_bytes())?,
    }
    Ok(())
}

pub fn periods(args: &SnapshotArgs, strict: bool, out: &mut dyn Write) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot, strict)?;
    for period in available_periods(&snapshot.assessments) {
        writeln!(out, "{period}")?;
    }
    Ok(())
}

pub fn compare(args: &CompareArgs, strict: bool, out: &mut dyn Write) -> Result<()> {
    let snapshot = load_snapshot(&args.source.snapshot, strict)?;
    let comparison =
        department_comparison(&snapshot.assessments, &snapshot.templates, &args.department);
    if comparison.is_empty() {
        return Err(eyre::eyre!(
            "no scored assessments for department '{}'",
            args.department
        ));
    }

    for dimension in &comparison {
        writeln!(out, "{}", dimension.dimension_name)?;
        for cell in &dimension.cells {
            let score = match cell.score {
                Some(value) => format!("{value:.1}"),
                None => "N/A".to_string(),
            };
            let movement = match cell.movement {
                Some(Movement::Up) => " (up)",
                Some(Movement::Down) => " (down)",
                Some(Movement::Same) => " (same)",
                None => "",
            };
            writeln!(out, "  {:<10} {score:>6}{movement}", cell.period)?;
        }
    }

    let stats = DepartmentStats::from_history(department_history(
        &snapshot.assessments,
        &args.department,
    ));
    writeln!(out)?;
    writeln!(out, "Completed assessments: {}", stats.completed_count)?;
    if let Some(best) = stats.best_time {
        writeln!(out, "Best time: {best}s")?;
    }
    if let Some(average) = stats.average_time {
        writeln!(out, "Average time: {average:.0}s")?;
    }
    if let Some(rate) = stats.on_time_rate {
        writeln!(out, "On time: {rate:.0}%")?;
    }
    Ok(())
}

/// Report every contract violation in the snapshot. Fails if there are any.
pub fn validate(args: &SnapshotArgs, out: &mut dyn Write) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot, false)?;
    let mut violations = 0usize;

    for assessment in &snapshot.assessments {
        let Some(template) = snapshot.template(&assessment.template_id) else {
            writeln!(
                out,
                "{}: unknown template '{}'",
                assessment.id, assessment.template_id
            )?;
            violations += 1;
            continue;
        };
        for error in validate_assessment(assessment, template) {
            writeln!(out, "{}: {error}", assessment.id)?;
            violations += 1;
        }
    }

    if violations > 0 {
        return Err(eyre::eyre!("{violations} violation(s) found"));
    }
    writeln!(
        out,
        "{} assessments match their templates.",
        snapshot.assessments.len()
    )?;
    Ok(())
}

pub fn config_command(command: ConfigCommand, path: &Path, out: &mut dyn Write) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let loaded = config::load_config(path)?;
            writeln!(out, "# {}", path.display())?;
            serde_json::to_writer_pretty(&mut *out, &loaded)?;
            writeln!(out)?;
        }
        ConfigCommand::Init => {
            if path.exists() {
                tracing::info!(path = %path.display(), "config already exists");
                writeln!(out, "Config already exists at {}", path.display())?;
            } else {
                config::save_config(&GaugeConfig::default(), path)?;
                writeln!(out, "Wrote default config to {}", path.display())?;
            }
        }
    }
    Ok(())
}
