use std::path::{Path, PathBuf};

use gauge_scoring::dashboard::SortSpec;
use gauge_scoring::heatmap::PeriodFilter;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Period shown when none is given: "all" for each department's latest
    /// assessment, or a period label.
    #[serde(default = "default_period")]
    pub default_period: String,
    #[serde(default)]
    pub default_sort: SortSpec,
    /// Mark rows below the attention threshold in table output. Added in v2.
    #[serde(default = "default_true")]
    pub highlight_attention: bool,
    #[serde(default)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            default_period: default_period(),
            default_sort: SortSpec::default(),
            highlight_attention: true,
            log_format: LogFormat::default(),
        }
    }
}

impl GaugeConfig {
    pub fn period_filter(&self) -> PeriodFilter {
        PeriodFilter::from(self.default_period.as_str())
    }
}

fn default_period() -> String {
    PeriodFilter::ALL.to_string()
}

fn default_true() -> bool {
    true
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("gauge"))
}

/// `override_path` if given, otherwise `<config dir>/gauge/config.json`.
pub fn config_path(override_path: Option<&Path>) -> eyre::Result<PathBuf> {
    match override_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(config_dir()?.join("config.json")),
    }
}

/// Load the config at `path`, or defaults if there is no file yet.
pub fn load_config(path: &Path) -> eyre::Result<GaugeConfig> {
    if !path.exists() {
        return Ok(GaugeConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: GaugeConfig = serde_json::from_value(migrated)?;
    tracing::debug!(path = %path.display(), on_disk_version, "config loaded");
    Ok(config)
}

/// Read only `log_format` from the config at `path`, without migrating.
///
/// Tracing has to be installed before [`load_config`] runs so that its
/// migration logs are kept. A missing or unreadable file gives the default;
/// [`load_config`] reports the actual error afterwards.
pub fn peek_log_format(path: &Path) -> LogFormat {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|contents| serde_json::from_str::<serde_json::Value>(&contents).ok())
        .and_then(|mut json| json.get_mut("log_format").map(serde_json::Value::take))
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update gauge."
        ));
    }

    let obj = json
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

    // v0 → v1: `period` renamed to `default_period`; flat sort fields nested.
    if from_version < 1 {
        if let Some(period) = obj.remove("period") {
            obj.entry("default_period").or_insert(period);
        }
        let key = obj.remove("sort_key");
        let direction = match obj.remove("sort_descending").and_then(|v| v.as_bool()) {
            Some(true) => "descending",
            _ => "ascending",
        };
        if let Some(key) = key {
            obj.insert(
                "default_sort".to_string(),
                serde_json::json!({ "key": key, "direction": direction }),
            );
        }
        tracing::info!("migrated config v0 → v1 (default_period, default_sort)");
    }

    // v1 → v2: add highlight_attention
    if from_version < 2 {
        obj.entry("highlight_attention")
            .or_insert(serde_json::Value::Bool(true));
        tracing::info!("migrated config v1 → v2 (added highlight_attention)");
    }

    obj.insert(
        "config_version".to_string(),
        serde_json::Value::Number(CURRENT_VERSION.into()),
    );

    Ok(json)
}

pub fn save_config(config: &GaugeConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
