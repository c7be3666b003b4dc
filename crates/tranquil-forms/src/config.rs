use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_SUBMISSION_DELAY_MS: u64 = 1500;
const DEFAULT_AUTO_CLOSE_MS: u64 = 3000;

/// Timing knobs for the modal forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormsConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Pause between accepting a submission and showing the success state.
    pub submission_delay_ms: u64,
    /// How long the success state stays up before the modal closes. Added in v1.
    pub auto_close_ms: u64,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            submission_delay_ms: DEFAULT_SUBMISSION_DELAY_MS,
            auto_close_ms: DEFAULT_AUTO_CLOSE_MS,
        }
    }
}

impl FormsConfig {
    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    pub fn auto_close(&self) -> Duration {
        Duration::from_millis(self.auto_close_ms)
    }
}

/// `<config dir>/tranquil/forms.json`.
pub fn config_path() -> Result<PathBuf, FormError> {
    let base = dirs::config_dir().ok_or(FormError::NoConfigDir)?;
    Ok(base.join("tranquil").join("forms.json"))
}

pub fn load_config(path: &Path) -> Result<FormsConfig, FormError> {
    let contents = std::fs::read_to_string(path)?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: FormsConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Load `path`, or fall back to defaults when no file exists yet.
pub fn load_or_default(path: &Path) -> Result<FormsConfig, FormError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no forms config, using defaults");
        return Ok(FormsConfig::default());
    }
    load_config(path)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, FormError> {
    if from_version > CURRENT_VERSION {
        return Err(FormError::UnsupportedConfigVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: add auto_close_ms; backfill submission_delay_ms
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(FormError::MalformedConfig)?;
        obj.entry("submission_delay_ms")
            .or_insert(serde_json::Value::Number(DEFAULT_SUBMISSION_DELAY_MS.into()));
        obj.entry("auto_close_ms")
            .or_insert(serde_json::Value::Number(DEFAULT_AUTO_CLOSE_MS.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated forms config v0 → v1 (added auto_close_ms, submission_delay_ms)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &FormsConfig) -> Result<(), FormError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "forms config saved");
    Ok(())
}
