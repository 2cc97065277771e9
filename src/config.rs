use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.json";

/// Startup settings. Every field has a default, so a partial (or absent)
/// `dashboard.json` is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Launch table read once at startup.
    pub data_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Granularity of the payload range selector, in kg.
    pub payload_step: f64,
    /// Number of evenly spaced tick labels under the payload selector.
    pub slider_marks: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            window_title: "SpaceX Launch Records Dashboard".to_string(),
            window_size: [1200.0, 900.0],
            min_window_size: [700.0, 500.0],
            payload_step: 1000.0,
            slider_marks: 5,
        }
    }
}

impl DashboardConfig {
    /// Read `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("{} not found, using default settings", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        if config.payload_step <= 0.0 {
            anyhow::bail!("payload_step must be positive, got {}", config.payload_step);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.data_path, PathBuf::from("spacex_launch_dash.csv"));
        assert_eq!(cfg.payload_step, 1000.0);
        assert_eq!(cfg.slider_marks, 5);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = DashboardConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(cfg, DashboardConfig::default());
    }

    #[test]
    fn partial_file_overrides_selected_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "data_path": "launches.parquet", "slider_marks": 3 }}"#).unwrap();

        let cfg = DashboardConfig::load_or_default(file.path()).unwrap();
        assert_eq!(cfg.data_path, PathBuf::from("launches.parquet"));
        assert_eq!(cfg.slider_marks, 3);
        assert_eq!(cfg.payload_step, 1000.0);
    }

    #[test]
    fn invalid_files_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "port": 8050 }}"#).unwrap();
        assert!(DashboardConfig::load_or_default(file.path()).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "payload_step": 0 }}"#).unwrap();
        let err = DashboardConfig::load_or_default(file.path()).unwrap_err();
        assert!(err.to_string().contains("payload_step"));
    }
}
