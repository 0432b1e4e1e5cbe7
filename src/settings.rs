//! Dashboard settings, loadable from a JSON file.

use crate::data::CleaningPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User settings for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub csv_path: PathBuf,
    pub policy: CleaningPolicy,
    /// Add the brand-scoped category chart to each view.
    pub brand_chart: bool,
    pub export_dir: PathBuf,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("CARS.csv"),
            policy: CleaningPolicy::default(),
            brand_chart: true,
            export_dir: PathBuf::from("."),
        }
    }
}

impl DashboardSettings {
    /// Read settings from JSON; absent keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.csv_path, PathBuf::from("CARS.csv"));
        assert_eq!(settings.policy, CleaningPolicy::DropIncomplete);
        assert!(settings.brand_chart);
        assert_eq!(settings.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "policy": "strict", "brand_chart": false }"#).unwrap();

        let settings = DashboardSettings::from_json_file(&path).unwrap();
        assert_eq!(settings.policy, CleaningPolicy::Strict);
        assert!(!settings.brand_chart);
        assert_eq!(settings.csv_path, PathBuf::from("CARS.csv"));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "policy": "lenient" }"#).unwrap();

        let result = DashboardSettings::from_json_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = DashboardSettings::from_json_file(Path::new("no_such_settings.json"));
        assert!(matches!(result, Err(SettingsError::Read { .. })));
    }
}
