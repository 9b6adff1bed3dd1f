// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Presentation settings.
//!
//! Settings are read once at startup from the YAML file named by
//! `CHOREO_CONFIG`. Every field is optional; anything left out keeps its
//! default. Nothing is ever written back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming an optional settings file.
pub const CONFIG_ENV_VAR: &str = "CHOREO_CONFIG";

/// Window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Choreography Planner".to_string(),
            width: 1280.0,
            height: 720.0,
            min_width: 800.0,
            min_height: 600.0,
        }
    }
}

/// Stage drawing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Marker radius in points.
    pub marker_radius: f32,
    /// Distance between background grid dots in points; 0 disables the grid.
    pub grid_spacing: f32,
    pub center_lines: bool,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            marker_radius: 24.0,
            grid_spacing: 30.0,
            center_lines: true,
        }
    }
}

/// All presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub window: WindowConfig,
    pub stage: StageConfig,
}

impl PlannerConfig {
    /// Parse settings from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Read settings from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&yaml).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load settings from `CHOREO_CONFIG`, or defaults if it is unset.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                let path = Path::new(&path);
                let config = Self::from_file(path)?;
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            None => {
                log::debug!("{} not set, using default config", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = PlannerConfig::from_yaml("{}").unwrap();
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = "window:\n  width: 1600\nstage:\n  center_lines: false\n";
        let config = PlannerConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.window.width, 1600.0);
        assert_eq!(config.window.height, 720.0);
        assert!(!config.stage.center_lines);
        assert_eq!(config.stage.marker_radius, 24.0);
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        assert!(PlannerConfig::from_yaml("window: [1, 2").is_err());
        assert!(PlannerConfig::from_yaml("stage:\n  marker_radius: big\n").is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = PlannerConfig::from_file(Path::new("/nonexistent/choreo.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
