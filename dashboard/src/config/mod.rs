// Dashboard configuration, mirroring assets/config/default.json
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared::models::{Competitor, MonthYear, PeriodMode, PeriodState, VolumeUnit};

use crate::state::simulation::DEFAULT_OVERLAY_GAP;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub version: String,
    /// Reporting window selected when the dashboard starts.
    pub period: PeriodState,
    pub competitor: Competitor,
    pub simulation: SimulationSettings,
    pub preferences: PreferenceSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub overlay_gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSettings {
    pub storage_path: PathBuf,
    pub period_mode_default: PeriodMode,
    pub volume_unit_default: VolumeUnit,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            period: PeriodState::new(MonthYear::new(0, 2024), MonthYear::new(11, 2024)),
            competitor: Competitor::Leclerc,
            simulation: SimulationSettings {
                overlay_gap: DEFAULT_OVERLAY_GAP,
            },
            preferences: PreferenceSettings {
                storage_path: PathBuf::from("preferences.json"),
                period_mode_default: PeriodMode::Cad,
                volume_unit_default: VolumeUnit::Uvc,
            },
        }
    }
}

impl DashboardConfig {
    /// Loads the configuration embedded in the binary.
    pub fn load_default() -> anyhow::Result<Self> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        let config: DashboardConfig =
            serde_json::from_str(config_str).context("Embedded default configuration is invalid")?;
        tracing::info!(version = %config.version, "Loaded default dashboard configuration");
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file '{}'", path.display()))?;
        let config: DashboardConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file '{}'", path.display()))?;
        tracing::info!(version = %config.version, path = %path.display(), "Loaded dashboard configuration");
        Ok(config)
    }
}
