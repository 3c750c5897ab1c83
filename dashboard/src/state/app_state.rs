// Scenario state owned by one dashboard instance.
// Collaborators hold a DashboardState (or a reference to it) instead of reaching for
// globals, so every test and every view gets its own isolated copy.

use std::rc::Rc;

use serde::Serialize;
use shared::models::{Competitor, PeriodState};
use shared::utils::euro_format::display_or_unavailable;

use super::competitor::CompetitorStore;
use super::period::PeriodStore;
use super::preferences::{period_mode_key, volume_unit_key, PeriodModePreference, VolumeUnitPreference};
use super::simulation::SimulationStore;
use crate::config::{DashboardConfig, PreferenceSettings};
use crate::services::storage::{JsonFileStorage, MemoryStorage, PreferenceStorage};

/// Read-only snapshot of the current scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    pub period: PeriodState,
    pub competitor: Competitor,
    pub simulation_active: bool,
}

#[derive(Debug)]
pub struct DashboardState {
    pub period: PeriodStore,
    pub competitor: CompetitorStore,
    pub simulation: SimulationStore,
    preferences: PreferenceSettings,
    storage: Rc<dyn PreferenceStorage>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(&DashboardConfig::default(), Rc::new(MemoryStorage::new()))
    }
}

impl DashboardState {
    pub fn new(config: &DashboardConfig, storage: Rc<dyn PreferenceStorage>) -> Self {
        Self {
            period: PeriodStore::new(config.period),
            competitor: CompetitorStore::new(config.competitor),
            simulation: SimulationStore::new(config.simulation.overlay_gap),
            preferences: config.preferences.clone(),
            storage,
        }
    }

    /// Preferences are kept in the JSON file named by the configuration.
    pub fn with_file_storage(config: &DashboardConfig) -> Self {
        let storage = JsonFileStorage::new(config.preferences.storage_path.clone());
        Self::new(config, Rc::new(storage))
    }

    pub fn scenario(&self) -> Scenario {
        Scenario {
            period: self.period.period(),
            competitor: self.competitor.competitor(),
            simulation_active: self.simulation.is_simulation_active(),
        }
    }

    /// Valorisation ready for display: "N/A" when the inputs cannot be parsed.
    pub fn valorisation(&self, percentage: &str, total_pa: &str) -> String {
        display_or_unavailable(engine::calculate_valorisation(percentage, total_pa))
    }

    /// Applies the selected competitor's variation to a formatted price.
    pub fn price_for_competitor(&self, raw: &str) -> String {
        engine::apply_pv_variation(raw, self.competitor.competitor())
    }

    /// Period aggregation mode for one view, e.g. `scope = "overview"`.
    pub fn period_mode_preference(&self, scope: &str) -> PeriodModePreference {
        PeriodModePreference::restore(
            period_mode_key(scope),
            self.preferences.period_mode_default,
            self.storage.clone(),
        )
    }

    pub fn volume_unit_preference(&self, scope: &str) -> VolumeUnitPreference {
        VolumeUnitPreference::restore(
            volume_unit_key(scope),
            self.preferences.volume_unit_default,
            self.storage.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{MonthYear, OverlayPosition, PeriodMode, PeriodUpdate, VolumeUnit};
    use tempfile::tempdir;

    #[test]
    fn test_default_state_from_config() {
        let state = DashboardState::default();
        let scenario = state.scenario();
        assert_eq!(scenario.period, DashboardConfig::default().period);
        assert_eq!(scenario.competitor, Competitor::Leclerc);
        assert!(!scenario.simulation_active);
    }

    #[test]
    fn test_scenario_reflects_store_mutations() {
        let mut state = DashboardState::default();
        state.period.set_period(PeriodUpdate::starting(MonthYear::new(6, 2024)));
        state.competitor.set_pv_concurrent(Competitor::SuperU);
        state.simulation.open_window(Some(OverlayPosition::new(5.0, 5.0)));

        let scenario = state.scenario();
        assert_eq!(scenario.period.from, MonthYear::new(6, 2024));
        assert_eq!(scenario.competitor, Competitor::SuperU);
        assert!(scenario.simulation_active);
    }

    #[test]
    fn test_states_are_isolated() {
        let mut first = DashboardState::default();
        let second = DashboardState::default();
        first.competitor.set_pv_concurrent(Competitor::Intermarche);
        assert_eq!(second.competitor.competitor(), Competitor::Leclerc);
    }

    #[test]
    fn test_valorisation_and_price_display() {
        let mut state = DashboardState::default();
        assert_eq!(state.valorisation("34.43%", "114.00 M€"), "39.25 M€");
        assert_eq!(state.valorisation("abc", "114.00 M€"), "N/A");

        assert_eq!(state.price_for_competitor("8.63€"), "8.63€");
        state.competitor.set_pv_concurrent(Competitor::SuperU);
        assert_eq!(state.price_for_competitor("8.63€"), "9.06€");
    }

    #[test]
    fn test_preferences_use_configured_defaults_and_shared_storage() {
        let mut config = DashboardConfig::default();
        config.preferences.period_mode_default = PeriodMode::Cam;
        let state = DashboardState::new(&config, Rc::new(MemoryStorage::new()));

        let mut mode = state.period_mode_preference("overview");
        assert_eq!(mode.value(), PeriodMode::Cam);
        mode.toggle().unwrap();
        assert_eq!(state.period_mode_preference("overview").value(), PeriodMode::Cad);

        assert_eq!(state.volume_unit_preference("overview").value(), VolumeUnit::Uvc);
    }

    #[test]
    fn test_with_file_storage_persists_across_states() {
        let dir = tempdir().unwrap();
        let mut config = DashboardConfig::default();
        config.preferences.storage_path = dir.path().join("prefs.json");

        let state = DashboardState::with_file_storage(&config);
        state.volume_unit_preference("sales").toggle().unwrap();

        let reopened = DashboardState::with_file_storage(&config);
        assert_eq!(reopened.volume_unit_preference("sales").value(), VolumeUnit::Tonne);
    }
}
