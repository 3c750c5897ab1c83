// Simulation overlay mode: inactive, or active with an optional anchor position.
use shared::models::{ElementBounds, OverlayPosition, SimulationState};

/// Horizontal gap in pixels between the triggering element and the overlay.
pub const DEFAULT_OVERLAY_GAP: f64 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationStore {
    state: SimulationState,
    overlay_gap: f64,
}

impl Default for SimulationStore {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_GAP)
    }
}

impl SimulationStore {
    pub fn new(overlay_gap: f64) -> Self {
        Self {
            state: SimulationState::Inactive,
            overlay_gap,
        }
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_simulation_active(&self) -> bool {
        self.state.is_active()
    }

    /// Always `None` while simulation mode is off.
    pub fn overlay_position(&self) -> Option<OverlayPosition> {
        self.state.position()
    }

    /// Enters simulation mode. Calling it again while active replaces the position.
    pub fn open_window(&mut self, position: Option<OverlayPosition>) {
        self.state = SimulationState::Active { position };
    }

    /// Enters simulation mode with the overlay anchored to the right of `bounds`.
    pub fn open_window_beside(&mut self, bounds: ElementBounds) {
        self.open_window(Some(OverlayPosition::beside(bounds, self.overlay_gap)));
    }

    /// Leaves simulation mode and drops the position. A no-op when already inactive.
    pub fn exit_simulation(&mut self) {
        self.state = SimulationState::Inactive;
    }
}
