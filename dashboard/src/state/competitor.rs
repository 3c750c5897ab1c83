// Competitor whose reference prices (PV) drive the simulated comparison.
use shared::models::Competitor;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompetitorStore {
    selected: Competitor,
}

impl CompetitorStore {
    pub fn new(initial: Competitor) -> Self {
        Self { selected: initial }
    }

    pub fn competitor(&self) -> Competitor {
        self.selected
    }

    pub fn set_pv_concurrent(&mut self, competitor: Competitor) {
        self.selected = competitor;
    }
}
