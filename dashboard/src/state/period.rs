// Reporting period selected on the dashboard.
use shared::models::{PeriodState, PeriodUpdate};

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodStore {
    state: PeriodState,
}

impl PeriodStore {
    pub fn new(initial: PeriodState) -> Self {
        Self { state: initial }
    }

    pub fn period(&self) -> PeriodState {
        self.state
    }

    /// Replaces `from` and/or `to`; omitted endpoints are kept.
    /// The store accepts a start after the end, it only notes it in the log.
    pub fn set_period(&mut self, update: PeriodUpdate) {
        if update.is_empty() {
            tracing::trace!("Empty period update ignored");
            return;
        }
        let next = self.state.apply(update);
        if !next.is_chronological() {
            tracing::debug!(from = %next.from, to = %next.to, "Period start is after its end");
        }
        self.state = next;
    }
}
