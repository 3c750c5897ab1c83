// Scenario state stores and persisted preferences
pub mod app_state;
pub mod competitor;
pub mod period;
pub mod preferences;
pub mod simulation;

pub use app_state::{DashboardState, Scenario};
