//! Client-side state layer of the market-valuation dashboard.
//!
//! A [`DashboardState`] owns the reporting period, the selected competitor and the
//! simulation overlay mode, and hands out persisted preference toggles. Rendering is
//! left to the host application, which is also expected to install a tracing
//! subscriber (`tracing_subscriber::fmt::init()`) to see storage diagnostics.

pub mod config;
pub mod services;
pub mod state;

pub use config::DashboardConfig;
pub use state::{DashboardState, Scenario};
