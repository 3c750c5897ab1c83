// Valuation figures derived from raw dashboard strings
pub mod calculator;
pub mod pv_variation;

pub use calculator::{calculate_valorisation, try_calculate_valorisation, Valorisation};
pub use pv_variation::apply_pv_variation;
