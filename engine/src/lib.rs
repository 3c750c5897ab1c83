// Engine library root
// Pure calculation layer: parsing of pre-formatted figures, valorisation and
// competitor price variation. No state lives here; see the dashboard crate.

pub mod data;
pub mod error;
pub mod valuation;

pub use error::EngineError;
pub use valuation::{apply_pv_variation, calculate_valorisation, try_calculate_valorisation, Valorisation};

// The formatter lives in `shared` so the dashboard can use it without the engine.
pub use shared::utils::euro_format::format_currency;
