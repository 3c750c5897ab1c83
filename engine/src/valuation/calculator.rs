// Valorisation: a percentage applied to a purchase-price (PA) total.
use serde::Serialize;
use shared::utils::euro_format::format_currency;

use crate::data::amount_parser::{parse_amount, parse_percentage};
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Valorisation {
    /// Amount in plain euros, unrounded.
    pub amount: f64,
}

impl Valorisation {
    pub fn formatted(&self) -> String {
        format_currency(self.amount)
    }
}

/// Typed variant of [`calculate_valorisation`] that reports why an input was rejected.
pub fn try_calculate_valorisation(percentage: &str, total_pa: &str) -> Result<Valorisation, EngineError> {
    let percent = parse_percentage(percentage).map_err(|e| EngineError::percentage(percentage, e))?;
    let total = parse_amount(total_pa).map_err(|e| EngineError::amount(total_pa, e))?;

    let amount = (percent / 100.0) * total.base_value();
    if !amount.is_finite() {
        return Err(EngineError::NonFiniteResult);
    }
    Ok(Valorisation { amount })
}

/// Applies `percentage` ("34.43%") to `total_pa` ("114.00 M€") and formats the result.
///
/// Returns `None` for any malformed input; callers render that as unavailable.
pub fn calculate_valorisation(percentage: &str, total_pa: &str) -> Option<String> {
    match try_calculate_valorisation(percentage, total_pa) {
        Ok(valorisation) => Some(valorisation.formatted()),
        Err(e) => {
            tracing::debug!(percentage, total_pa, error = %e, "Valorisation unavailable");
            None
        }
    }
}
