use thiserror::Error;

use crate::data::amount_parser::AmountParseError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid percentage '{input}': {source}")]
    InvalidPercentage {
        input: String,
        #[source]
        source: AmountParseError,
    },

    #[error("Invalid total amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        #[source]
        source: AmountParseError,
    },

    // Only reachable when a finite percentage times a finite total overflows.
    #[error("Valuation result is not a finite number")]
    NonFiniteResult,
}

impl EngineError {
    pub fn percentage(input: &str, source: AmountParseError) -> Self {
        EngineError::InvalidPercentage { input: input.to_string(), source }
    }

    pub fn amount(input: &str, source: AmountParseError) -> Self {
        EngineError::InvalidAmount { input: input.to_string(), source }
    }
}
