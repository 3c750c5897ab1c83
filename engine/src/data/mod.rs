// Parsing of pre-formatted dashboard figures
pub mod amount_parser;

pub use amount_parser::{parse_amount, parse_number, parse_percentage, AmountParseError, ParsedAmount};
