// Parser for the pre-formatted figures shown on the dashboard:
// percentages ("34.43%", "12,5 %") and totals ("114.00 M€", "820 k€", "56.00 €").
//
// Grammar:
//   number     := ws* sign? (digit | ws)* with at most one '.' or ',' and at least one digit
//   percentage := number '%'?
//   amount     := number unit?        unit := "M€" | "k€" | "€"
//
// Whitespace inside a number is digit grouping and is dropped ("1 234,5" -> 1234.5).
use serde::Serialize;
use shared::utils::euro_format::AmountUnit;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("input is empty")]
    Empty,

    #[error("no digits found")]
    MissingDigits,

    #[error("more than one decimal separator")]
    MultipleDecimalSeparators,

    // `position` is a byte offset into the original input.
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("value is too large to represent")]
    NonFinite,
}

/// A parsed total: the number as written plus its optional magnitude suffix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedAmount {
    pub value: f64,
    pub unit: Option<AmountUnit>,
}

impl ParsedAmount {
    /// Value in plain euros. A missing suffix counts as "€".
    pub fn base_value(&self) -> f64 {
        self.value * self.unit.map_or(1.0, AmountUnit::multiplier)
    }
}

// Suffixes are checked longest first so "M€" is not read as "M" + "€".
const UNIT_SUFFIXES: [AmountUnit; 3] = [AmountUnit::MegaEuro, AmountUnit::KiloEuro, AmountUnit::Euro];

pub fn parse_number(input: &str) -> Result<f64, AmountParseError> {
    scan_number(input)
}

pub fn parse_percentage(input: &str) -> Result<f64, AmountParseError> {
    let body = input.trim_end();
    let body = body.strip_suffix('%').unwrap_or(body);
    scan_number(body)
}

pub fn parse_amount(input: &str) -> Result<ParsedAmount, AmountParseError> {
    let body = input.trim_end();
    let (number, unit) = UNIT_SUFFIXES
        .iter()
        .find_map(|unit| body.strip_suffix(unit.suffix()).map(|rest| (rest, Some(*unit))))
        .unwrap_or((body, None));

    let value = scan_number(number)?;
    Ok(ParsedAmount { value, unit })
}

// `text` is always a prefix of the caller's input, so offsets into it are input offsets.
fn scan_number(text: &str) -> Result<f64, AmountParseError> {
    let start = text.len() - text.trim_start().len();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let mut normalized = String::with_capacity(trimmed.len());
    let mut seen_digit = false;
    let mut seen_separator = false;

    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '0'..='9' => {
                seen_digit = true;
                normalized.push(ch);
            }
            '.' | ',' => {
                if seen_separator {
                    return Err(AmountParseError::MultipleDecimalSeparators);
                }
                seen_separator = true;
                normalized.push('.');
            }
            '-' if idx == 0 => normalized.push('-'),
            '+' if idx == 0 => {}
            c if c.is_whitespace() => {}
            _ => {
                return Err(AmountParseError::UnexpectedCharacter {
                    ch,
                    position: start + idx,
                })
            }
        }
    }

    if !seen_digit {
        return Err(AmountParseError::MissingDigits);
    }

    // The scan above only lets through strings f64::from_str accepts ("5.", ".5", "-0.5").
    let value: f64 = normalized.parse().map_err(|_| AmountParseError::MissingDigits)?;
    if !value.is_finite() {
        return Err(AmountParseError::NonFinite);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_dot_and_comma() {
        assert_eq!(parse_number("34.43").unwrap(), 34.43);
        assert_eq!(parse_number("34,43").unwrap(), 34.43);
        assert_eq!(parse_number("  7 ").unwrap(), 7.0);
    }

    #[test]
    fn test_parse_number_grouping_spaces_and_sign() {
        assert_eq!(parse_number("1 234,5").unwrap(), 1234.5);
        assert_eq!(parse_number("-12.5").unwrap(), -12.5);
        assert_eq!(parse_number("+3").unwrap(), 3.0);
        assert_eq!(parse_number(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_parse_number_errors() {
        assert_eq!(parse_number(""), Err(AmountParseError::Empty));
        assert_eq!(parse_number("   "), Err(AmountParseError::Empty));
        assert_eq!(parse_number("-"), Err(AmountParseError::MissingDigits));
        assert_eq!(parse_number(".,"), Err(AmountParseError::MultipleDecimalSeparators));
        assert_eq!(parse_number("1.234,56"), Err(AmountParseError::MultipleDecimalSeparators));
        assert_eq!(
            parse_number("abc"),
            Err(AmountParseError::UnexpectedCharacter { ch: 'a', position: 0 })
        );
        assert_eq!(
            parse_number("  12x"),
            Err(AmountParseError::UnexpectedCharacter { ch: 'x', position: 4 })
        );
        // A sign is only accepted in front.
        assert!(matches!(parse_number("12-"), Err(AmountParseError::UnexpectedCharacter { ch: '-', .. })));
    }

    #[test]
    fn test_parse_number_overflow_is_rejected() {
        let huge = "9".repeat(400);
        assert_eq!(parse_number(&huge), Err(AmountParseError::NonFinite));
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("34.43%").unwrap(), 34.43);
        assert_eq!(parse_percentage("12,5 %").unwrap(), 12.5);
        assert_eq!(parse_percentage("10").unwrap(), 10.0);
        assert_eq!(parse_percentage("%"), Err(AmountParseError::Empty));
        assert!(parse_percentage("10%%").is_err());
    }

    #[test]
    fn test_parse_amount_units() {
        let millions = parse_amount("114.00 M€").unwrap();
        assert_eq!(millions, ParsedAmount { value: 114.0, unit: Some(AmountUnit::MegaEuro) });
        assert_eq!(millions.base_value(), 114_000_000.0);

        let thousands = parse_amount("820 k€").unwrap();
        assert_eq!(thousands.unit, Some(AmountUnit::KiloEuro));
        assert_eq!(thousands.base_value(), 820_000.0);

        let euros = parse_amount("56.00 €").unwrap();
        assert_eq!(euros.unit, Some(AmountUnit::Euro));
        assert_eq!(euros.base_value(), 56.0);
    }

    #[test]
    fn test_parse_amount_without_unit_or_space() {
        let bare = parse_amount("1 250,75").unwrap();
        assert_eq!(bare.unit, None);
        assert_eq!(bare.base_value(), 1250.75);

        assert_eq!(parse_amount("3.5M€").unwrap().base_value(), 3_500_000.0);
    }

    #[test]
    fn test_parse_amount_errors() {
        assert!(matches!(parse_amount("garbage"), Err(AmountParseError::UnexpectedCharacter { ch: 'g', .. })));
        assert!(matches!(parse_amount("12 $"), Err(AmountParseError::UnexpectedCharacter { ch: '$', .. })));
        assert!(matches!(parse_amount("12 m€"), Err(AmountParseError::UnexpectedCharacter { ch: 'm', .. })));
        assert_eq!(parse_amount("€"), Err(AmountParseError::Empty));
        assert_eq!(parse_amount(""), Err(AmountParseError::Empty));
    }
}
