// Competitor reference-price (PV) variation applied to an already formatted figure.
use shared::models::Competitor;
use shared::utils::euro_format::round_to_cents;

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}

// Byte range of the first run of digits, dots and commas.
fn first_numeric_run(value: &str) -> Option<(usize, usize)> {
    let start = value.find(is_numeric_char)?;
    let len = value[start..]
        .find(|c: char| !is_numeric_char(c))
        .unwrap_or(value.len() - start);
    Some((start, start + len))
}

/// Scales the first number in `value` by the competitor's factor and rounds it to two
/// decimals, leaving the surrounding text ("€", units) untouched.
///
/// Returns `value` unchanged when it holds no parsable number, e.g. "n/a" or
/// "1.234,56" (two separators), or one too large for an `f64`. A comma decimal separator is kept in the output.
pub fn apply_pv_variation(value: &str, competitor: Competitor) -> String {
    let Some((start, end)) = first_numeric_run(value) else {
        return value.to_string();
    };
    let token = &value[start..end];

    let parsed: f64 = match token.replace(',', ".").parse() {
        Ok(v) => v,
        Err(_) => {
            tracing::trace!(value, token, "No parsable number, PV variation skipped");
            return value.to_string();
        }
    };

    let adjusted = parsed * competitor.variation_factor();
    if !adjusted.is_finite() {
        tracing::trace!(value, token, "Number out of range, PV variation skipped");
        return value.to_string();
    }

    let mut replacement = format!("{:.2}", round_to_cents(adjusted));
    if token.contains(',') {
        replacement = replacement.replace('.', ",");
    }

    format!("{}{}{}", &value[..start], replacement, &value[end..])
}
