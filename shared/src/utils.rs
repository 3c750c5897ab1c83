// Utility functions shared across the engine and the dashboard.

// Euro amount formatting, e.g. 39_250_200.0 -> "39.25 M€".
pub mod euro_format {
    use serde::{Deserialize, Serialize};

    /// Rendered in place of a figure that could not be computed.
    pub const UNAVAILABLE: &str = "N/A";

    /// Magnitude suffix of an amount string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum AmountUnit {
        #[serde(rename = "€")]
        Euro,
        #[serde(rename = "k€")]
        KiloEuro,
        #[serde(rename = "M€")]
        MegaEuro,
    }

    impl AmountUnit {
        pub fn multiplier(self) -> f64 {
            match self {
                AmountUnit::Euro => 1.0,
                AmountUnit::KiloEuro => 1_000.0,
                AmountUnit::MegaEuro => 1_000_000.0,
            }
        }

        pub fn suffix(self) -> &'static str {
            match self {
                AmountUnit::Euro => "€",
                AmountUnit::KiloEuro => "k€",
                AmountUnit::MegaEuro => "M€",
            }
        }

        pub fn from_suffix(suffix: &str) -> Option<Self> {
            match suffix {
                "€" => Some(AmountUnit::Euro),
                "k€" => Some(AmountUnit::KiloEuro),
                "M€" => Some(AmountUnit::MegaEuro),
                _ => None,
            }
        }

        // Thresholds are inclusive: exactly 1 000 is shown as "1.00 k€".
        // Negative amounts pick their unit on the absolute value.
        pub fn for_magnitude(amount: f64) -> Self {
            let magnitude = amount.abs();
            if magnitude >= 1_000_000.0 {
                AmountUnit::MegaEuro
            } else if magnitude >= 1_000.0 {
                AmountUnit::KiloEuro
            } else {
                AmountUnit::Euro
            }
        }
    }

    /// Rounds to two decimals, ties away from zero (1.125 -> 1.13).
    ///
    /// `{:.2}` alone rounds exact binary ties to even and would print "1.12".
    pub fn round_to_cents(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    /// Formats an amount in euros with two decimals and a magnitude suffix.
    ///
    /// Negative amounts keep their sign ("-1.50 k€"). Non-finite input renders
    /// [`UNAVAILABLE`] instead of `NaN`/`inf` text.
    pub fn format_currency(amount: f64) -> String {
        if !amount.is_finite() {
            return UNAVAILABLE.to_string();
        }
        let unit = AmountUnit::for_magnitude(amount);
        let mut scaled = round_to_cents(amount / unit.multiplier());
        // Tiny negatives round to -0.0; print them as "0.00 €".
        if scaled == 0.0 {
            scaled = 0.0;
        }
        format!("{:.2} {}", scaled, unit.suffix())
    }

    /// Renders a calculator result, falling back to the unavailable indicator.
    pub fn display_or_unavailable(result: Option<String>) -> String {
        result.unwrap_or_else(|| UNAVAILABLE.to_string())
    }

}
