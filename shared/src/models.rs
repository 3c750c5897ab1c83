use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// --- Reporting period ---

/// A calendar month boundary. `month` is 0-based (0 = January, 11 = December).
///
/// The core never validates `month`; an out-of-range value is carried as-is and
/// only the chrono-backed helpers (`first_day`, `label`) notice it.
// Field order matters: the derived Ord compares `year` before `month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthYear {
    pub year: i32,
    pub month: u32,
}

impl MonthYear {
    pub fn new(month: u32, year: i32) -> Self {
        Self { year, month }
    }

    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// First calendar day of this month, or `None` when the month is out of range.
    pub fn first_day(&self) -> Option<NaiveDate> {
        let month1 = self.month.checked_add(1)?;
        NaiveDate::from_ymd_opt(self.year, month1, 1)
    }

    /// Short label such as "Jan 2024".
    pub fn label(&self) -> String {
        match self.first_day() {
            Some(day) => day.format("%b %Y").to_string(),
            None => format!("?? {}", self.year),
        }
    }

    // Months since year 0, used for span arithmetic.
    fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month)
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodState {
    pub from: MonthYear,
    pub to: MonthYear,
}

impl PeriodState {
    pub fn new(from: MonthYear, to: MonthYear) -> Self {
        Self { from, to }
    }

    /// Returns a copy with the supplied endpoints replaced. Omitted endpoints are kept.
    /// No ordering check is made: an update may leave `from` after `to`.
    pub fn apply(&self, update: PeriodUpdate) -> Self {
        Self {
            from: update.from.unwrap_or(self.from),
            to: update.to.unwrap_or(self.to),
        }
    }

    pub fn is_chronological(&self) -> bool {
        self.from <= self.to
    }

    /// Inclusive number of months covered. Zero or negative for an unordered period.
    pub fn month_span(&self) -> i64 {
        self.to.ordinal() - self.from.ordinal() + 1
    }
}

/// Partial update for a [`PeriodState`]; `None` keeps the current endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodUpdate {
    pub from: Option<MonthYear>,
    pub to: Option<MonthYear>,
}

impl PeriodUpdate {
    pub fn starting(from: MonthYear) -> Self {
        Self { from: Some(from), to: None }
    }

    pub fn ending(to: MonthYear) -> Self {
        Self { from: None, to: Some(to) }
    }

    pub fn between(from: MonthYear, to: MonthYear) -> Self {
        Self { from: Some(from), to: Some(to) }
    }

    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

// --- Competitor reference price (PV) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Competitor {
    #[default]
    #[serde(rename = "PV Leclerc")]
    Leclerc,
    #[serde(rename = "PV Super U")]
    SuperU,
    #[serde(rename = "PV Intermarché")]
    Intermarche,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown competitor: '{0}'")]
pub struct UnknownCompetitor(pub String);

impl Competitor {
    pub const ALL: [Competitor; 3] = [Competitor::Leclerc, Competitor::SuperU, Competitor::Intermarche];

    /// Display value used by the selector, e.g. "PV Super U".
    pub fn label(self) -> &'static str {
        match self {
            Competitor::Leclerc => "PV Leclerc",
            Competitor::SuperU => "PV Super U",
            Competitor::Intermarche => "PV Intermarché",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Competitor::Leclerc => "LEC",
            Competitor::SuperU => "SPU",
            Competitor::Intermarche => "ITM",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Competitor::Leclerc => "Leclerc",
            Competitor::SuperU => "Super U",
            Competitor::Intermarche => "Intermarché",
        }
    }

    /// Multiplicative factor applied to reference prices. Leclerc is the baseline.
    pub fn variation_factor(self) -> f64 {
        match self {
            Competitor::Leclerc => 1.00,
            Competitor::SuperU => 1.05,
            Competitor::Intermarche => 0.95,
        }
    }
}

impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Competitor {
    type Err = UnknownCompetitor;

    // Accepts the selector label ("PV Super U") or the bare name ("Super U").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Competitor::ALL
            .into_iter()
            .find(|c| c.label() == trimmed || c.full_name() == trimmed)
            .ok_or_else(|| UnknownCompetitor(s.to_string()))
    }
}

// --- Simulation overlay ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayPosition {
    pub top: f64,
    pub left: f64,
}

/// On-screen bounds of the element that opened the simulation window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementBounds {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl OverlayPosition {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Anchors the overlay to the right edge of `bounds`, `gap` pixels away.
    pub fn beside(bounds: ElementBounds, gap: f64) -> Self {
        Self {
            top: bounds.top,
            left: bounds.left + bounds.width + gap,
        }
    }
}

/// Simulation mode is a two-state toggle. The position only exists while active.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum SimulationState {
    #[default]
    Inactive,
    Active { position: Option<OverlayPosition> },
}

impl SimulationState {
    pub fn is_active(&self) -> bool {
        matches!(self, SimulationState::Active { .. })
    }

    pub fn position(&self) -> Option<OverlayPosition> {
        match self {
            SimulationState::Inactive => None,
            SimulationState::Active { position } => *position,
        }
    }
}

// --- Two-valued persisted preferences ---

/// A closed two-member choice that can be flipped and stored as a plain literal.
pub trait BinaryChoice: Copy + Eq + fmt::Debug {
    /// The other member.
    fn other(self) -> Self;
    /// Literal written to durable storage.
    fn as_str(self) -> &'static str;
    /// Inverse of `as_str`; `None` for anything else.
    fn parse(literal: &str) -> Option<Self>;
}

/// Period aggregation display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodMode {
    #[serde(rename = "CAD")]
    Cad,
    #[serde(rename = "CAM")]
    Cam,
}

impl BinaryChoice for PeriodMode {
    fn other(self) -> Self {
        match self {
            PeriodMode::Cad => PeriodMode::Cam,
            PeriodMode::Cam => PeriodMode::Cad,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            PeriodMode::Cad => "CAD",
            PeriodMode::Cam => "CAM",
        }
    }

    fn parse(literal: &str) -> Option<Self> {
        match literal {
            "CAD" => Some(PeriodMode::Cad),
            "CAM" => Some(PeriodMode::Cam),
            _ => None,
        }
    }
}

/// Volume measurement unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[serde(rename = "UVC")]
    Uvc,
    Tonne,
}

impl BinaryChoice for VolumeUnit {
    fn other(self) -> Self {
        match self {
            VolumeUnit::Uvc => VolumeUnit::Tonne,
            VolumeUnit::Tonne => VolumeUnit::Uvc,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            VolumeUnit::Uvc => "UVC",
            VolumeUnit::Tonne => "Tonne",
        }
    }

    fn parse(literal: &str) -> Option<Self> {
        match literal {
            "UVC" => Some(VolumeUnit::Uvc),
            "Tonne" => Some(VolumeUnit::Tonne),
            _ => None,
        }
    }
}
