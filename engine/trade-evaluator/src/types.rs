use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the synthetic line item granted to the side holding fewer assets
pub const UNEVEN_ADJUSTMENT_LABEL: &str = "Uneven Player Adjustment";

/// Round a value to one decimal place, halves away from zero
pub fn round1(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Whether an asset is a player or a draft pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Player,
    DraftPick,
}

/// A tradeable unit: a player or a draft pick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset name (e.g., "Ja'Marr Chase" or "2026 1st")
    pub name: String,

    /// Team abbreviation, None for draft picks
    pub team: Option<String>,

    /// Position (e.g., "QB", "WR"), None for draft picks
    pub position: Option<String>,

    /// Player age, None for draft picks
    pub age: Option<f64>,

    /// Trade value in single-quarterback leagues
    pub value_1qb: Decimal,

    /// Trade value in superflex leagues
    pub value_superflex: Decimal,

    /// Label shown in selectors, e.g. "Josh Allen (BUF - QB - Age - 29)"
    pub display_label: String,
}

impl Asset {
    /// Create a new asset, rounding both values and deriving its display label
    pub fn new(
        name: String,
        team: Option<String>,
        position: Option<String>,
        age: Option<f64>,
        value_1qb: Decimal,
        value_superflex: Decimal,
    ) -> Self {
        let display_label = format_label(&name, team.as_deref(), position.as_deref(), age);

        Self {
            name,
            team,
            position,
            age,
            value_1qb: round1(value_1qb),
            value_superflex: round1(value_superflex),
            display_label,
        }
    }

    pub fn kind(&self) -> AssetKind {
        if self.position.is_some() {
            AssetKind::Player
        } else {
            AssetKind::DraftPick
        }
    }

    /// Value of this asset under the given league format
    pub fn value(&self, mode: ValuationMode) -> Decimal {
        match mode {
            ValuationMode::SingleQB => self.value_1qb,
            ValuationMode::Superflex => self.value_superflex,
        }
    }
}

/// Build the display label for an asset
///
/// Picks (no position) are labelled by name alone.
pub fn format_label(
    name: &str,
    team: Option<&str>,
    position: Option<&str>,
    age: Option<f64>,
) -> String {
    match position {
        None => name.to_string(),
        Some(position) => {
            let team = team.unwrap_or("N/A");
            let age = age.map(|age| age.to_string()).unwrap_or_else(|| "N/A".to_string());
            format!("{name} ({team} - {position} - Age - {age})")
        }
    }
}

/// League format, selecting which value column is used for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationMode {
    #[default]
    #[serde(rename = "single_qb", alias = "1qb", alias = "1-qb")]
    SingleQB,

    #[serde(alias = "sf")]
    Superflex,
}

impl fmt::Display for ValuationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuationMode::SingleQB => write!(f, "1-QB"),
            ValuationMode::Superflex => write!(f, "Superflex"),
        }
    }
}

impl FromStr for ValuationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1qb" | "1-qb" | "single-qb" | "single_qb" | "singleqb" => Ok(ValuationMode::SingleQB),
            "sf" | "superflex" => Ok(ValuationMode::Superflex),
            other => Err(format!("Unknown league format '{other}' (expected 1qb or sf)")),
        }
    }
}

/// One side of the trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => write!(f, "Team A"),
            Team::B => write!(f, "Team B"),
        }
    }
}

impl FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "team-a" | "team_a" => Ok(Team::A),
            "b" | "team-b" | "team_b" => Ok(Team::B),
            other => Err(format!("Unknown team '{other}' (expected a or b)")),
        }
    }
}

/// A single (label, value) row in a team's breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub value: Decimal,
}

impl LineItem {
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self { label: label.into(), value }
    }
}

/// Summed value for one side of the trade
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamValuation {
    /// Exact sum of the line item values
    pub total: Decimal,

    /// Line items in catalog order, followed by any adjustment line
    pub line_items: Vec<LineItem>,

    /// Number of assets selected (adjustment lines excluded)
    pub asset_count: usize,
}

/// Outcome of comparing the two (post-adjustment) totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    #[serde(rename = "a_heavier")]
    AHeavier { margin: Decimal },
    #[serde(rename = "b_heavier")]
    BHeavier { margin: Decimal },
    Balanced,
}

impl Verdict {
    /// Absolute difference between the two totals, zero when balanced
    pub fn margin(&self) -> Decimal {
        match self {
            Verdict::AHeavier { margin } | Verdict::BHeavier { margin } => *margin,
            Verdict::Balanced => Decimal::ZERO,
        }
    }

    /// The verdict seen from the other side of the table
    pub fn swapped(self) -> Self {
        match self {
            Verdict::AHeavier { margin } => Verdict::BHeavier { margin },
            Verdict::BHeavier { margin } => Verdict::AHeavier { margin },
            Verdict::Balanced => Verdict::Balanced,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::AHeavier { margin } => {
                write!(f, "Team A is giving up {margin:.1} more in value.")
            }
            Verdict::BHeavier { margin } => {
                write!(f, "Team B is giving up {margin:.1} more in value.")
            }
            Verdict::Balanced => write!(f, "This trade is perfectly balanced."),
        }
    }
}

/// Everything the display layer needs to render one trade evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSummary {
    pub mode: ValuationMode,
    pub team_a: TeamValuation,
    pub team_b: TeamValuation,
    pub verdict: Verdict,
    pub evaluated_at: DateTime<Utc>,
}

impl TradeSummary {
    /// Serialize for an external display collaborator
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
