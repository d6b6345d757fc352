use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A raw value as delivered by an upstream document parser.
///
/// Collaborators hand over loosely typed JSON: a figure may arrive as a
/// number, a formatted string ("1,234.56"), or a time-ordered sequence of
/// either. `Other` captures anything else (null, bool, nested objects) so
/// deserialization of a bundle never fails on a single odd field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Series(Vec<RawValue>),
    Other(serde_json::Value),
}

pub type RawMetrics = BTreeMap<String, RawValue>;

/// The raw collaborator bundle the Normalizer consumes.
///
/// Every part is optional; a bundle with none of the recognized structures
/// normalizes to an empty statement rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawBundle {
    #[serde(default)]
    pub balance_sheet: Option<RawMetrics>,
    #[serde(default)]
    pub income_statement: Option<RawMetrics>,
    #[serde(default)]
    pub cash_flow: Option<RawMetrics>,
    #[serde(default)]
    pub metrics: Option<RawMetrics>,
    #[serde(default)]
    pub aggregated_metrics: Option<RawMetrics>,
    /// Per-sheet metric mappings from spreadsheet extraction.
    #[serde(default)]
    pub sheets: Option<BTreeMap<String, RawMetrics>>,
    /// Flat record list from tabular extraction (one mapping per row).
    #[serde(default)]
    pub data: Option<Vec<RawMetrics>>,
}

impl RawBundle {
    /// True if the bundle contains none of the recognized structures.
    pub fn is_empty(&self) -> bool {
        self.balance_sheet.is_none()
            && self.income_statement.is_none()
            && self.cash_flow.is_none()
            && self.metrics.is_none()
            && self.aggregated_metrics.is_none()
            && self.sheets.is_none()
            && self.data.is_none()
    }
}

/// One normalized financial-statement snapshot.
///
/// `items` maps canonical item names (see `normalize::aliases`) to the most
/// recent value. Absence means unknown, never zero. `series` retains the
/// full time-ordered sequence for items that arrived as sequences, so growth
/// metrics can use real multi-period data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub items: BTreeMap<String, Decimal>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub series: BTreeMap<String, Vec<Decimal>>,
}

impl Statement {
    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.items.get(key).copied()
    }

    pub fn series(&self, key: &str) -> Option<&[Decimal]> {
        self.series.get(key).map(|v| v.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Direction of a single-snapshot trend signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
    Unknown,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Positive => write!(f, "Positive"),
            Trend::Negative => write!(f, "Negative"),
            Trend::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Heuristic trend signals derived from one snapshot.
///
/// These are not multi-period trend analysis; they are sign checks on the
/// current figures, used to color the overall assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSignals {
    pub revenue_trend: Trend,
    pub profit_trend: Trend,
    pub cash_flow_trend: Trend,
    pub key_observations: Vec<String>,
}
