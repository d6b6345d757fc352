use crate::model::{Statement, TrendSignals};
use crate::ratios::{RatioCategory, RatioSet};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of an anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "Critical"),
            Severity::High => write!(f, "High"),
            Severity::Medium => write!(f, "Medium"),
            Severity::Low => write!(f, "Low"),
        }
    }
}

/// Insight priority. Declaration order is rank order: deriving `Ord` makes
/// `Critical` sort first, which is exactly the output ordering contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 0,
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Critical => write!(f, "Critical"),
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// Discrete rating bands over the overall health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthRating {
    pub fn from_score(score: Decimal) -> Self {
        if score >= dec!(80) {
            HealthRating::Excellent
        } else if score >= dec!(65) {
            HealthRating::Good
        } else if score >= dec!(50) {
            HealthRating::Fair
        } else {
            HealthRating::Poor
        }
    }
}

impl fmt::Display for HealthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthRating::Excellent => write!(f, "Excellent"),
            HealthRating::Good => write!(f, "Good"),
            HealthRating::Fair => write!(f, "Fair"),
            HealthRating::Poor => write!(f, "Poor"),
        }
    }
}

/// Composite health score: one [0,100] score per core category, the overall
/// mean, and its rating band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthScore {
    pub liquidity: Decimal,
    pub leverage: Decimal,
    pub profitability: Decimal,
    pub efficiency: Decimal,
    pub overall: Decimal,
    pub rating: HealthRating,
}

impl HealthScore {
    /// Score for a core category. Valuation and growth do not carry scores.
    pub fn category(&self, category: RatioCategory) -> Option<Decimal> {
        match category {
            RatioCategory::Liquidity => Some(self.liquidity),
            RatioCategory::Leverage => Some(self.leverage),
            RatioCategory::Profitability => Some(self.profitability),
            RatioCategory::Efficiency => Some(self.efficiency),
            _ => None,
        }
    }
}

/// A ratio that crossed a fixed risk threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anomaly {
    /// Display name of the metric, e.g. "Current Ratio".
    pub metric: String,
    pub value: Decimal,
    /// Expected range as text, e.g. "1.5 - 3.0".
    pub expected_range: String,
    pub severity: Severity,
    pub explanation: String,
}

/// Category an insight belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    Liquidity,
    Leverage,
    Profitability,
    Efficiency,
    OverallAssessment,
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightCategory::Liquidity => write!(f, "Liquidity"),
            InsightCategory::Leverage => write!(f, "Leverage"),
            InsightCategory::Profitability => write!(f, "Profitability"),
            InsightCategory::Efficiency => write!(f, "Efficiency"),
            InsightCategory::OverallAssessment => write!(f, "Overall Assessment"),
        }
    }
}

/// A rule-generated observation with recommendation and impact, tagged with
/// a priority. Pure derived data; no back-reference to the ratios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    pub insight: String,
    pub recommendation: String,
    pub impact: String,
    pub priority: Priority,
}

/// Chart shape understood by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Radar,
    Bar,
    Gauge,
    Waterfall,
}

/// Presentation-ready chart payload. `data` is a named set of labeled
/// series; absent ratios appear as JSON null, never fabricated zeros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub chart_type: ChartKind,
    pub title: String,
    pub data: serde_json::Value,
    pub explanation: String,
}

/// The full analysis bundle for one statement snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub statement: Statement,
    pub ratios: RatioSet,
    pub health: HealthScore,
    pub trends: TrendSignals,
    pub anomalies: Vec<Anomaly>,
    pub insights: Vec<Insight>,
    pub charts: Vec<ChartData>,
}
