use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An immutable benchmark profile passed into analysis.
///
/// Modeled as explicit configuration rather than process-wide defaults so
/// callers can swap profiles (e.g. per industry) per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Industry this profile calibrates for, if any.
    #[serde(default)]
    pub industry: Option<String>,
    pub targets: Vec<BenchmarkTarget>,
}

impl BenchmarkProfile {
    pub fn target(&self, ratio: &str) -> Option<&BenchmarkTarget> {
        self.targets.iter().find(|t| t.ratio == ratio)
    }

    pub fn target_value(&self, ratio: &str) -> Option<Decimal> {
        self.target(ratio).map(|t| t.target)
    }
}

/// Benchmark for a single ratio (values as strings for exact decimals).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkTarget {
    /// Canonical ratio name (see `ratios::KNOWN_RATIOS`).
    pub ratio: String,
    pub target: Decimal,
    #[serde(default)]
    pub healthy_min: Option<Decimal>,
    #[serde(default)]
    pub healthy_max: Option<Decimal>,
    /// Direction of improvement; false for ratios like debt_to_equity.
    #[serde(default = "default_higher_is_better")]
    pub higher_is_better: bool,
    #[serde(default)]
    pub note: Option<String>,
}

fn default_higher_is_better() -> bool {
    true
}
