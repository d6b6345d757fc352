pub mod builtin;
pub mod schema;

use crate::error::FinsightError;
use crate::ratios::{RatioValue, KNOWN_RATIOS};
use rust_decimal_macros::dec;
use schema::{BenchmarkProfile, BenchmarkTarget};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Load a benchmark profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<BenchmarkProfile, FinsightError> {
    let content = std::fs::read_to_string(path).map_err(|e| FinsightError::ProfileLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_profile(&content, path)
}

/// Parse a benchmark profile from a JSON string.
pub fn parse_profile(json: &str, source: &Path) -> Result<BenchmarkProfile, FinsightError> {
    let profile: BenchmarkProfile =
        serde_json::from_str(json).map_err(|e| FinsightError::ProfileLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Parse a benchmark profile from a JSON string (no file path context).
pub fn parse_profile_str(json: &str) -> Result<BenchmarkProfile, FinsightError> {
    let profile: BenchmarkProfile = serde_json::from_str(json).map_err(FinsightError::Json)?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Validate that a benchmark profile is well-formed.
pub fn validate_profile(profile: &BenchmarkProfile) -> Result<(), FinsightError> {
    if profile.name.is_empty() {
        return Err(FinsightError::ProfileInvalid(
            "profile name must not be empty".into(),
        ));
    }

    if profile.targets.is_empty() {
        return Err(FinsightError::ProfileInvalid(
            "targets must not be empty".into(),
        ));
    }

    for target in &profile.targets {
        if !KNOWN_RATIOS.contains(&target.ratio.as_str()) {
            return Err(FinsightError::ProfileInvalid(format!(
                "unknown ratio '{}'",
                target.ratio
            )));
        }

        if let (Some(min), Some(max)) = (target.healthy_min, target.healthy_max) {
            if min > max {
                return Err(FinsightError::ProfileInvalid(format!(
                    "ratio '{}' has healthy_min {} greater than healthy_max {}",
                    target.ratio, min, max
                )));
            }
        }
    }

    Ok(())
}

/// How a present ratio compares against its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    Excellent,
    Good,
    Fair,
    Concerning,
    InsufficientData,
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interpretation::Excellent => write!(f, "Excellent"),
            Interpretation::Good => write!(f, "Good"),
            Interpretation::Fair => write!(f, "Fair"),
            Interpretation::Concerning => write!(f, "Concerning"),
            Interpretation::InsufficientData => write!(f, "Insufficient data"),
        }
    }
}

/// Grade a ratio against its benchmark target.
///
/// Direction-aware ±20% bands: within 20% of target is Fair, at or past the
/// target is Good, 20% past it is Excellent. Absent and indeterminate
/// values grade as InsufficientData.
pub fn interpret(value: RatioValue, target: &BenchmarkTarget) -> Interpretation {
    let value = match value.value() {
        Some(v) => v,
        None => return Interpretation::InsufficientData,
    };

    let benchmark = target.target;
    if target.higher_is_better {
        if value >= benchmark * dec!(1.2) {
            Interpretation::Excellent
        } else if value >= benchmark {
            Interpretation::Good
        } else if value >= benchmark * dec!(0.8) {
            Interpretation::Fair
        } else {
            Interpretation::Concerning
        }
    } else if value <= benchmark * dec!(0.8) {
        Interpretation::Excellent
    } else if value <= benchmark {
        Interpretation::Good
    } else if value <= benchmark * dec!(1.2) {
        Interpretation::Fair
    } else {
        Interpretation::Concerning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn target(ratio: &str, value: Decimal, higher_is_better: bool) -> BenchmarkTarget {
        BenchmarkTarget {
            ratio: ratio.into(),
            target: value,
            healthy_min: None,
            healthy_max: None,
            higher_is_better,
            note: None,
        }
    }

    #[test]
    fn parse_valid_profile() {
        let json = r#"{
            "name": "Test",
            "version": "1.0",
            "targets": [
                { "ratio": "current_ratio", "target": "2.0" }
            ]
        }"#;
        let profile = parse_profile_str(json).unwrap();
        assert_eq!(profile.name, "Test");
        assert_eq!(profile.targets.len(), 1);
        assert!(profile.targets[0].higher_is_better);
    }

    #[test]
    fn empty_targets_rejected() {
        let json = r#"{ "name": "Bad", "version": "1.0", "targets": [] }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn unknown_ratio_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "targets": [ { "ratio": "momentum", "target": "1.0" } ]
        }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn inverted_healthy_range_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "targets": [
                { "ratio": "current_ratio", "target": "2.0", "healthy_min": "3.0", "healthy_max": "1.5" }
            ]
        }"#;
        assert!(parse_profile_str(json).is_err());
    }

    #[test]
    fn interpret_higher_is_better() {
        let t = target("current_ratio", dec!(2.0), true);
        assert_eq!(interpret(RatioValue::Present(dec!(2.5)), &t), Interpretation::Excellent);
        assert_eq!(interpret(RatioValue::Present(dec!(2.1)), &t), Interpretation::Good);
        assert_eq!(interpret(RatioValue::Present(dec!(1.7)), &t), Interpretation::Fair);
        assert_eq!(interpret(RatioValue::Present(dec!(1.0)), &t), Interpretation::Concerning);
    }

    #[test]
    fn interpret_lower_is_better() {
        let t = target("debt_to_equity", dec!(1.0), false);
        assert_eq!(interpret(RatioValue::Present(dec!(0.5)), &t), Interpretation::Excellent);
        assert_eq!(interpret(RatioValue::Present(dec!(0.9)), &t), Interpretation::Good);
        assert_eq!(interpret(RatioValue::Present(dec!(1.1)), &t), Interpretation::Fair);
        assert_eq!(interpret(RatioValue::Present(dec!(2.0)), &t), Interpretation::Concerning);
    }

    #[test]
    fn interpret_missing_data() {
        let t = target("roe", dec!(0.2), true);
        assert_eq!(interpret(RatioValue::Absent, &t), Interpretation::InsufficientData);
        assert_eq!(
            interpret(RatioValue::Indeterminate, &t),
            Interpretation::InsufficientData
        );
    }
}
