use crate::benchmarks::schema::BenchmarkProfile;
use crate::error::FinsightError;

const GENERAL_JSON: &str = include_str!("../../../../benchmarks/general.json");
const MANUFACTURING_JSON: &str = include_str!("../../../../benchmarks/manufacturing.json");
const RETAIL_JSON: &str = include_str!("../../../../benchmarks/retail.json");
const TECHNOLOGY_JSON: &str = include_str!("../../../../benchmarks/technology.json");

/// Available predefined benchmark profiles.
pub const PRESETS: &[&str] = &["general", "manufacturing", "retail", "technology"];

/// Load a predefined benchmark profile by name.
pub fn load_preset(name: &str) -> Result<BenchmarkProfile, FinsightError> {
    let json = match name {
        "general" => GENERAL_JSON,
        "manufacturing" => MANUFACTURING_JSON,
        "retail" => RETAIL_JSON,
        "technology" => TECHNOLOGY_JSON,
        _ => {
            return Err(FinsightError::ProfileInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let profile: BenchmarkProfile = serde_json::from_str(json)?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::validate_profile;

    #[test]
    fn all_presets_load_and_validate() {
        for preset in PRESETS {
            let profile = load_preset(preset).unwrap();
            validate_profile(&profile).unwrap();
            assert!(!profile.targets.is_empty());
        }
    }

    #[test]
    fn general_preset_values() {
        let profile = load_preset("general").unwrap();
        let current = profile.target("current_ratio").unwrap();
        assert_eq!(current.target, rust_decimal_macros::dec!(2.0));
        assert!(current.higher_is_better);

        let dte = profile.target("debt_to_equity").unwrap();
        assert!(!dte.higher_is_better);
    }

    #[test]
    fn unknown_preset_rejected() {
        assert!(load_preset("xyz").is_err());
    }
}
