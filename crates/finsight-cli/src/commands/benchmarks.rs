use finsight_core::benchmarks::{self, builtin};
use finsight_core::error::FinsightError;
use std::path::Path;

pub fn list() -> Result<(), FinsightError> {
    println!("Available benchmark profiles:\n");
    for name in builtin::PRESETS {
        let profile = builtin::load_preset(name)?;
        let industry_info = match profile.industry.as_deref() {
            Some(industry) => format!(" [{}]", industry),
            None => String::new(),
        };
        println!("  {:<15} {} (v{}){}", name, profile.name, profile.version, industry_info);
        if let Some(ref description) = profile.description {
            println!("                  {}", description);
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), FinsightError> {
    let profile = builtin::load_preset(preset)?;

    println!("{} (version {})\n", profile.name, profile.version);

    if let Some(ref description) = profile.description {
        println!("{}\n", description);
    }

    match profile.industry.as_deref() {
        Some(industry) => println!(
            "Calibrated for {} companies; ratios are graded against these targets:\n",
            industry
        ),
        None => println!("Cross-industry defaults; ratios are graded against these targets:\n"),
    }

    let max_name = profile
        .targets
        .iter()
        .map(|t| t.ratio.len())
        .max()
        .unwrap_or(20);

    println!(
        "  {:<width$}  {:<10}  {:<12}  Direction",
        "Ratio",
        "Target",
        "Healthy",
        width = max_name + 2
    );
    println!("  {}", "-".repeat(max_name + 42));

    for target in &profile.targets {
        let healthy = match (target.healthy_min, target.healthy_max) {
            (Some(min), Some(max)) => format!("{} - {}", min, max),
            (Some(min), None) => format!(">= {}", min),
            (None, Some(max)) => format!("<= {}", max),
            (None, None) => "-".to_string(),
        };
        let direction = if target.higher_is_better {
            "higher is better"
        } else {
            "lower is better"
        };
        println!(
            "  {:<width$}  {:<10}  {:<12}  {}",
            target.ratio,
            target.target,
            healthy,
            direction,
            width = max_name + 2
        );
    }
    println!();

    println!("Grading: within 20% of the target is Fair, at or past it is Good,");
    println!("20% past it is Excellent; otherwise Concerning. Ratios without");
    println!("sufficient input data are reported as insufficient data.\n");

    Ok(())
}

pub fn schema() -> Result<(), FinsightError> {
    print!(
        r#"JSON Benchmark Profile Schema
=============================

A profile file defines the benchmark targets that `finsight analyze`
grades computed ratios against. Pass it with --benchmarks to replace
the built-in presets.

Top-level fields:
  name          (string, required)  Human-readable name of the profile
  description   (string, optional)  What this profile is for
  version       (string, required)  Version identifier (e.g., "2025.1")
  industry      (string, optional)  Industry the profile calibrates for
  targets       (array, required)   List of ratio targets (see below)

Each target in the "targets" array:
  ratio         (string, required)  Canonical ratio name, e.g.
                                    "current_ratio", "debt_to_equity",
                                    "net_margin", "roe". Margins and
                                    returns are fractions (0.10 = 10%).
  target        (string, required)  Benchmark value as a quoted decimal
                                    string (e.g., "2.0", "0.15").
  healthy_min   (string, optional)  Lower bound of the healthy range.
  healthy_max   (string, optional)  Upper bound of the healthy range.
  higher_is_better
                (bool, optional)    Direction of improvement.
                                    Default: true. Set false for ratios
                                    like debt_to_equity where lower wins.
  note          (string, optional)  Source or explanation.

Example:
{{
  "name": "Site-specific retail",
  "description": "Regional grocery chain targets",
  "version": "1.0",
  "industry": "retail",
  "targets": [
    {{
      "ratio": "current_ratio",
      "target": "1.2",
      "healthy_min": "1.0",
      "healthy_max": "2.0"
    }},
    {{
      "ratio": "debt_to_equity",
      "target": "1.0",
      "higher_is_better": false
    }},
    {{
      "ratio": "net_margin",
      "target": "0.03",
      "note": "Thin-margin sector"
    }}
  ]
}}

Note: numeric values must be quoted strings, not bare numbers, to
preserve exact decimal precision (e.g., "0.25" not 0.25).
"#
    );
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), FinsightError> {
    let profile = benchmarks::load_profile(file)?;

    println!("Profile '{}' (v{}) is valid.", profile.name, profile.version);
    println!("  Targets: {} ratios", profile.targets.len());

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for target in &profile.targets {
        if let (Some(min), Some(max)) = (target.healthy_min, target.healthy_max) {
            if target.target < min || target.target > max {
                warnings.push(format!(
                    "ratio '{}' has target {} outside its healthy range {} - {}",
                    target.ratio, target.target, min, max
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &warnings {
            println!("  - {}", warning);
        }
    }

    Ok(())
}
