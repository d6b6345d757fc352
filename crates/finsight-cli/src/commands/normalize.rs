use finsight_core::error::FinsightError;
use finsight_core::model::RawBundle;
use finsight_core::normalize;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), FinsightError> {
    let bytes = std::fs::read(&input_file)?;
    let bundle: RawBundle =
        serde_json::from_slice(&bytes).map_err(|e| FinsightError::BundleParse(e.to_string()))?;

    let normalized = normalize::normalize_bundle(&bundle);

    let output_str = match output_format {
        "json" => serde_json::to_string_pretty(&normalized)?,
        _ => output::table::format_normalized(&normalized),
    };

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&normalized)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Normalized {} statement item(s), written to {}",
                normalized.statement.items.len(),
                path.display()
            );
            if !normalized.applied.is_empty() {
                eprintln!("  {} item(s) backfilled by inference", normalized.applied.len());
            }
            if !normalized.skipped.is_empty() {
                eprintln!("  {} field(s) skipped during normalization", normalized.skipped.len());
            }
        }
        None => {
            println!("{output_str}");
        }
    }

    Ok(())
}
