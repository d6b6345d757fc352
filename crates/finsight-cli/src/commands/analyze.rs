use finsight_core::benchmarks::{self, builtin};
use finsight_core::error::FinsightError;
use finsight_core::model::RawBundle;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    preset: &str,
    benchmarks_file: Option<PathBuf>,
    output_format: &str,
    show_all: bool,
    verbose: bool,
) -> Result<(), FinsightError> {
    // Custom profile file wins over the preset flag.
    let profile = match benchmarks_file {
        Some(path) => benchmarks::load_profile(&path)?,
        None => builtin::load_preset(preset)?,
    };

    let bytes = std::fs::read(&input_file)?;
    let bundle: RawBundle =
        serde_json::from_slice(&bytes).map_err(|e| FinsightError::BundleParse(e.to_string()))?;

    let analysis = finsight_core::analyze_bundle(&bundle, &profile);

    match output_format {
        "json" => output::json::print(&analysis)?,
        _ => output::table::print_analysis(&analysis, &profile, show_all, verbose),
    }

    Ok(())
}
