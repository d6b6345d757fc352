use finsight_core::error::FinsightError;
use finsight_core::report::Analysis;

pub fn print(analysis: &Analysis) -> Result<(), FinsightError> {
    let json = serde_json::to_string_pretty(analysis)?;
    println!("{json}");
    Ok(())
}
