pub mod anomaly;
pub mod benchmarks;
pub mod charts;
pub mod error;
pub mod insight;
pub mod model;
pub mod normalize;
pub mod ratios;
pub mod report;
pub mod score;
pub mod trend;

use benchmarks::schema::BenchmarkProfile;
use model::{RawBundle, Statement};
use report::Analysis;

/// Main API entry point: analyze a raw collaborator bundle.
///
/// Normalizes the bundle into one statement snapshot and runs the full
/// pipeline. Infallible by design: missing or malformed fields degrade the
/// corresponding outputs (absent ratios, low scores, fewer insights), they
/// never abort the analysis.
pub fn analyze_bundle(bundle: &RawBundle, profile: &BenchmarkProfile) -> Analysis {
    let normalized = normalize::normalize_bundle(bundle);
    analyze_statement(normalized.statement, profile)
}

/// Analyze an already-normalized statement snapshot.
///
/// Each downstream stage is a read-only consumer of the ratio set; the
/// whole pipeline is pure and safe to invoke concurrently for distinct
/// statements.
pub fn analyze_statement(statement: Statement, profile: &BenchmarkProfile) -> Analysis {
    let ratios = ratios::compute(&statement);
    let health = score::score(&ratios);
    let trends = trend::detect(&statement);
    let anomalies = anomaly::detect(&ratios);
    let insights = insight::generate(&ratios, &health, Some(&trends));
    let charts = charts::build(&ratios, profile);

    Analysis {
        statement,
        ratios,
        health,
        trends,
        anomalies,
        insights,
        charts,
    }
}
