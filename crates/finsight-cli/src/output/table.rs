use finsight_core::benchmarks::schema::BenchmarkProfile;
use finsight_core::benchmarks::{interpret, Interpretation};
use finsight_core::normalize::NormalizedStatement;
use finsight_core::report::Analysis;

pub fn print_analysis(
    analysis: &Analysis,
    profile: &BenchmarkProfile,
    show_all: bool,
    verbose: bool,
) {
    let health = &analysis.health;

    println!("=== Financial Health ({}) ===\n", profile.name);
    println!(
        "  Overall: {}/100 ({})\n",
        health.overall.round_dp(0),
        health.rating
    );
    println!(
        "  Liquidity {:<6} Leverage {:<6} Profitability {:<6} Efficiency {}",
        health.liquidity.round_dp(0),
        health.leverage.round_dp(0),
        health.profitability.round_dp(0),
        health.efficiency.round_dp(0),
    );
    println!();

    if analysis.anomalies.is_empty() {
        println!("  No anomalies detected.\n");
    } else {
        println!("  Anomalies:");
        for anomaly in &analysis.anomalies {
            println!(
                "    [{}] {}: {} (expected {})",
                anomaly.severity, anomaly.metric, anomaly.value, anomaly.expected_range
            );
            println!("          {}", anomaly.explanation);
        }
        println!();
    }

    println!("  Insights:");
    for insight in &analysis.insights {
        println!("    [{}] {}: {}", insight.priority, insight.category, insight.insight);
        println!("          -> {}", insight.recommendation);
        if verbose {
            println!("          Impact: {}", insight.impact);
        }
    }
    println!();

    if show_all {
        print_ratio_table(analysis, profile);
    }

    if verbose {
        println!("  Statement items:");
        for (key, value) in &analysis.statement.items {
            println!("    {:<28} {}", key, value);
        }
        println!();
    }
}

fn print_ratio_table(analysis: &Analysis, profile: &BenchmarkProfile) {
    println!("  Ratios:");

    let entries = analysis.ratios.entries();
    let max_name = entries.iter().map(|(_, name, _)| name.len()).max().unwrap_or(10);

    let mut current_category = None;
    for (category, name, value) in entries {
        if current_category != Some(category) {
            println!("    {category}:");
            current_category = Some(category);
        }

        let grade = match profile.target(name) {
            Some(target) => {
                let interpretation = interpret(value, target);
                if interpretation == Interpretation::InsufficientData {
                    String::new()
                } else {
                    format!("  [{interpretation}, target {}]", target.target)
                }
            }
            None => String::new(),
        };

        println!("      {:<width$}  {}{}", name, value, grade, width = max_name);
    }
    println!();
}

pub fn format_normalized(normalized: &NormalizedStatement) -> String {
    let mut out = String::new();

    if normalized.statement.items.is_empty() {
        out.push_str("No statement items recognized in the bundle.\n");
    } else {
        out.push_str("Statement items:\n");
        let max_key = normalized
            .statement
            .items
            .keys()
            .map(|k| k.len())
            .max()
            .unwrap_or(10);
        for (key, value) in &normalized.statement.items {
            out.push_str(&format!("  {:<width$}  {}\n", key, value, width = max_key));
        }
    }

    if !normalized.statement.series.is_empty() {
        out.push_str("\nRetained series:\n");
        for (key, values) in &normalized.statement.series {
            let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            out.push_str(&format!("  {}  [{}]\n", key, rendered.join(", ")));
        }
    }

    if !normalized.applied.is_empty() {
        out.push_str("\nInferred items:\n");
        for inference in &normalized.applied {
            out.push_str(&format!(
                "  {} = {} ({})\n",
                inference.target, inference.value, inference.rule
            ));
        }
    }

    if !normalized.skipped.is_empty() {
        out.push_str("\nSkipped fields:\n");
        for skipped in &normalized.skipped {
            out.push_str(&format!("  {}: {}\n", skipped.key, skipped.reason));
        }
    }

    out
}
