//! Presentation-ready chart payloads.
//!
//! A derived view over the ratio set: no new computation happens here.
//! Absent or indeterminate ratios serialize as JSON null so the
//! presentation layer can render gaps instead of fake zeros. Benchmark
//! reference values come from the active profile.

use crate::benchmarks::schema::BenchmarkProfile;
use crate::ratios::{RatioSet, RatioValue};
use crate::report::{ChartData, ChartKind};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

/// Build the chart payload set for one ratio set.
pub fn build(ratios: &RatioSet, profile: &BenchmarkProfile) -> Vec<ChartData> {
    vec![
        liquidity_radar(ratios, profile),
        margins_bar(ratios),
        leverage_gauge(ratios),
        dupont_waterfall(ratios),
    ]
}

fn liquidity_radar(ratios: &RatioSet, profile: &BenchmarkProfile) -> ChartData {
    ChartData {
        chart_type: ChartKind::Radar,
        title: "Liquidity Health".into(),
        data: json!({
            "metrics": ["Current Ratio", "Quick Ratio", "Cash Ratio"],
            "values": [
                plot(ratios.liquidity.current_ratio),
                plot(ratios.liquidity.quick_ratio),
                plot(ratios.liquidity.cash_ratio),
            ],
            "benchmarks": [
                benchmark(profile, "current_ratio", dec!(2.0)),
                benchmark(profile, "quick_ratio", dec!(1.5)),
                benchmark(profile, "cash_ratio", dec!(0.5)),
            ],
        }),
        explanation: "Measures ability to meet short-term obligations".into(),
    }
}

fn margins_bar(ratios: &RatioSet) -> ChartData {
    ChartData {
        chart_type: ChartKind::Bar,
        title: "Profit Margins".into(),
        data: json!({
            "labels": ["Gross", "Operating", "Net", "EBITDA"],
            "values": [
                plot_pct(ratios.profitability.gross_margin),
                plot_pct(ratios.profitability.operating_margin),
                plot_pct(ratios.profitability.net_margin),
                plot_pct(ratios.profitability.ebitda_margin),
            ],
        }),
        explanation: "Profitability at different operational levels".into(),
    }
}

fn leverage_gauge(ratios: &RatioSet) -> ChartData {
    ChartData {
        chart_type: ChartKind::Gauge,
        title: "Leverage Risk".into(),
        data: json!({
            "value": plot(ratios.leverage.debt_to_equity),
            "max": 3.0,
            "zones": [
                { "from": 0.0, "to": 0.5, "color": "green" },
                { "from": 0.5, "to": 1.5, "color": "yellow" },
                { "from": 1.5, "to": 3.0, "color": "red" },
            ],
        }),
        explanation: "Debt-to-equity ratio indicates financial leverage".into(),
    }
}

fn dupont_waterfall(ratios: &RatioSet) -> ChartData {
    ChartData {
        chart_type: ChartKind::Waterfall,
        title: "DuPont ROE Analysis".into(),
        data: json!({
            "components": ["Profit Margin", "Asset Turnover", "Equity Multiplier"],
            "values": [
                plot(ratios.profitability.dupont_net_margin),
                plot(ratios.profitability.dupont_asset_turnover),
                plot(ratios.profitability.dupont_equity_multiplier),
            ],
            "roe": plot(ratios.profitability.roe),
        }),
        explanation: "ROE decomposition showing drivers of return on equity".into(),
    }
}

fn plot(ratio: RatioValue) -> Value {
    ratio
        .value()
        .and_then(|d| d.to_f64())
        .map(Value::from)
        .unwrap_or(Value::Null)
}

fn plot_pct(ratio: RatioValue) -> Value {
    ratio
        .value()
        .and_then(|d| (d * dec!(100)).to_f64())
        .map(Value::from)
        .unwrap_or(Value::Null)
}

fn benchmark(profile: &BenchmarkProfile, ratio: &str, fallback: Decimal) -> Value {
    let value = profile.target_value(ratio).unwrap_or(fallback);
    value.to_f64().map(Value::from).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Statement;
    use std::collections::BTreeMap;

    fn profile() -> BenchmarkProfile {
        crate::benchmarks::builtin::load_preset("general").unwrap()
    }

    fn ratios_for(pairs: &[(&str, Decimal)]) -> RatioSet {
        let items: BTreeMap<String, Decimal> =
            pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        crate::ratios::compute(&Statement {
            items,
            series: BTreeMap::new(),
        })
    }

    #[test]
    fn four_charts_always_built() {
        let charts = build(&ratios_for(&[]), &profile());
        assert_eq!(charts.len(), 4);
        assert_eq!(charts[0].chart_type, ChartKind::Radar);
        assert_eq!(charts[1].chart_type, ChartKind::Bar);
        assert_eq!(charts[2].chart_type, ChartKind::Gauge);
        assert_eq!(charts[3].chart_type, ChartKind::Waterfall);
    }

    #[test]
    fn absent_ratios_serialize_as_null() {
        let charts = build(&ratios_for(&[]), &profile());
        let values = charts[0].data["values"].as_array().unwrap();
        assert!(values.iter().all(|v| v.is_null()));
    }

    #[test]
    fn margins_scaled_to_percent() {
        let charts = build(
            &ratios_for(&[("net_income", dec!(120)), ("revenue", dec!(1000))]),
            &profile(),
        );
        let values = charts[1].data["values"].as_array().unwrap();
        // Net margin 0.12 -> 12%
        assert_eq!(values[2], json!(12.0));
    }

    #[test]
    fn radar_benchmarks_from_profile() {
        let charts = build(&ratios_for(&[]), &profile());
        let benchmarks = charts[0].data["benchmarks"].as_array().unwrap();
        assert_eq!(benchmarks[0], json!(2.0));
    }
}
