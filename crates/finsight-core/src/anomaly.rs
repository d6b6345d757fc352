//! Threshold-based anomaly detection.
//!
//! A fixed list of independent predicates, evaluated in declaration order
//! (liquidity, leverage, profitability). Emission order follows that
//! declaration order, not severity; callers wanting severity ordering sort
//! downstream. Predicates fire only on `Present` values: a legitimately
//! computed zero is evaluated, an absent or indeterminate ratio is not.

use crate::ratios::{RatioSet, RatioValue};
use crate::report::{Anomaly, Severity};
use rust_decimal_macros::dec;

/// Detect ratios that cross fixed risk thresholds.
pub fn detect(ratios: &RatioSet) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();

    if let RatioValue::Present(current_ratio) = ratios.liquidity.current_ratio {
        if current_ratio < dec!(1.0) {
            anomalies.push(Anomaly {
                metric: "Current Ratio".into(),
                value: current_ratio.round_dp(2),
                expected_range: "1.5 - 3.0".into(),
                severity: Severity::High,
                explanation: "Current assets may not cover short-term liabilities".into(),
            });
        }
    }

    if let RatioValue::Present(debt_to_equity) = ratios.leverage.debt_to_equity {
        if debt_to_equity > dec!(2.0) {
            anomalies.push(Anomaly {
                metric: "Debt-to-Equity".into(),
                value: debt_to_equity.round_dp(2),
                expected_range: "0.5 - 1.5".into(),
                severity: Severity::Medium,
                explanation: "High leverage may indicate financial risk".into(),
            });
        }
    }

    if let RatioValue::Present(net_margin) = ratios.profitability.net_margin {
        if net_margin < dec!(0) {
            anomalies.push(Anomaly {
                metric: "Net Margin".into(),
                value: (net_margin * dec!(100)).round_dp(2),
                expected_range: "10% - 20%".into(),
                severity: Severity::Critical,
                explanation: "Negative margins indicate operational losses".into(),
            });
        }
    }

    anomalies
}
