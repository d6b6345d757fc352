//! Single-snapshot trend heuristics.
//!
//! True multi-period trend analysis is out of scope; these are sign checks
//! on the current figures used to color the overall assessment.

use crate::model::{Statement, Trend, TrendSignals};
use rust_decimal::Decimal;

/// Derive trend signals from one statement snapshot.
pub fn detect(statement: &Statement) -> TrendSignals {
    let revenue = statement.get("revenue");
    let net_income = statement.get("net_income");
    let operating_cash_flow = statement.get("operating_cash_flow");

    let mut observations = Vec::new();

    if let Some(revenue) = revenue {
        if revenue > Decimal::ZERO {
            observations.push(format!("Current revenue: {}", revenue.round_dp(0)));
        }
    }
    match net_income {
        Some(n) if n > Decimal::ZERO => observations.push("Profitable operations".into()),
        Some(n) if n < Decimal::ZERO => observations.push("Net loss reported".into()),
        _ => {}
    }
    if let (Some(ocf), Some(n)) = (operating_cash_flow, net_income) {
        if ocf > n {
            observations.push("Strong cash generation relative to earnings".into());
        }
    }

    TrendSignals {
        revenue_trend: match revenue {
            Some(r) if r > Decimal::ZERO => Trend::Positive,
            _ => Trend::Unknown,
        },
        profit_trend: sign_trend(net_income),
        cash_flow_trend: sign_trend(operating_cash_flow),
        key_observations: observations,
    }
}

fn sign_trend(value: Option<Decimal>) -> Trend {
    match value {
        Some(v) if v > Decimal::ZERO => Trend::Positive,
        Some(_) => Trend::Negative,
        None => Trend::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn statement(pairs: &[(&str, Decimal)]) -> Statement {
        Statement {
            items: pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            series: BTreeMap::new(),
        }
    }

    #[test]
    fn profitable_company() {
        let signals = detect(&statement(&[
            ("revenue", dec!(5000)),
            ("net_income", dec!(600)),
            ("operating_cash_flow", dec!(900)),
        ]));
        assert_eq!(signals.revenue_trend, Trend::Positive);
        assert_eq!(signals.profit_trend, Trend::Positive);
        assert_eq!(signals.cash_flow_trend, Trend::Positive);
        assert!(signals
            .key_observations
            .iter()
            .any(|o| o.contains("cash generation")));
    }

    #[test]
    fn loss_making_company() {
        let signals = detect(&statement(&[
            ("revenue", dec!(5000)),
            ("net_income", dec!(-200)),
        ]));
        assert_eq!(signals.profit_trend, Trend::Negative);
        assert!(signals
            .key_observations
            .iter()
            .any(|o| o == "Net loss reported"));
    }

    #[test]
    fn empty_statement_is_unknown() {
        let signals = detect(&Statement::default());
        assert_eq!(signals.revenue_trend, Trend::Unknown);
        assert_eq!(signals.profit_trend, Trend::Unknown);
        assert_eq!(signals.cash_flow_trend, Trend::Unknown);
        assert!(signals.key_observations.is_empty());
    }
}
