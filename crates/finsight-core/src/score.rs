//! Health scoring: category sub-scores, composite score, rating.
//!
//! Every sub-score is a monotonic piecewise function clamped to [0,100].
//! Absent or indeterminate ratios never abort scoring; each sub-score has
//! a documented default: the function's natural floor of 0, except
//! current_ratio (floor 30, the minimum the function can produce) and the
//! cash conversion cycle (60, a neutral 90-day cycle).

use crate::ratios::{RatioSet, RatioValue};
use crate::report::{HealthRating, HealthScore};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Score a ratio set.
pub fn score(ratios: &RatioSet) -> HealthScore {
    let liquidity = mean2(
        score_current_ratio(ratios.liquidity.current_ratio),
        score_quick_ratio(ratios.liquidity.quick_ratio),
    );
    let leverage = mean2(
        score_debt_to_equity(ratios.leverage.debt_to_equity),
        score_interest_coverage(ratios.leverage.interest_coverage),
    );
    let profitability = mean2(
        score_roe(ratios.profitability.roe),
        score_net_margin(ratios.profitability.net_margin),
    );
    let efficiency = mean2(
        score_asset_turnover(ratios.efficiency.asset_turnover),
        score_cash_conversion_cycle(ratios.efficiency.cash_conversion_cycle),
    );

    let overall = (liquidity + leverage + profitability + efficiency) / dec!(4);

    HealthScore {
        liquidity,
        leverage,
        profitability,
        efficiency,
        overall,
        rating: HealthRating::from_score(overall),
    }
}

fn mean2(a: Decimal, b: Decimal) -> Decimal {
    (a + b) / dec!(2)
}

fn clamp(score: Decimal) -> Decimal {
    score.max(Decimal::ZERO).min(dec!(100))
}

/// 100 inside the healthy band [1.5, 3.0], degrading outside.
/// Default for absent/indeterminate: 30, the function's floor.
fn score_current_ratio(ratio: RatioValue) -> Decimal {
    match ratio {
        RatioValue::Present(r) => {
            if r >= dec!(1.5) && r <= dec!(3.0) {
                dec!(100)
            } else if r < dec!(1.0) {
                dec!(30)
            } else if r < dec!(1.5) {
                dec!(60)
            } else {
                dec!(75)
            }
        }
        _ => dec!(30),
    }
}

fn score_quick_ratio(ratio: RatioValue) -> Decimal {
    match ratio {
        RatioValue::Present(r) if r >= dec!(1.0) => dec!(100),
        RatioValue::Present(r) => clamp(r * dec!(100)),
        _ => Decimal::ZERO,
    }
}

fn score_debt_to_equity(ratio: RatioValue) -> Decimal {
    match ratio {
        RatioValue::Present(d) => {
            if d <= dec!(0.5) {
                dec!(100)
            } else if d <= dec!(1.5) {
                dec!(80)
            } else if d <= dec!(2.0) {
                dec!(60)
            } else {
                clamp(dec!(60) - (d - dec!(2.0)) * dec!(20))
            }
        }
        _ => Decimal::ZERO,
    }
}

fn score_interest_coverage(ratio: RatioValue) -> Decimal {
    match ratio {
        RatioValue::Present(c) => {
            if c >= dec!(5.0) {
                dec!(100)
            } else if c >= dec!(2.5) {
                dec!(80)
            } else if c > Decimal::ZERO {
                clamp(c * dec!(20))
            } else {
                Decimal::ZERO
            }
        }
        _ => Decimal::ZERO,
    }
}

fn score_roe(ratio: RatioValue) -> Decimal {
    match ratio {
        RatioValue::Present(r) => {
            if r >= dec!(0.20) {
                dec!(100)
            } else if r >= dec!(0.10) {
                dec!(70)
            } else if r > Decimal::ZERO {
                clamp(r * dec!(350))
            } else {
                Decimal::ZERO
            }
        }
        _ => Decimal::ZERO,
    }
}

fn score_net_margin(ratio: RatioValue) -> Decimal {
    match ratio {
        RatioValue::Present(m) => {
            if m >= dec!(0.15) {
                dec!(100)
            } else if m >= dec!(0.05) {
                dec!(70)
            } else if m > Decimal::ZERO {
                clamp(m * dec!(350))
            } else {
                Decimal::ZERO
            }
        }
        _ => Decimal::ZERO,
    }
}

fn score_asset_turnover(ratio: RatioValue) -> Decimal {
    match ratio {
        RatioValue::Present(t) => {
            if t >= dec!(2.0) {
                dec!(100)
            } else if t >= dec!(1.0) {
                dec!(80)
            } else {
                clamp(t * dec!(50))
            }
        }
        _ => Decimal::ZERO,
    }
}

/// Lower is better for the cash conversion cycle. Default for absent: 60,
/// a neutral 90-day cycle.
fn score_cash_conversion_cycle(ratio: RatioValue) -> Decimal {
    match ratio {
        RatioValue::Present(c) => {
            if c <= dec!(30) {
                dec!(100)
            } else if c <= dec!(60) {
                dec!(80)
            } else if c <= dec!(90) {
                dec!(60)
            } else {
                clamp(dec!(60) - (c - dec!(90)) * dec!(0.5))
            }
        }
        _ => dec!(60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(v: Decimal) -> RatioValue {
        RatioValue::Present(v)
    }

    #[test]
    fn current_ratio_bands() {
        assert_eq!(score_current_ratio(present(dec!(2.0))), dec!(100));
        assert_eq!(score_current_ratio(present(dec!(0.8))), dec!(30));
        assert_eq!(score_current_ratio(present(dec!(1.2))), dec!(60));
        assert_eq!(score_current_ratio(present(dec!(4.0))), dec!(75));
        assert_eq!(score_current_ratio(RatioValue::Absent), dec!(30));
        assert_eq!(score_current_ratio(RatioValue::Indeterminate), dec!(30));
    }

    #[test]
    fn extreme_inputs_stay_clamped() {
        assert_eq!(score_debt_to_equity(present(dec!(1000))), Decimal::ZERO);
        assert_eq!(score_quick_ratio(present(dec!(-5))), Decimal::ZERO);
        assert_eq!(
            score_cash_conversion_cycle(present(dec!(100000))),
            Decimal::ZERO
        );
        assert_eq!(score_roe(present(dec!(-3))), Decimal::ZERO);
    }

    #[test]
    fn interest_coverage_interpolates_below_two_and_a_half() {
        assert_eq!(score_interest_coverage(present(dec!(1.0))), dec!(20));
        assert_eq!(score_interest_coverage(present(dec!(5.0))), dec!(100));
        assert_eq!(score_interest_coverage(present(dec!(0))), Decimal::ZERO);
        assert_eq!(score_interest_coverage(present(dec!(-2))), Decimal::ZERO);
    }

    #[test]
    fn worked_example_scores_excellent() {
        use crate::model::Statement;

        let items: std::collections::BTreeMap<String, Decimal> = [
            ("current_assets", dec!(1000000)),
            ("current_liabilities", dec!(500000)),
            ("total_assets", dec!(2000000)),
            ("total_liabilities", dec!(800000)),
            ("equity", dec!(1200000)),
            ("inventory", dec!(200000)),
            ("revenue", dec!(5000000)),
            ("net_income", dec!(600000)),
            ("operating_income", dec!(800000)),
            ("interest_expense", dec!(50000)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        let statement = Statement {
            items,
            series: Default::default(),
        };

        let health = score(&crate::ratios::compute(&statement));
        // liquidity: current 2.0 -> 100, quick 1.6 -> 100
        assert_eq!(health.liquidity, dec!(100));
        // leverage: dte 0.667 -> 80, coverage 16 -> 100
        assert_eq!(health.leverage, dec!(90));
        // profitability: roe 0.5 -> 100, margin 0.12 -> 70
        assert_eq!(health.profitability, dec!(85));
        // efficiency: turnover 2.5 -> 100, ccc absent -> 60
        assert_eq!(health.efficiency, dec!(80));
        assert_eq!(health.overall, dec!(88.75));
        assert_eq!(health.rating, HealthRating::Excellent);
    }

    #[test]
    fn empty_ratio_set_scores_poor() {
        let ratios = crate::ratios::compute(&crate::model::Statement::default());
        let health = score(&ratios);
        // liquidity (30 + 0)/2, leverage 0, profitability 0, efficiency (0 + 60)/2
        assert_eq!(health.liquidity, dec!(15));
        assert_eq!(health.leverage, Decimal::ZERO);
        assert_eq!(health.profitability, Decimal::ZERO);
        assert_eq!(health.efficiency, dec!(30));
        assert_eq!(health.rating, HealthRating::Poor);
    }
}
