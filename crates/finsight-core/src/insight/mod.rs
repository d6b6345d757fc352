pub mod bands;

use crate::model::{Trend, TrendSignals};
use crate::ratios::{RatioCategory, RatioSet, CORE_CATEGORIES};
use crate::report::{HealthScore, Insight, InsightCategory, Priority};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Generate the full ordered insight list.
///
/// Category cascades run in fixed order (liquidity, leverage,
/// profitability, efficiency), the overall assessment is always appended,
/// and the result is stably sorted by priority rank. Insights of equal
/// priority keep their emission order, so output is reproducible for
/// identical inputs.
pub fn generate(
    ratios: &RatioSet,
    health: &HealthScore,
    trends: Option<&TrendSignals>,
) -> Vec<Insight> {
    let mut insights = Vec::new();

    insights.extend(bands::liquidity(&ratios.liquidity));
    insights.extend(bands::leverage(&ratios.leverage));
    insights.extend(bands::profitability(&ratios.profitability));
    insights.extend(bands::efficiency(&ratios.efficiency));
    insights.push(overall_assessment(health, trends));

    insights.sort_by_key(|i| i.priority);
    insights
}

/// Strategic recommendation text per core category.
fn strategic_recommendation(category: RatioCategory) -> &'static str {
    match category {
        RatioCategory::Liquidity => "Strengthen working capital management and cash reserves",
        RatioCategory::Leverage => "Focus on deleveraging and improving debt service coverage",
        RatioCategory::Profitability => {
            "Enhance margins through operational improvements and pricing power"
        }
        RatioCategory::Efficiency => "Optimize asset utilization and accelerate cash conversion",
        // Valuation and growth do not carry health scores.
        RatioCategory::Valuation | RatioCategory::Growth => "Maintain current strategic direction",
    }
}

/// Build the always-present overall assessment insight.
///
/// Weakest and strongest categories are selected by iterating the core
/// categories in declaration order with strict comparisons, so ties resolve
/// to the earlier category deterministically.
fn overall_assessment(health: &HealthScore, trends: Option<&TrendSignals>) -> Insight {
    let scores: Vec<(RatioCategory, Decimal)> = CORE_CATEGORIES
        .iter()
        .map(|&c| (c, health.category(c).unwrap_or(Decimal::ZERO)))
        .collect();

    let mut weakest = scores[0];
    let mut strongest = scores[0];
    for &(category, score) in &scores[1..] {
        if score < weakest.1 {
            weakest = (category, score);
        }
        if score > strongest.1 {
            strongest = (category, score);
        }
    }

    let insight = format!(
        "Financial Health Score: {}/100 - {}. Breakdown: Liquidity {}, Leverage {}, Profitability {}, Efficiency {}.",
        health.overall.round_dp(0),
        health.rating,
        health.liquidity.round_dp(0),
        health.leverage.round_dp(0),
        health.profitability.round_dp(0),
        health.efficiency.round_dp(0),
    );

    let recommendation = format!(
        "Strategic priority: {}. Leverage strength in {} to support improvements in {}.",
        strategic_recommendation(weakest.0),
        strongest.0,
        weakest.0,
    );

    let mut impact = format!(
        "Company demonstrates {} financial performance relative to industry standards.",
        health.rating.to_string().to_lowercase()
    );
    if let Some(trends) = trends {
        if trends.cash_flow_trend == Trend::Negative {
            impact.push_str(" Negative operating cash flow warrants close monitoring.");
        }
    }

    Insight {
        category: InsightCategory::OverallAssessment,
        insight,
        recommendation,
        impact,
        priority: if health.overall < dec!(60) {
            Priority::High
        } else {
            Priority::Medium
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Statement;
    use crate::report::HealthRating;
    use std::collections::BTreeMap;

    fn health(l: Decimal, lev: Decimal, p: Decimal, e: Decimal) -> HealthScore {
        let overall = (l + lev + p + e) / dec!(4);
        HealthScore {
            liquidity: l,
            leverage: lev,
            profitability: p,
            efficiency: e,
            overall,
            rating: HealthRating::from_score(overall),
        }
    }

    fn full_ratios() -> RatioSet {
        let items: BTreeMap<String, Decimal> = [
            ("current_assets", dec!(400)),
            ("current_liabilities", dec!(500)),
            ("inventory", dec!(100)),
            ("total_liabilities", dec!(3000)),
            ("equity", dec!(1000)),
            ("total_assets", dec!(4000)),
            ("net_income", dec!(-100)),
            ("revenue", dec!(1000)),
            ("operating_income", dec!(50)),
            ("interest_expense", dec!(40)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        crate::ratios::compute(&Statement {
            items,
            series: BTreeMap::new(),
        })
    }

    #[test]
    fn output_sorted_by_priority_rank() {
        let ratios = full_ratios();
        let health = crate::score::score(&ratios);
        let insights = generate(&ratios, &health, None);

        let ranks: Vec<u8> = insights.iter().map(|i| i.priority.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn overall_assessment_always_present() {
        let ratios = crate::ratios::compute(&Statement::default());
        let health = crate::score::score(&ratios);
        let insights = generate(&ratios, &health, None);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].category, InsightCategory::OverallAssessment);
    }

    #[test]
    fn weakest_and_strongest_named() {
        let h = health(dec!(90), dec!(40), dec!(70), dec!(60));
        let insight = overall_assessment(&h, None);
        assert!(insight.recommendation.contains("deleveraging"));
        assert!(insight.recommendation.contains("strength in Liquidity"));
        assert!(insight.recommendation.contains("improvements in Leverage"));
    }

    #[test]
    fn ties_resolve_in_declaration_order() {
        let h = health(dec!(50), dec!(50), dec!(50), dec!(50));
        let insight = overall_assessment(&h, None);
        // All equal: both min and max resolve to liquidity.
        assert!(insight
            .recommendation
            .contains("Strengthen working capital management"));
        assert!(insight.recommendation.contains("strength in Liquidity"));
    }

    #[test]
    fn low_overall_score_raises_priority() {
        let low = overall_assessment(&health(dec!(40), dec!(40), dec!(40), dec!(40)), None);
        assert_eq!(low.priority, Priority::High);

        let fine = overall_assessment(&health(dec!(80), dec!(80), dec!(80), dec!(80)), None);
        assert_eq!(fine.priority, Priority::Medium);
    }

    #[test]
    fn negative_cash_flow_trend_noted() {
        let trends = TrendSignals {
            revenue_trend: Trend::Positive,
            profit_trend: Trend::Positive,
            cash_flow_trend: Trend::Negative,
            key_observations: vec![],
        };
        let insight = overall_assessment(&health(dec!(80), dec!(80), dec!(80), dec!(80)), Some(&trends));
        assert!(insight.impact.contains("Negative operating cash flow"));
    }

    #[test]
    fn identical_input_identical_output() {
        let ratios = full_ratios();
        let health = crate::score::score(&ratios);
        let a = generate(&ratios, &health, None);
        let b = generate(&ratios, &health, None);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
