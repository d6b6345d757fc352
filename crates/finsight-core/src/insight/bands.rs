//! Per-category insight band cascades.
//!
//! Each sub-metric walks a fixed cascade of mutually exclusive bands and
//! produces at most one insight. Absent and indeterminate ratios contribute
//! nothing. The current_ratio cascade is exhaustive over the real line, so
//! a present current ratio always yields exactly one insight.

use crate::ratios::{
    EfficiencyRatios, LeverageRatios, LiquidityRatios, ProfitabilityRatios, RatioValue,
};
use crate::report::{Insight, InsightCategory, Priority};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn liquidity(ratios: &LiquidityRatios) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let RatioValue::Present(current_ratio) = ratios.current_ratio {
        let r = current_ratio.round_dp(2);
        insights.push(if current_ratio < dec!(1.0) {
            Insight {
                category: InsightCategory::Liquidity,
                insight: format!(
                    "Critical liquidity concern: current ratio of {r} indicates insufficient short-term assets to cover liabilities."
                ),
                recommendation: "Accelerate receivables collection, reduce inventory levels, negotiate extended supplier payment terms, or secure a short-term credit line.".into(),
                impact: "High risk of cash flow crisis and potential inability to meet obligations".into(),
                priority: Priority::Critical,
            }
        } else if current_ratio < dec!(1.5) {
            Insight {
                category: InsightCategory::Liquidity,
                insight: format!(
                    "Liquidity is below the healthy range. Current ratio of {r} suggests tight working capital."
                ),
                recommendation: "Build cash reserves by improving collection processes and optimizing inventory turnover. Target a current ratio above 1.5.".into(),
                impact: "May face challenges during economic downturns or unexpected expenses".into(),
                priority: Priority::High,
            }
        } else if current_ratio > dec!(3.0) {
            Insight {
                category: InsightCategory::Liquidity,
                insight: format!(
                    "Excess liquidity detected. Current ratio of {r} may indicate inefficient asset utilization."
                ),
                recommendation: "Consider investing excess cash in growth initiatives, reducing expensive debt, or returning capital to shareholders.".into(),
                impact: "Opportunity cost of holding idle assets instead of productive investments".into(),
                priority: Priority::Medium,
            }
        } else {
            Insight {
                category: InsightCategory::Liquidity,
                insight: format!(
                    "Strong liquidity position with current ratio of {r} in the healthy range (1.5-3.0)."
                ),
                recommendation: "Maintain current working capital management practices and continue monitoring receivables and inventory levels.".into(),
                impact: "Well-positioned to handle normal business operations and moderate challenges".into(),
                priority: Priority::Low,
            }
        });
    }

    if let RatioValue::Present(quick_ratio) = ratios.quick_ratio {
        if quick_ratio < dec!(1.0) {
            insights.push(Insight {
                category: InsightCategory::Liquidity,
                insight: format!(
                    "Quick ratio of {} shows dependence on inventory to meet obligations.",
                    quick_ratio.round_dp(2)
                ),
                recommendation: "Reduce inventory dependency by accelerating the cash conversion cycle; focus on receivables management.".into(),
                impact: "Vulnerable if inventory cannot be quickly converted to cash".into(),
                priority: Priority::High,
            });
        }
    }

    insights
}

pub fn leverage(ratios: &LeverageRatios) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let RatioValue::Present(debt_to_equity) = ratios.debt_to_equity {
        let r = debt_to_equity.round_dp(2);
        if debt_to_equity > dec!(2.0) {
            insights.push(Insight {
                category: InsightCategory::Leverage,
                insight: format!(
                    "High leverage: debt-to-equity ratio of {r} significantly exceeds the healthy range (0.5-1.5)."
                ),
                recommendation: "Prioritize deleveraging: pay down debt from operating cash, raise equity if feasible, or sell non-core assets. Avoid new debt.".into(),
                impact: "High financial risk, vulnerability to interest rate increases, reduced financial flexibility".into(),
                priority: Priority::Critical,
            });
        } else if debt_to_equity > dec!(1.5) {
            insights.push(Insight {
                category: InsightCategory::Leverage,
                insight: format!("Elevated leverage at {r} debt-to-equity ratio."),
                recommendation: "Focus on gradual deleveraging. Prioritize debt repayment in capital allocation and monitor credit metrics closely.".into(),
                impact: "Moderate financial risk; may face constraints in raising additional capital".into(),
                priority: Priority::High,
            });
        } else if debt_to_equity < dec!(0.3) {
            insights.push(Insight {
                category: InsightCategory::Leverage,
                insight: format!("Conservative capital structure with {r} debt-to-equity ratio."),
                recommendation: "Consider strategic use of debt to optimize the capital structure; tax benefits of debt may be underutilized.".into(),
                impact: "Potential to enhance returns through modest leverage in favorable market conditions".into(),
                priority: Priority::Low,
            });
        }
    }

    if let RatioValue::Present(coverage) = ratios.interest_coverage {
        if coverage > Decimal::ZERO && coverage < dec!(2.5) {
            insights.push(Insight {
                category: InsightCategory::Leverage,
                insight: format!(
                    "Weak interest coverage at {}x indicates limited buffer for debt service.",
                    coverage.round_dp(2)
                ),
                recommendation: "Improve EBITDA through operational efficiency and revenue growth; consider refinancing at lower rates if possible.".into(),
                impact: "Risk of debt default if earnings decline or interest rates rise".into(),
                priority: Priority::Critical,
            });
        } else if coverage > dec!(5.0) {
            insights.push(Insight {
                category: InsightCategory::Leverage,
                insight: format!(
                    "Strong interest coverage of {}x provides a comfortable debt service cushion.",
                    coverage.round_dp(2)
                ),
                recommendation: "Debt service is well covered; additional leverage is an option if strategic opportunities arise.".into(),
                impact: "Low financial distress risk, flexibility for additional borrowing".into(),
                priority: Priority::Low,
            });
        }
    }

    insights
}

pub fn profitability(ratios: &ProfitabilityRatios) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let RatioValue::Present(net_margin) = ratios.net_margin {
        let pct = (net_margin * dec!(100)).round_dp(1);
        if net_margin < Decimal::ZERO {
            insights.push(Insight {
                category: InsightCategory::Profitability,
                insight: format!("Operating at a loss with {pct}% net margin."),
                recommendation: "Urgent focus needed on revenue growth, cost reduction across all expense categories, product mix optimization, and pricing power.".into(),
                impact: "Unsustainable business model; cash burn threatens viability".into(),
                priority: Priority::Critical,
            });
        } else if net_margin < dec!(0.05) {
            insights.push(Insight {
                category: InsightCategory::Profitability,
                insight: format!("Thin margins at {pct}% leave little buffer for market changes."),
                recommendation: "Focus on margin expansion through operational leverage, pricing optimization, and cost discipline. Benchmark against industry leaders.".into(),
                impact: "Vulnerable to competitive pressure and cost increases".into(),
                priority: Priority::High,
            });
        } else if net_margin > dec!(0.20) {
            insights.push(Insight {
                category: InsightCategory::Profitability,
                insight: format!(
                    "Exceptional profitability with {pct}% net margin, exceeding industry standards."
                ),
                recommendation: "Strong competitive position. Consider reinvesting excess returns in growth or innovation while maintaining pricing discipline.".into(),
                impact: "Market-leading profitability provides strategic options and resilience".into(),
                priority: Priority::Low,
            });
        }
    }

    if let RatioValue::Present(roe) = ratios.roe {
        let pct = (roe * dec!(100)).round_dp(1);
        if roe > Decimal::ZERO && roe < dec!(0.10) {
            insights.push(Insight {
                category: InsightCategory::Profitability,
                insight: format!("ROE of {pct}% is below the cost-of-equity threshold."),
                recommendation: "Shareholders are not earning adequate returns. Work the DuPont components: improve margins, increase asset turnover, or optimize the capital structure.".into(),
                impact: "Poor shareholder value creation; may struggle to attract capital".into(),
                priority: Priority::High,
            });
        } else if roe > dec!(0.20) {
            insights.push(Insight {
                category: InsightCategory::Profitability,
                insight: format!("Outstanding ROE of {pct}% demonstrates superior capital efficiency."),
                recommendation: "Sustain the competitive advantages driving high returns and monitor for mean reversion.".into(),
                impact: "Strong value creation, attractive investment profile".into(),
                priority: Priority::Low,
            });
        }
    }

    insights
}

pub fn efficiency(ratios: &EfficiencyRatios) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let RatioValue::Present(asset_turnover) = ratios.asset_turnover {
        let r = asset_turnover.round_dp(2);
        if asset_turnover < dec!(0.5) {
            insights.push(Insight {
                category: InsightCategory::Efficiency,
                insight: format!("Low asset turnover of {r} indicates underutilized assets."),
                recommendation: "Improve asset productivity: grow revenue on the existing asset base, divest non-productive assets, optimize capacity utilization.".into(),
                impact: "Suboptimal return on invested capital".into(),
                priority: Priority::Medium,
            });
        } else if asset_turnover > dec!(2.0) {
            insights.push(Insight {
                category: InsightCategory::Efficiency,
                insight: format!("High asset turnover of {r} shows efficient asset utilization."),
                recommendation: "Strong operational efficiency. Ensure growth does not strain capacity; plan capital investments proactively.".into(),
                impact: "Efficient operations supporting strong financial performance".into(),
                priority: Priority::Low,
            });
        }
    }

    if let RatioValue::Present(cycle) = ratios.cash_conversion_cycle {
        let days = cycle.round_dp(0);
        if cycle > dec!(90) {
            insights.push(Insight {
                category: InsightCategory::Efficiency,
                insight: format!(
                    "Extended cash conversion cycle of {days} days ties up significant working capital."
                ),
                recommendation: "Accelerate cash conversion: reduce days sales outstanding through better collections, optimize inventory levels, and extend payables where feasible.".into(),
                impact: "Working capital tied up in the operating cycle constrains growth funding".into(),
                priority: Priority::High,
            });
        } else if cycle < dec!(30) {
            insights.push(Insight {
                category: InsightCategory::Efficiency,
                insight: format!(
                    "Excellent cash conversion cycle of {days} days demonstrates superior working capital management."
                ),
                recommendation: "Maintain best-in-class working capital practices; this is a competitive advantage worth protecting.".into(),
                impact: "Efficient cash generation supports growth without additional financing needs".into(),
                priority: Priority::Low,
            });
        }
    }

    insights
}
