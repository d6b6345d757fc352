use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one ratio computation.
///
/// `Absent` (a required input was missing) and `Indeterminate` (the
/// denominator was present but exactly zero) are deliberately distinct:
/// the first means "we don't know", the second "the ratio does not exist
/// for this statement". A computed zero is `Present(0)` and is treated as
/// a real value everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioValue {
    Present(Decimal),
    Absent,
    Indeterminate,
}

impl RatioValue {
    pub fn value(&self) -> Option<Decimal> {
        match self {
            RatioValue::Present(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, RatioValue::Present(_))
    }
}

impl fmt::Display for RatioValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioValue::Present(v) => write!(f, "{}", v.round_dp(4)),
            RatioValue::Absent => write!(f, "n/a"),
            RatioValue::Indeterminate => write!(f, "div/0"),
        }
    }
}

/// The closed set of ratio categories.
///
/// Declaration order of the core four (liquidity, leverage, profitability,
/// efficiency) is load-bearing: scoring means, weakest/strongest selection,
/// and anomaly emission all follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioCategory {
    Liquidity,
    Leverage,
    Profitability,
    Efficiency,
    Valuation,
    Growth,
}

/// The four categories that feed the composite health score, in tie-break
/// order.
pub const CORE_CATEGORIES: [RatioCategory; 4] = [
    RatioCategory::Liquidity,
    RatioCategory::Leverage,
    RatioCategory::Profitability,
    RatioCategory::Efficiency,
];

impl fmt::Display for RatioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioCategory::Liquidity => write!(f, "Liquidity"),
            RatioCategory::Leverage => write!(f, "Leverage"),
            RatioCategory::Profitability => write!(f, "Profitability"),
            RatioCategory::Efficiency => write!(f, "Efficiency"),
            RatioCategory::Valuation => write!(f, "Valuation"),
            RatioCategory::Growth => write!(f, "Growth"),
        }
    }
}

/// Ratio names understood by benchmark profiles.
pub const KNOWN_RATIOS: &[&str] = &[
    "current_ratio",
    "quick_ratio",
    "cash_ratio",
    "working_capital",
    "defensive_interval_days",
    "debt_to_equity",
    "debt_ratio",
    "equity_multiplier",
    "equity_ratio",
    "interest_coverage",
    "dscr",
    "gross_margin",
    "operating_margin",
    "net_margin",
    "ebitda_margin",
    "roa",
    "roe",
    "roic",
    "asset_turnover",
    "inventory_turnover",
    "days_inventory",
    "receivables_turnover",
    "days_sales_outstanding",
    "payables_turnover",
    "days_payables_outstanding",
    "cash_conversion_cycle",
    "working_capital_turnover",
    "eps",
    "pe_ratio",
    "pb_ratio",
    "ps_ratio",
    "revenue_growth",
    "earnings_growth",
    "asset_growth",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidityRatios {
    pub current_ratio: RatioValue,
    pub quick_ratio: RatioValue,
    pub cash_ratio: RatioValue,
    pub working_capital: RatioValue,
    pub defensive_interval_days: RatioValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeverageRatios {
    pub debt_to_equity: RatioValue,
    pub debt_ratio: RatioValue,
    pub equity_multiplier: RatioValue,
    pub equity_ratio: RatioValue,
    pub interest_coverage: RatioValue,
    pub dscr: RatioValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityRatios {
    pub gross_margin: RatioValue,
    pub operating_margin: RatioValue,
    pub net_margin: RatioValue,
    pub ebitda_margin: RatioValue,
    pub roa: RatioValue,
    pub roe: RatioValue,
    pub roic: RatioValue,
    /// DuPont components, reported individually and never forced to
    /// reconcile with `roe` exactly.
    pub dupont_net_margin: RatioValue,
    pub dupont_asset_turnover: RatioValue,
    pub dupont_equity_multiplier: RatioValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyRatios {
    pub asset_turnover: RatioValue,
    pub inventory_turnover: RatioValue,
    pub days_inventory: RatioValue,
    pub receivables_turnover: RatioValue,
    pub days_sales_outstanding: RatioValue,
    pub payables_turnover: RatioValue,
    pub days_payables_outstanding: RatioValue,
    pub cash_conversion_cycle: RatioValue,
    pub working_capital_turnover: RatioValue,
}

/// Market-dependent ratios. Computed only when the statement carries real
/// market inputs (`share_price`, `shares_outstanding`); never fabricated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationRatios {
    pub eps: RatioValue,
    pub pe_ratio: RatioValue,
    pub pb_ratio: RatioValue,
    pub ps_ratio: RatioValue,
}

/// Period-over-period growth. Computed only from a retained series with at
/// least two periods; never defaulted from single-period data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthRatios {
    pub revenue_growth: RatioValue,
    pub earnings_growth: RatioValue,
    pub asset_growth: RatioValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioSet {
    pub liquidity: LiquidityRatios,
    pub leverage: LeverageRatios,
    pub profitability: ProfitabilityRatios,
    pub efficiency: EfficiencyRatios,
    pub valuation: ValuationRatios,
    pub growth: GrowthRatios,
}

impl RatioSet {
    /// All ratios in declaration order, with category and name. The fixed
    /// order keeps every downstream listing deterministic.
    pub fn entries(&self) -> Vec<(RatioCategory, &'static str, RatioValue)> {
        use RatioCategory::*;
        vec![
            (Liquidity, "current_ratio", self.liquidity.current_ratio),
            (Liquidity, "quick_ratio", self.liquidity.quick_ratio),
            (Liquidity, "cash_ratio", self.liquidity.cash_ratio),
            (Liquidity, "working_capital", self.liquidity.working_capital),
            (Liquidity, "defensive_interval_days", self.liquidity.defensive_interval_days),
            (Leverage, "debt_to_equity", self.leverage.debt_to_equity),
            (Leverage, "debt_ratio", self.leverage.debt_ratio),
            (Leverage, "equity_multiplier", self.leverage.equity_multiplier),
            (Leverage, "equity_ratio", self.leverage.equity_ratio),
            (Leverage, "interest_coverage", self.leverage.interest_coverage),
            (Leverage, "dscr", self.leverage.dscr),
            (Profitability, "gross_margin", self.profitability.gross_margin),
            (Profitability, "operating_margin", self.profitability.operating_margin),
            (Profitability, "net_margin", self.profitability.net_margin),
            (Profitability, "ebitda_margin", self.profitability.ebitda_margin),
            (Profitability, "roa", self.profitability.roa),
            (Profitability, "roe", self.profitability.roe),
            (Profitability, "roic", self.profitability.roic),
            (Profitability, "dupont_net_margin", self.profitability.dupont_net_margin),
            (Profitability, "dupont_asset_turnover", self.profitability.dupont_asset_turnover),
            (Profitability, "dupont_equity_multiplier", self.profitability.dupont_equity_multiplier),
            (Efficiency, "asset_turnover", self.efficiency.asset_turnover),
            (Efficiency, "inventory_turnover", self.efficiency.inventory_turnover),
            (Efficiency, "days_inventory", self.efficiency.days_inventory),
            (Efficiency, "receivables_turnover", self.efficiency.receivables_turnover),
            (Efficiency, "days_sales_outstanding", self.efficiency.days_sales_outstanding),
            (Efficiency, "payables_turnover", self.efficiency.payables_turnover),
            (Efficiency, "days_payables_outstanding", self.efficiency.days_payables_outstanding),
            (Efficiency, "cash_conversion_cycle", self.efficiency.cash_conversion_cycle),
            (Efficiency, "working_capital_turnover", self.efficiency.working_capital_turnover),
            (Valuation, "eps", self.valuation.eps),
            (Valuation, "pe_ratio", self.valuation.pe_ratio),
            (Valuation, "pb_ratio", self.valuation.pb_ratio),
            (Valuation, "ps_ratio", self.valuation.ps_ratio),
            (Growth, "revenue_growth", self.growth.revenue_growth),
            (Growth, "earnings_growth", self.growth.earnings_growth),
            (Growth, "asset_growth", self.growth.asset_growth),
        ]
    }
}
