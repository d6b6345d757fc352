use crate::model::Statement;
use crate::ratios::outcome::{
    EfficiencyRatios, GrowthRatios, LeverageRatios, LiquidityRatios, ProfitabilityRatios,
    RatioSet, RatioValue, ValuationRatios,
};
use rust_decimal::Decimal;

/// Compute the full ratio set from one statement snapshot.
///
/// Pure and total: every ratio degrades independently to `Absent` or
/// `Indeterminate`, no input combination can abort the computation.
pub fn compute(statement: &Statement) -> RatioSet {
    RatioSet {
        liquidity: liquidity(statement),
        leverage: leverage(statement),
        profitability: profitability(statement),
        efficiency: efficiency(statement),
        valuation: valuation(statement),
        growth: growth(statement),
    }
}

/// The one safe-division policy every ratio goes through.
fn divide(numerator: Option<Decimal>, denominator: Option<Decimal>) -> RatioValue {
    match (numerator, denominator) {
        (Some(n), Some(d)) => {
            if d.is_zero() {
                RatioValue::Indeterminate
            } else {
                RatioValue::Present(n / d)
            }
        }
        _ => RatioValue::Absent,
    }
}

/// Divide where the denominator is itself a computed ratio.
fn divide_through(numerator: Option<Decimal>, denominator: RatioValue) -> RatioValue {
    match denominator {
        RatioValue::Present(d) => divide(numerator, Some(d)),
        RatioValue::Absent => RatioValue::Absent,
        RatioValue::Indeterminate => RatioValue::Indeterminate,
    }
}

fn subtract(a: Option<Decimal>, b: Option<Decimal>) -> RatioValue {
    match (a, b) {
        (Some(a), Some(b)) => RatioValue::Present(a - b),
        _ => RatioValue::Absent,
    }
}

/// 365 / turnover.
fn days_from_turnover(turnover: RatioValue) -> RatioValue {
    match turnover {
        RatioValue::Present(t) => divide(Some(Decimal::from(365)), Some(t)),
        other => other,
    }
}

fn liquidity(st: &Statement) -> LiquidityRatios {
    let current_assets = st.get("current_assets");
    let current_liabilities = st.get("current_liabilities");
    let inventory = st.get("inventory");

    let quick_assets = match (current_assets, inventory) {
        (Some(a), Some(i)) => Some(a - i),
        _ => None,
    };

    let daily_operating_expenses = st
        .get("operating_expenses")
        .map(|e| e / Decimal::from(365));

    LiquidityRatios {
        current_ratio: divide(current_assets, current_liabilities),
        quick_ratio: divide(quick_assets, current_liabilities),
        cash_ratio: divide(st.get("cash"), current_liabilities),
        working_capital: subtract(current_assets, current_liabilities),
        defensive_interval_days: divide(quick_assets, daily_operating_expenses),
    }
}

fn leverage(st: &Statement) -> LeverageRatios {
    let total_liabilities = st.get("total_liabilities");
    let total_assets = st.get("total_assets");
    let equity = st.get("equity");
    let interest_expense = st.get("interest_expense");

    // Operating income, falling back to separately reported EBIT.
    let ebit = st.get("operating_income").or_else(|| st.get("ebit"));

    LeverageRatios {
        debt_to_equity: divide(total_liabilities, equity),
        debt_ratio: divide(total_liabilities, total_assets),
        equity_multiplier: divide(total_assets, equity),
        equity_ratio: divide(equity, total_assets),
        interest_coverage: divide(ebit, interest_expense),
        dscr: divide(st.get("ebitda"), interest_expense),
    }
}

fn profitability(st: &Statement) -> ProfitabilityRatios {
    let revenue = st.get("revenue");
    let net_income = st.get("net_income");
    let total_assets = st.get("total_assets");
    let equity = st.get("equity");

    let invested_capital = match (equity, st.get("total_liabilities")) {
        (Some(e), Some(l)) => Some(e + l),
        _ => None,
    };

    let net_margin = divide(net_income, revenue);

    ProfitabilityRatios {
        gross_margin: divide(st.get("gross_profit"), revenue),
        operating_margin: divide(st.get("operating_income"), revenue),
        net_margin,
        ebitda_margin: divide(st.get("ebitda"), revenue),
        roa: divide(net_income, total_assets),
        roe: divide(net_income, equity),
        roic: divide(net_income, invested_capital),
        dupont_net_margin: net_margin,
        dupont_asset_turnover: divide(revenue, total_assets),
        dupont_equity_multiplier: divide(total_assets, equity),
    }
}

fn efficiency(st: &Statement) -> EfficiencyRatios {
    let revenue = st.get("revenue");
    let cogs = st.get("cogs");

    let inventory_turnover = divide(cogs, st.get("inventory"));
    let receivables_turnover = divide(revenue, st.get("receivables"));
    let payables_turnover = divide(cogs, st.get("payables"));

    let days_inventory = days_from_turnover(inventory_turnover);
    let days_sales_outstanding = days_from_turnover(receivables_turnover);
    let days_payables_outstanding = days_from_turnover(payables_turnover);

    let working_capital = match (st.get("current_assets"), st.get("current_liabilities")) {
        (Some(a), Some(l)) => Some(a - l),
        _ => None,
    };

    EfficiencyRatios {
        asset_turnover: divide(revenue, st.get("total_assets")),
        inventory_turnover,
        days_inventory,
        receivables_turnover,
        days_sales_outstanding,
        payables_turnover,
        days_payables_outstanding,
        cash_conversion_cycle: cash_conversion_cycle(
            days_inventory,
            days_sales_outstanding,
            days_payables_outstanding,
        ),
        working_capital_turnover: divide(revenue, working_capital),
    }
}

/// days_inventory + days_sales_outstanding - days_payables_outstanding.
///
/// Any absent component makes the cycle absent; otherwise any indeterminate
/// component makes it indeterminate.
fn cash_conversion_cycle(di: RatioValue, dso: RatioValue, dpo: RatioValue) -> RatioValue {
    let components = [di, dso, dpo];
    if components.iter().any(|c| matches!(c, RatioValue::Absent)) {
        return RatioValue::Absent;
    }
    if components
        .iter()
        .any(|c| matches!(c, RatioValue::Indeterminate))
    {
        return RatioValue::Indeterminate;
    }
    match (di.value(), dso.value(), dpo.value()) {
        (Some(di), Some(dso), Some(dpo)) => RatioValue::Present(di + dso - dpo),
        _ => RatioValue::Absent,
    }
}

fn valuation(st: &Statement) -> ValuationRatios {
    let shares = st.get("shares_outstanding");
    let price = st.get("share_price");
    let equity = st.get("equity");

    let eps = divide(st.get("net_income"), shares);
    let book_value_per_share = divide(equity, shares);

    let market_cap = match (price, shares) {
        (Some(p), Some(s)) => Some(p * s),
        _ => None,
    };

    ValuationRatios {
        eps,
        pe_ratio: divide_through(price, eps),
        pb_ratio: divide_through(price, book_value_per_share),
        ps_ratio: divide(market_cap, st.get("revenue")),
    }
}

fn growth(st: &Statement) -> GrowthRatios {
    GrowthRatios {
        revenue_growth: period_growth(st, "revenue"),
        earnings_growth: period_growth(st, "net_income"),
        asset_growth: period_growth(st, "total_assets"),
    }
}

/// (latest - previous) / previous over the retained series.
fn period_growth(st: &Statement, key: &str) -> RatioValue {
    match st.series(key) {
        Some(series) if series.len() >= 2 => {
            let latest = series[series.len() - 1];
            let previous = series[series.len() - 2];
            divide(Some(latest - previous), Some(previous))
        }
        _ => RatioValue::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratios::outcome::KNOWN_RATIOS;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    fn statement(pairs: &[(&str, Decimal)]) -> Statement {
        Statement {
            items: pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            series: BTreeMap::new(),
        }
    }

    #[test]
    fn current_ratio_exact() {
        let st = statement(&[
            ("current_assets", dec!(1000000)),
            ("current_liabilities", dec!(500000)),
        ]);
        let r = compute(&st);
        assert_eq!(r.liquidity.current_ratio, RatioValue::Present(dec!(2)));
    }

    #[test]
    fn missing_denominator_is_absent() {
        let st = statement(&[("current_assets", dec!(1000))]);
        let r = compute(&st);
        assert_eq!(r.liquidity.current_ratio, RatioValue::Absent);
    }

    #[test]
    fn zero_denominator_is_indeterminate() {
        let st = statement(&[
            ("current_assets", dec!(1000)),
            ("current_liabilities", dec!(0)),
        ]);
        let r = compute(&st);
        assert_eq!(r.liquidity.current_ratio, RatioValue::Indeterminate);
        // Working capital is a subtraction and still computes.
        assert_eq!(r.liquidity.working_capital, RatioValue::Present(dec!(1000)));
    }

    #[test]
    fn quick_ratio_subtracts_inventory() {
        let st = statement(&[
            ("current_assets", dec!(1000000)),
            ("inventory", dec!(200000)),
            ("current_liabilities", dec!(500000)),
        ]);
        let r = compute(&st);
        assert_eq!(r.liquidity.quick_ratio, RatioValue::Present(dec!(1.6)));
    }

    #[test]
    fn quick_ratio_absent_without_inventory() {
        let st = statement(&[
            ("current_assets", dec!(1000000)),
            ("current_liabilities", dec!(500000)),
        ]);
        let r = compute(&st);
        assert_eq!(r.liquidity.quick_ratio, RatioValue::Absent);
    }

    #[test]
    fn leverage_ratios() {
        let st = statement(&[
            ("total_liabilities", dec!(800000)),
            ("equity", dec!(1200000)),
            ("total_assets", dec!(2000000)),
            ("operating_income", dec!(800000)),
            ("interest_expense", dec!(50000)),
        ]);
        let r = compute(&st);
        let dte = r.leverage.debt_to_equity.value().unwrap();
        assert!((dte - dec!(0.6667)).abs() < dec!(0.0001));
        assert_eq!(r.leverage.debt_ratio, RatioValue::Present(dec!(0.4)));
        assert_eq!(r.leverage.interest_coverage, RatioValue::Present(dec!(16)));
    }

    #[test]
    fn interest_coverage_falls_back_to_ebit() {
        let st = statement(&[("ebit", dec!(400)), ("interest_expense", dec!(100))]);
        let r = compute(&st);
        assert_eq!(r.leverage.interest_coverage, RatioValue::Present(dec!(4)));
    }

    #[test]
    fn profitability_ratios() {
        let st = statement(&[
            ("net_income", dec!(600000)),
            ("revenue", dec!(5000000)),
            ("equity", dec!(1200000)),
            ("total_assets", dec!(2000000)),
        ]);
        let r = compute(&st);
        assert_eq!(r.profitability.net_margin, RatioValue::Present(dec!(0.12)));
        assert_eq!(r.profitability.roe, RatioValue::Present(dec!(0.5)));
        assert_eq!(r.profitability.roa, RatioValue::Present(dec!(0.3)));
        assert_eq!(
            r.profitability.dupont_asset_turnover,
            RatioValue::Present(dec!(2.5))
        );
    }

    #[test]
    fn negative_values_do_not_crash() {
        let st = statement(&[
            ("net_income", dec!(-250000)),
            ("revenue", dec!(5000000)),
            ("equity", dec!(-100000)),
        ]);
        let r = compute(&st);
        assert_eq!(r.profitability.net_margin, RatioValue::Present(dec!(-0.05)));
        assert_eq!(r.profitability.roe, RatioValue::Present(dec!(2.5)));
    }

    #[test]
    fn days_metrics_from_turnover() {
        let st = statement(&[
            ("cogs", dec!(3650)),
            ("inventory", dec!(365)),
            ("revenue", dec!(7300)),
            ("receivables", dec!(365)),
            ("payables", dec!(365)),
        ]);
        let r = compute(&st);
        assert_eq!(r.efficiency.days_inventory, RatioValue::Present(dec!(36.5)));
        assert_eq!(
            r.efficiency.days_sales_outstanding,
            RatioValue::Present(dec!(18.25))
        );
        // CCC = 36.5 + 18.25 - 36.5
        assert_eq!(
            r.efficiency.cash_conversion_cycle,
            RatioValue::Present(dec!(18.25))
        );
    }

    #[test]
    fn zero_turnover_propagates_indeterminate_to_days() {
        // cogs = 0 -> inventory_turnover = 0 -> 365/0 is indeterminate
        let st = statement(&[("cogs", dec!(0)), ("inventory", dec!(100))]);
        let r = compute(&st);
        assert_eq!(r.efficiency.inventory_turnover, RatioValue::Present(dec!(0)));
        assert_eq!(r.efficiency.days_inventory, RatioValue::Indeterminate);
    }

    #[test]
    fn ccc_absent_when_any_component_missing() {
        let st = statement(&[("cogs", dec!(3650)), ("inventory", dec!(365))]);
        let r = compute(&st);
        assert_eq!(r.efficiency.cash_conversion_cycle, RatioValue::Absent);
    }

    #[test]
    fn valuation_absent_without_market_data() {
        let st = statement(&[("net_income", dec!(600000)), ("revenue", dec!(5000000))]);
        let r = compute(&st);
        assert_eq!(r.valuation.eps, RatioValue::Absent);
        assert_eq!(r.valuation.pe_ratio, RatioValue::Absent);
        assert_eq!(r.valuation.pb_ratio, RatioValue::Absent);
        assert_eq!(r.valuation.ps_ratio, RatioValue::Absent);
    }

    #[test]
    fn valuation_present_with_market_data() {
        let st = statement(&[
            ("net_income", dec!(1000)),
            ("shares_outstanding", dec!(100)),
            ("share_price", dec!(50)),
            ("equity", dec!(2000)),
            ("revenue", dec!(10000)),
        ]);
        let r = compute(&st);
        assert_eq!(r.valuation.eps, RatioValue::Present(dec!(10)));
        assert_eq!(r.valuation.pe_ratio, RatioValue::Present(dec!(5)));
        assert_eq!(r.valuation.pb_ratio, RatioValue::Present(dec!(2.5)));
        assert_eq!(r.valuation.ps_ratio, RatioValue::Present(dec!(0.5)));
    }

    #[test]
    fn growth_absent_for_single_period() {
        let st = statement(&[("revenue", dec!(5000000))]);
        let r = compute(&st);
        assert_eq!(r.growth.revenue_growth, RatioValue::Absent);
    }

    #[test]
    fn growth_from_series() {
        let mut st = statement(&[("revenue", dec!(5000))]);
        st.series
            .insert("revenue".into(), vec![dec!(4000), dec!(5000)]);
        let r = compute(&st);
        assert_eq!(r.growth.revenue_growth, RatioValue::Present(dec!(0.25)));
    }

    #[test]
    fn growth_indeterminate_when_previous_is_zero() {
        let mut st = statement(&[("revenue", dec!(5000))]);
        st.series.insert("revenue".into(), vec![dec!(0), dec!(5000)]);
        let r = compute(&st);
        assert_eq!(r.growth.revenue_growth, RatioValue::Indeterminate);
    }

    #[test]
    fn entries_cover_known_ratios() {
        let r = compute(&statement(&[]));
        let names: Vec<&str> = r.entries().iter().map(|(_, n, _)| *n).collect();
        assert_eq!(names.len(), KNOWN_RATIOS.len());
        for name in KNOWN_RATIOS {
            assert!(names.contains(name), "missing {name}");
        }
    }
}
