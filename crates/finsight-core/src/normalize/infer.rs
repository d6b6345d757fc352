use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Record of one accounting-identity inference applied during normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedInference {
    /// The item that was backfilled.
    pub target: String,
    /// Human-readable identity, e.g. "total_liabilities + equity".
    pub rule: String,
    pub value: Decimal,
}

/// Backfill missing statement items from accounting identities.
///
/// Rules run in a fixed order, each only when its target is absent and all
/// of its inputs are present. A single pass suffices: later rules may
/// consume values produced by earlier ones, and no earlier rule depends on
/// a later target. The current-assets estimate runs last because it is a
/// heuristic with no countervailing real data.
pub fn infer_missing(items: &mut BTreeMap<String, Decimal>) -> Vec<AppliedInference> {
    let mut applied = Vec::new();

    // total_assets = total_liabilities + equity
    if !items.contains_key("total_assets") {
        if let (Some(&liabilities), Some(&equity)) =
            (items.get("total_liabilities"), items.get("equity"))
        {
            record(&mut applied, items, "total_assets", "total_liabilities + equity", liabilities + equity);
        }
    }

    // gross_profit = revenue - cogs
    if !items.contains_key("gross_profit") {
        if let (Some(&revenue), Some(&cogs)) = (items.get("revenue"), items.get("cogs")) {
            record(&mut applied, items, "gross_profit", "revenue - cogs", revenue - cogs);
        }
    }

    // ebit = operating_income (alias when EBIT is not separately reported)
    if !items.contains_key("ebit") {
        if let Some(&operating_income) = items.get("operating_income") {
            record(&mut applied, items, "ebit", "operating_income", operating_income);
        }
    }

    // ebitda = operating_income + depreciation + amortization
    if !items.contains_key("ebitda") {
        if let (Some(&operating_income), Some(&depreciation), Some(&amortization)) = (
            items.get("operating_income"),
            items.get("depreciation"),
            items.get("amortization"),
        ) {
            record(
                &mut applied,
                items,
                "ebitda",
                "operating_income + depreciation + amortization",
                operating_income + depreciation + amortization,
            );
        }
    }

    // current_assets ~= 40% of total_assets (conservative estimate)
    if !items.contains_key("current_assets") {
        if let Some(&total_assets) = items.get("total_assets") {
            record(
                &mut applied,
                items,
                "current_assets",
                "total_assets * 0.4 (estimate)",
                total_assets * dec!(0.4),
            );
        }
    }

    applied
}

fn record(
    applied: &mut Vec<AppliedInference>,
    items: &mut BTreeMap<String, Decimal>,
    target: &str,
    rule: &str,
    value: Decimal,
) {
    tracing::debug!(item = target, rule = rule, "inferred statement item");
    items.insert(target.to_string(), value);
    applied.push(AppliedInference {
        target: target.to_string(),
        rule: rule.to_string(),
        value,
    });
}
