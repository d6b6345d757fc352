use std::collections::HashMap;
use std::sync::LazyLock;

/// The canonical statement-item vocabulary.
///
/// Keys outside this list still survive normalization (unknown items are
/// carried through untouched), but only these names participate in ratio
/// computation and identity inference.
pub const ITEM_VOCABULARY: &[&str] = &[
    "total_assets",
    "current_assets",
    "current_liabilities",
    "total_liabilities",
    "equity",
    "cash",
    "inventory",
    "receivables",
    "payables",
    "revenue",
    "cogs",
    "gross_profit",
    "operating_income",
    "ebit",
    "net_income",
    "ebitda",
    "interest_expense",
    "operating_expenses",
    "depreciation",
    "amortization",
    "operating_cash_flow",
    "investing_cash_flow",
    "financing_cash_flow",
    "free_cash_flow",
    "shares_outstanding",
    "share_price",
];

/// Normalize a statement-item label to a canonical key.
///
/// Steps:
/// 1. Lowercase and trim
/// 2. Replace separators and punctuation with underscores
/// 3. Collapse repeated underscores
/// 4. Look up in the alias map
pub fn canonical_item(raw: &str) -> String {
    let s = raw.trim().to_lowercase();

    let mut normalized = String::with_capacity(s.len());
    let mut prev_underscore = true; // start true to skip leading underscores
    for c in s.chars() {
        match c {
            'a'..='z' | '0'..='9' => {
                normalized.push(c);
                prev_underscore = false;
            }
            _ => {
                if !prev_underscore {
                    normalized.push('_');
                }
                prev_underscore = true;
            }
        }
    }
    if normalized.ends_with('_') {
        normalized.pop();
    }

    match ALIASES.get(normalized.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => normalized,
    }
}

static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Balance sheet
    m.insert("total_equity", "equity");
    m.insert("shareholders_equity", "equity");
    m.insert("shareholder_equity", "equity");
    m.insert("stockholders_equity", "equity");
    m.insert("total_shareholders_equity", "equity");
    m.insert("cash_and_equivalents", "cash");
    m.insert("cash_and_cash_equivalents", "cash");
    m.insert("cash_cash_equivalents", "cash");
    m.insert("cash_equivalents", "cash");
    m.insert("inventories", "inventory");
    m.insert("accounts_receivable", "receivables");
    m.insert("accounts_receivables", "receivables");
    m.insert("trade_receivables", "receivables");
    m.insert("accounts_payable", "payables");
    m.insert("accounts_payables", "payables");
    m.insert("trade_payables", "payables");
    m.insert("short_term_liabilities", "current_liabilities");
    m.insert("total_current_liabilities", "current_liabilities");
    m.insert("total_current_assets", "current_assets");
    m.insert("total_debt", "total_liabilities");

    // Income statement
    m.insert("sales", "revenue");
    m.insert("total_revenue", "revenue");
    m.insert("net_sales", "revenue");
    m.insert("turnover", "revenue");
    m.insert("cost_of_goods_sold", "cogs");
    m.insert("cost_of_revenue", "cogs");
    m.insert("cost_of_sales", "cogs");
    m.insert("operating_profit", "operating_income");
    m.insert("net_profit", "net_income");
    m.insert("net_earnings", "net_income");
    m.insert("profit_after_tax", "net_income");
    m.insert("interest_expenses", "interest_expense");
    m.insert("opex", "operating_expenses");
    m.insert("depreciation_and_amortization", "depreciation");

    // Cash flow
    m.insert("cash_from_operations", "operating_cash_flow");
    m.insert("cash_flow_from_operations", "operating_cash_flow");
    m.insert("operating_activities", "operating_cash_flow");
    m.insert("investing_activities", "investing_cash_flow");
    m.insert("financing_activities", "financing_cash_flow");
    m.insert("fcf", "free_cash_flow");

    // Market data
    m.insert("shares", "shares_outstanding");
    m.insert("share_count", "shares_outstanding");
    m.insert("price_per_share", "share_price");
    m.insert("stock_price", "share_price");

    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_lowercase() {
        assert_eq!(canonical_item("Revenue"), "revenue");
    }

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(canonical_item("Total Assets"), "total_assets");
    }

    #[test]
    fn alias_lookup() {
        assert_eq!(canonical_item("Shareholders' Equity"), "equity");
        assert_eq!(canonical_item("Cost of Goods Sold"), "cogs");
        assert_eq!(canonical_item("Sales"), "revenue");
    }

    #[test]
    fn punctuation_collapsed() {
        assert_eq!(canonical_item("Cash & Cash Equivalents"), "cash");
        assert_eq!(canonical_item("  Net  Income  "), "net_income");
    }

    #[test]
    fn unknown_item_passthrough() {
        assert_eq!(canonical_item("Goodwill"), "goodwill");
    }

    #[test]
    fn vocabulary_is_canonical() {
        // Every vocabulary entry must normalize to itself.
        for item in ITEM_VOCABULARY {
            assert_eq!(&canonical_item(item), item);
        }
    }
}
