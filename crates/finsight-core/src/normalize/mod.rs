pub mod aliases;
pub mod coerce;
pub mod infer;

use crate::model::{RawBundle, RawMetrics, Statement};
use aliases::canonical_item;
use coerce::{coerce_scalar, coerce_series};
use infer::AppliedInference;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A field dropped during normalization, with the reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedField {
    pub key: String,
    pub reason: String,
}

/// The Normalizer's output: one canonical statement snapshot plus a journal
/// of what was inferred and what was dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedStatement {
    pub statement: Statement,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applied: Vec<AppliedInference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedField>,
}

/// Merge a raw collaborator bundle into one canonical statement.
///
/// Discovery order is fixed; later sources overwrite earlier ones on key
/// collision: balance_sheet, income_statement, cash_flow, metrics,
/// aggregated_metrics, sheets (by sheet name), data (by row order).
/// Uncoercible values are dropped and journaled, never fatal. A bundle with
/// no recognized structure yields an empty statement.
pub fn normalize_bundle(bundle: &RawBundle) -> NormalizedStatement {
    let mut items: BTreeMap<String, Decimal> = BTreeMap::new();
    let mut series: BTreeMap<String, Vec<Decimal>> = BTreeMap::new();
    let mut skipped = Vec::new();

    let flat_sources = [
        &bundle.balance_sheet,
        &bundle.income_statement,
        &bundle.cash_flow,
        &bundle.metrics,
        &bundle.aggregated_metrics,
    ];
    for source in flat_sources.into_iter().filter_map(|s| s.as_ref()) {
        merge_metrics(source, &mut items, &mut series, &mut skipped);
    }

    if let Some(sheets) = &bundle.sheets {
        for sheet in sheets.values() {
            merge_metrics(sheet, &mut items, &mut series, &mut skipped);
        }
    }

    if let Some(rows) = &bundle.data {
        for row in rows {
            merge_metrics(row, &mut items, &mut series, &mut skipped);
        }
    }

    let applied = infer::infer_missing(&mut items);

    NormalizedStatement {
        statement: Statement { items, series },
        applied,
        skipped,
    }
}

fn merge_metrics(
    source: &RawMetrics,
    items: &mut BTreeMap<String, Decimal>,
    series: &mut BTreeMap<String, Vec<Decimal>>,
    skipped: &mut Vec<SkippedField>,
) {
    for (raw_key, raw_value) in source {
        let key = canonical_item(raw_key);
        if key.is_empty() {
            continue;
        }

        match coerce_scalar(raw_value) {
            Some(value) => {
                items.insert(key.clone(), value);
                if let Some(values) = coerce_series(raw_value) {
                    series.insert(key, values);
                }
            }
            None => {
                tracing::warn!(key = %raw_key, "dropped non-numeric value");
                skipped.push(SkippedField {
                    key: raw_key.clone(),
                    reason: "value could not be coerced to a number".into(),
                });
            }
        }
    }
}
