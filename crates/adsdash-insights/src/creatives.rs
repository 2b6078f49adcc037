//! Creative selection: the first creatives with spend, in connector order.

use adsdash_core::CreativeRecord;
use adsdash_windsor::{map_creative_row, RawRow};

pub const CREATIVE_LIMIT: usize = 12;

/// Maps rows to creatives, keeps those with positive spend, and caps the list.
///
/// Ids come from the row's position in the full response, so they are
/// assigned before filtering and may skip numbers. No re-sorting is applied.
#[must_use]
pub fn select_creatives(rows: &[RawRow]) -> Vec<CreativeRecord> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| map_creative_row(index, row))
        .filter(|creative| creative.spend > 0.0)
        .take(CREATIVE_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn creative(spend: f64) -> RawRow {
        RawRow::from_value(json!({ "ad_name": format!("Ad {spend}"), "spend": spend })).unwrap()
    }

    #[test]
    fn drops_zero_spend_and_keeps_provider_order() {
        let rows = vec![creative(5.0), creative(0.0), creative(50.0), creative(1.0)];
        let selected = select_creatives(&rows);
        let ids: Vec<&str> = selected.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["creative_0", "creative_2", "creative_3"]);
    }

    #[test]
    fn caps_at_limit() {
        let rows: Vec<RawRow> = (1..=20).map(|i| creative(f64::from(i))).collect();
        let selected = select_creatives(&rows);
        assert_eq!(selected.len(), CREATIVE_LIMIT);
        assert_eq!(selected[11].id, "creative_11");
    }

    #[test]
    fn string_spend_is_coerced_before_filtering() {
        let rows = vec![
            RawRow::from_value(json!({ "spend": "12.40" })).unwrap(),
            RawRow::from_value(json!({ "spend": "free" })).unwrap(),
        ];
        assert_eq!(select_creatives(&rows).len(), 1);
    }
}
