//! Demographic breakdown: top categories by clicks for age, gender, device.

use std::collections::HashMap;

use adsdash_core::{AudienceBreakdown, AudienceSlice};
use adsdash_windsor::AudienceRow;

pub const AUDIENCE_TOP_N: usize = 6;

/// Click totals per category, remembering first-seen order for ties.
#[derive(Default)]
struct CategoryTally {
    index: HashMap<String, usize>,
    slices: Vec<AudienceSlice>,
}

impl CategoryTally {
    fn add(&mut self, category: &str, clicks: f64) {
        if let Some(&slot) = self.index.get(category) {
            self.slices[slot].click_count += clicks;
            return;
        }
        self.index.insert(category.to_string(), self.slices.len());
        self.slices.push(AudienceSlice {
            category: category.to_string(),
            click_count: clicks,
        });
    }

    fn into_ranked(self) -> Vec<AudienceSlice> {
        let mut slices = self.slices;
        slices.sort_by(|a, b| b.click_count.total_cmp(&a.click_count));
        slices.truncate(AUDIENCE_TOP_N);
        slices
    }
}

/// Tallies clicks independently per dimension and keeps the top categories.
#[must_use]
pub fn aggregate_audience(rows: &[AudienceRow]) -> AudienceBreakdown {
    let mut age = CategoryTally::default();
    let mut gender = CategoryTally::default();
    let mut device = CategoryTally::default();

    for row in rows {
        age.add(&row.age, row.clicks);
        gender.add(&row.gender, row.clicks);
        device.add(&row.device, row.clicks);
    }

    AudienceBreakdown {
        age: age.into_ranked(),
        gender: gender.into_ranked(),
        device: device.into_ranked(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audience_row(age: &str, gender: &str, device: &str, clicks: f64) -> AudienceRow {
        AudienceRow {
            age: age.to_string(),
            gender: gender.to_string(),
            device: device.to_string(),
            clicks,
        }
    }

    #[test]
    fn tallies_each_dimension_independently() {
        let rows = vec![
            audience_row("25-34", "female", "mobile", 10.0),
            audience_row("25-34", "male", "desktop", 5.0),
            audience_row("35-44", "female", "mobile", 8.0),
        ];
        let breakdown = aggregate_audience(&rows);

        assert_eq!(breakdown.age[0].category, "25-34");
        assert!((breakdown.age[0].click_count - 15.0).abs() < f64::EPSILON);
        assert_eq!(breakdown.gender[0].category, "female");
        assert!((breakdown.gender[0].click_count - 18.0).abs() < f64::EPSILON);
        assert_eq!(breakdown.device.len(), 2);
        assert_eq!(breakdown.device[1].category, "desktop");
    }

    #[test]
    fn caps_each_dimension_at_top_n() {
        let rows: Vec<AudienceRow> = (0..10)
            .map(|i| audience_row(&format!("bucket-{i}"), "Unknown", "Unknown", f64::from(i)))
            .collect();
        let breakdown = aggregate_audience(&rows);

        assert_eq!(breakdown.age.len(), AUDIENCE_TOP_N);
        assert_eq!(breakdown.age[0].category, "bucket-9");
        assert!(breakdown
            .age
            .windows(2)
            .all(|w| w[0].click_count >= w[1].click_count));
        assert_eq!(breakdown.gender.len(), 1);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let rows = vec![
            audience_row("55+", "a", "x", 3.0),
            audience_row("18-24", "a", "x", 3.0),
        ];
        let breakdown = aggregate_audience(&rows);
        assert_eq!(breakdown.age[0].category, "55+");
        assert_eq!(breakdown.age[1].category, "18-24");
    }

    #[test]
    fn empty_rows_give_empty_breakdown() {
        assert!(aggregate_audience(&[]).is_empty());
    }
}
