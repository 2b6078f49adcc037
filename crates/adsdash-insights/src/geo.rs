//! Geography breakdown: spend, conversions, and ROAS per city/region.

use std::collections::HashMap;

use adsdash_core::GeoRecord;
use adsdash_windsor::mapper::DEFAULT_COUNTRY;
use adsdash_windsor::GeoRow;

use crate::summary::safe_ratio;

pub const GEO_TOP_N: usize = 10;

struct GeoGroup {
    country: String,
    region: String,
    city: String,
    spend: f64,
    conversions: f64,
    conversion_value: f64,
}

/// Groups rows by `(city, region)` and returns the top groups by spend.
///
/// Rows are expected to carry canonical names already (see
/// [`adsdash_windsor::map_geo_row`]), so provider spelling variants of the
/// same place collapse into one group. The first row of a group decides its
/// country. Groups with equal spend keep first-seen order.
#[must_use]
pub fn aggregate_geo(rows: &[GeoRow]) -> Vec<GeoRecord> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut groups: Vec<GeoGroup> = Vec::new();

    for row in rows {
        let slot = *index
            .entry((row.city.as_str(), row.region.as_str()))
            .or_insert_with(|| {
                groups.push(GeoGroup {
                    country: row
                        .country
                        .clone()
                        .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
                    region: row.region.clone(),
                    city: row.city.clone(),
                    spend: 0.0,
                    conversions: 0.0,
                    conversion_value: 0.0,
                });
                groups.len() - 1
            });

        let group = &mut groups[slot];
        group.spend += row.spend;
        group.conversions += row.conversions;
        group.conversion_value += row.conversion_value;
    }

    let mut records: Vec<GeoRecord> = groups
        .into_iter()
        .map(|g| GeoRecord {
            return_on_ad_spend: safe_ratio(g.conversion_value, g.spend),
            country: g.country,
            region: g.region,
            city: g.city,
            spend: g.spend,
            conversions: g.conversions,
        })
        .collect();

    records.sort_by(|a, b| b.spend.total_cmp(&a.spend));
    records.truncate(GEO_TOP_N);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geo_row(city: &str, region: &str, spend: f64) -> GeoRow {
        GeoRow {
            country: None,
            region: region.to_string(),
            city: city.to_string(),
            spend,
            conversions: 1.0,
            conversion_value: spend * 2.0,
        }
    }

    #[test]
    fn groups_by_city_and_region() {
        let rows = vec![
            geo_row("São Paulo", "São Paulo", 30.0),
            geo_row("São Paulo", "São Paulo", 20.0),
            geo_row("Campinas", "São Paulo", 5.0),
        ];
        let records = aggregate_geo(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].city, "São Paulo");
        assert!((records[0].spend - 50.0).abs() < f64::EPSILON);
        assert!((records[0].conversions - 2.0).abs() < f64::EPSILON);
        assert!((records[0].return_on_ad_spend - 2.0).abs() < f64::EPSILON);
        assert_eq!(records[0].country, DEFAULT_COUNTRY);
    }

    #[test]
    fn same_city_in_different_regions_stays_separate() {
        let rows = vec![
            geo_row("Santa Maria", "Rio Grande do Sul", 10.0),
            geo_row("Santa Maria", "Distrito Federal", 10.0),
        ];
        assert_eq!(aggregate_geo(&rows).len(), 2);
    }

    #[test]
    fn zero_spend_group_has_zero_roas() {
        let mut row = geo_row("Recife", "Pernambuco", 0.0);
        row.conversion_value = 99.0;
        let records = aggregate_geo(&[row]);
        assert!(records[0].return_on_ad_spend.abs() < f64::EPSILON);
    }

    #[test]
    fn output_is_capped_and_sorted_by_spend() {
        let rows: Vec<GeoRow> = (0..25)
            .map(|i| geo_row(&format!("City {i}"), "Bahia", f64::from(i % 7)))
            .collect();
        let records = aggregate_geo(&rows);
        assert_eq!(records.len(), GEO_TOP_N);
        assert!(records.windows(2).all(|w| w[0].spend >= w[1].spend));
    }

    #[test]
    fn first_row_decides_country() {
        let mut first = geo_row("Lisboa", "Lisboa", 1.0);
        first.country = Some("Portugal".to_string());
        let mut second = geo_row("Lisboa", "Lisboa", 1.0);
        second.country = Some("PT".to_string());
        let records = aggregate_geo(&[first, second]);
        assert_eq!(records[0].country, "Portugal");
    }
}
