//! Mapping of raw connector rows into canonical per-domain records.
//!
//! Every numeric field goes through [`adsdash_core::coerce_number`] (via
//! [`RawRow::number`]) and every text field falls back to a fixed label, so
//! nothing downstream of this module inspects raw JSON.

use adsdash_core::{
    normalize_place_name, CreativeFormat, CreativeKind, CreativeRecord, PerformanceRecord,
    Platform,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::RawRow;

pub const UNKNOWN_CAMPAIGN: &str = "Unknown Campaign";
pub const UNNAMED_AD: &str = "Unnamed Ad";
pub const UNKNOWN_LABEL: &str = "Unknown";
pub const DEFAULT_COUNTRY: &str = "Brasil";
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1563986768609-322da13575f3?auto=format&fit=crop&w=800&q=80";

/// A geography row with canonical region/city names.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRow {
    /// `None` when the connector did not report a country.
    pub country: Option<String>,
    pub region: String,
    pub city: String,
    pub spend: f64,
    pub conversions: f64,
    pub conversion_value: f64,
}

/// Clicks attributed to one demographic combination.
#[derive(Debug, Clone, PartialEq)]
pub struct AudienceRow {
    pub age: String,
    pub gender: String,
    pub device: String,
    pub clicks: f64,
}

/// Activity for one reporting date. `date` is `None` when the connector's
/// date string could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct DaypartingRow {
    pub date: Option<NaiveDate>,
    pub clicks: f64,
    pub conversions: f64,
    pub spend: f64,
}

/// Funnel counters reported by one row.
#[derive(Debug, Clone, PartialEq)]
pub struct FunnelRow {
    pub platform: Platform,
    pub impressions: f64,
    pub clicks: f64,
    pub add_to_cart: f64,
    pub initiate_checkout: f64,
    /// Purchases are read from the generic `conversions` metric, which every
    /// platform reports.
    pub purchases: f64,
    pub purchase_value: f64,
}

#[must_use]
pub fn map_performance_row(row: &RawRow) -> PerformanceRecord {
    PerformanceRecord {
        platform: Platform::from_source(row.source()),
        campaign_name: row
            .text("campaign")
            .unwrap_or_else(|| UNKNOWN_CAMPAIGN.to_string()),
        clicks: row.number("clicks"),
        impressions: row.number("impressions"),
        spend: row.number("spend"),
        cost_per_click: row.number("cpc"),
        click_through_rate: row.number("ctr"),
        conversions: row.number("conversions"),
        cost_per_conversion: row.number("cost_per_conversion"),
        conversion_value: row.number("conversion_value"),
        return_on_ad_spend: row.number("roas"),
    }
}

/// Maps a creative row. `index` is the row's position in the connector
/// response and becomes the creative's stable id.
#[must_use]
pub fn map_creative_row(index: usize, row: &RawRow) -> CreativeRecord {
    let campaign = row.text("campaign");
    let display_name = row
        .text("ad_name")
        .or_else(|| campaign.clone())
        .unwrap_or_else(|| UNNAMED_AD.to_string());
    let image_url = row
        .text("ad_image_url")
        .or_else(|| row.text("url"))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

    CreativeRecord {
        id: format!("creative_{index}"),
        display_name,
        campaign_name: campaign.unwrap_or_else(|| UNKNOWN_CAMPAIGN.to_string()),
        thumbnail_url: image_url.clone(),
        image_url,
        // The connector exposes neither media type nor placement.
        kind: CreativeKind::Image,
        format: CreativeFormat::Feed,
        platform: Platform::from_source(row.source()),
        spend: row.number("spend"),
        impressions: row.number("impressions"),
        clicks: row.number("clicks"),
        conversions: row.number("conversions"),
        click_through_rate: row.number("ctr"),
        return_on_ad_spend: row.number("roas"),
    }
}

#[must_use]
pub fn map_audience_row(row: &RawRow) -> AudienceRow {
    let label = |key: &str| row.text(key).unwrap_or_else(|| UNKNOWN_LABEL.to_string());
    AudienceRow {
        age: label("age"),
        gender: label("gender"),
        device: label("device"),
        clicks: row.number("clicks"),
    }
}

/// Maps a geography row, normalising both region and city names.
///
/// Region falls back to the country when absent, since some connectors only
/// report country-level geography.
#[must_use]
pub fn map_geo_row(row: &RawRow) -> GeoRow {
    let country = row.text("country");
    let region = row
        .text("region")
        .or_else(|| country.clone())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
    let city = row
        .text("city")
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

    GeoRow {
        country,
        region: normalize_place_name(&region),
        city: normalize_place_name(&city),
        spend: row.number("spend"),
        conversions: row.number("conversions"),
        conversion_value: row.number("conversion_value"),
    }
}

#[must_use]
pub fn map_dayparting_row(row: &RawRow) -> DaypartingRow {
    DaypartingRow {
        date: row.text("date").as_deref().and_then(parse_report_date),
        clicks: row.number("clicks"),
        conversions: row.number("conversions"),
        spend: row.number("spend"),
    }
}

#[must_use]
pub fn map_funnel_row(row: &RawRow) -> FunnelRow {
    FunnelRow {
        platform: Platform::from_source(row.source()),
        impressions: row.number("impressions"),
        clicks: row.number("clicks"),
        add_to_cart: row.number("actions_add_to_cart"),
        initiate_checkout: row.number("actions_initiate_checkout"),
        purchases: row.number("conversions"),
        purchase_value: row.number("conversion_value"),
    }
}

/// Parses a connector date into its calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and `YYYY-MM-DD HH:MM:SS`.
/// Timestamps keep the date as written; no timezone shift is applied, so the
/// weekday never depends on the host locale.
#[must_use]
pub fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}
