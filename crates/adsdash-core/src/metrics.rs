//! Canonical dashboard records.
//!
//! These are the shapes handed to the rendering layer (charts, tables, report
//! export). They are produced fresh for every fetch and never mutated after
//! aggregation. Field names serialize in camelCase.

use chrono::Weekday;
use serde::{Serialize, Serializer};

use crate::filters::Platform;

/// One campaign row of advertising performance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    pub platform: Platform,
    pub campaign_name: String,
    pub clicks: f64,
    pub impressions: f64,
    pub spend: f64,
    pub cost_per_click: f64,
    pub click_through_rate: f64,
    pub conversions: f64,
    pub cost_per_conversion: f64,
    pub conversion_value: f64,
    pub return_on_ad_spend: f64,
}

/// Totals and derived ratios over a set of [`PerformanceRecord`]s.
///
/// Ratio fields are `0.0` whenever their denominator is not positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    pub total_spend: f64,
    pub total_impressions: f64,
    pub total_clicks: f64,
    pub total_conversions: f64,
    pub total_conversion_value: f64,
    pub average_cost_per_click: f64,
    pub average_click_through_rate: f64,
    pub average_cost_per_acquisition: f64,
    pub average_return_on_ad_spend: f64,
}

/// Performance rows (after platform filtering) plus their summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdsReport {
    pub data: Vec<PerformanceRecord>,
    pub summary: SummaryMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativeKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativeFormat {
    Story,
    Feed,
    Banner,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeRecord {
    pub id: String,
    pub display_name: String,
    pub campaign_name: String,
    pub image_url: String,
    pub thumbnail_url: String,
    pub kind: CreativeKind,
    pub format: CreativeFormat,
    pub platform: Platform,
    pub spend: f64,
    pub impressions: f64,
    pub clicks: f64,
    pub conversions: f64,
    pub click_through_rate: f64,
    pub return_on_ad_spend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceSlice {
    pub category: String,
    pub click_count: f64,
}

/// Top categories by clicks for each demographic dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AudienceBreakdown {
    pub age: Vec<AudienceSlice>,
    pub gender: Vec<AudienceSlice>,
    pub device: Vec<AudienceSlice>,
}

impl AudienceBreakdown {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.age.is_empty() && self.gender.is_empty() && self.device.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRecord {
    pub country: String,
    pub region: String,
    pub city: String,
    pub spend: f64,
    pub conversions: f64,
    pub return_on_ad_spend: f64,
}

/// Activity for one weekday. The weekday serializes as its full English
/// name, which is the canonical key; display translation belongs to the
/// rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaypartingRecord {
    #[serde(serialize_with = "serialize_weekday")]
    pub day_of_week: Weekday,
    /// Reserved for an hourly breakdown; the provider only reports dates, so
    /// every record uses the midday slot.
    pub hour: u8,
    pub clicks: f64,
    pub conversions: f64,
    pub spend: f64,
}

impl DaypartingRecord {
    #[must_use]
    pub fn zeroed(day_of_week: Weekday) -> Self {
        Self {
            day_of_week,
            hour: 12,
            clicks: 0.0,
            conversions: 0.0,
            spend: 0.0,
        }
    }
}

/// Full English weekday name used as the canonical dayparting key.
#[must_use]
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn serialize_weekday<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*day))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunnelStage {
    Impressions,
    Clicks,
    AddToCart,
    InitiateCheckout,
    Purchase,
}

impl FunnelStage {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FunnelStage::Impressions => "Impressions",
            FunnelStage::Clicks => "Clicks",
            FunnelStage::AddToCart => "Add to Cart",
            FunnelStage::InitiateCheckout => "Initiate Checkout",
            FunnelStage::Purchase => "Purchase",
        }
    }
}

impl Serialize for FunnelStage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStep {
    pub stage: FunnelStage,
    pub count: f64,
    /// Percentage relative to the stage's reference stage (see the funnel
    /// builder); may exceed 100.
    pub conversion_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FunnelData {
    pub steps: Vec<FunnelStep>,
}

impl FunnelData {
    #[must_use]
    pub fn step(&self, stage: FunnelStage) -> Option<&FunnelStep> {
        self.steps.iter().find(|s| s.stage == stage)
    }
}
