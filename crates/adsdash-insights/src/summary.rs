//! Performance summary reduction.

use adsdash_core::{AdsReport, PerformanceRecord, PlatformFilter, SummaryMetrics};

/// `numerator / denominator`, or `0.0` unless the denominator is positive.
///
/// Every derived ratio in the dashboard goes through this, so no metric can
/// come out as `NaN` or infinite.
#[must_use]
pub fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Reduces records into totals and derived averages.
///
/// CTR is expressed as a percentage of impressions; CPC, CPA, and ROAS are
/// plain ratios.
#[must_use]
pub fn summarize(records: &[PerformanceRecord]) -> SummaryMetrics {
    let mut summary = records
        .iter()
        .fold(SummaryMetrics::default(), |mut acc, record| {
            acc.total_spend += record.spend;
            acc.total_impressions += record.impressions;
            acc.total_clicks += record.clicks;
            acc.total_conversions += record.conversions;
            acc.total_conversion_value += record.conversion_value;
            acc
        });

    summary.average_cost_per_click = safe_ratio(summary.total_spend, summary.total_clicks);
    summary.average_click_through_rate =
        safe_ratio(summary.total_clicks, summary.total_impressions) * 100.0;
    summary.average_cost_per_acquisition =
        safe_ratio(summary.total_spend, summary.total_conversions);
    summary.average_return_on_ad_spend =
        safe_ratio(summary.total_conversion_value, summary.total_spend);

    summary
}

/// Applies the platform filter, then summarises what is left.
#[must_use]
pub fn build_ads_report(records: Vec<PerformanceRecord>, filter: PlatformFilter) -> AdsReport {
    let data: Vec<PerformanceRecord> = records
        .into_iter()
        .filter(|record| filter.matches(record.platform))
        .collect();
    let summary = summarize(&data);
    AdsReport { data, summary }
}
