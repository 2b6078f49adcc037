//! Dashboard and summary command handlers.

use std::io::Write;

use adsdash_core::{DateRange, PlatformFilter, TenantContext};
use adsdash_insights::{fetch_ads_data, load_dashboard, Origin};
use adsdash_windsor::WindsorClient;

/// Load all six domains and print the dashboard as pretty JSON.
///
/// # Errors
///
/// Returns an error only if serialization or writing to stdout fails;
/// connector failures are reported inside the JSON as fallback origins.
pub(crate) async fn run_dashboard(
    client: &WindsorClient,
    tenant: &TenantContext,
    range: DateRange,
    platform: PlatformFilter,
) -> anyhow::Result<()> {
    let dashboard = load_dashboard(client, tenant, range, platform).await;
    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}

/// Print the campaign performance table followed by totals.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub(crate) async fn run_summary(
    client: &WindsorClient,
    tenant: &TenantContext,
    range: DateRange,
    platform: PlatformFilter,
) -> anyhow::Result<()> {
    let result = fetch_ads_data(client, tenant, range, platform).await;
    let mut out = std::io::stdout().lock();
    if let Origin::Empty(reason) = result.origin {
        writeln!(out, "no performance data for {range} ({platform}): {reason:?}")?;
        return Ok(());
    }

    let report = result.value;
    writeln!(
        out,
        "{:<10}{:<36}{:>12}{:>10}{:>12}{:>8}",
        "PLATFORM", "CAMPAIGN", "SPEND", "CLICKS", "CONVERSIONS", "ROAS"
    )?;
    for record in &report.data {
        writeln!(
            out,
            "{:<10}{:<36}{:>12.2}{:>10.0}{:>12.0}{:>8.2}",
            record.platform.as_str(),
            truncate(&record.campaign_name, 34),
            record.spend,
            record.clicks,
            record.conversions,
            record.return_on_ad_spend
        )?;
    }

    let s = report.summary;
    writeln!(out)?;
    writeln!(out, "spend        {:.2}", s.total_spend)?;
    writeln!(out, "impressions  {:.0}", s.total_impressions)?;
    writeln!(out, "clicks       {:.0}", s.total_clicks)?;
    writeln!(out, "conversions  {:.0}", s.total_conversions)?;
    writeln!(out, "cpc          {:.2}", s.average_cost_per_click)?;
    writeln!(out, "ctr          {:.2}%", s.average_click_through_rate)?;
    writeln!(out, "cpa          {:.2}", s.average_cost_per_acquisition)?;
    writeln!(out, "roas         {:.2}", s.average_return_on_ad_spend)?;

    Ok(())
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars - 3).collect::<String>())
    } else {
        text.to_string()
    }
}
