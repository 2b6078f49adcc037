//! CSV export of campaign performance rows.

use std::borrow::Cow;
use std::path::Path;

use adsdash_core::{DateRange, PerformanceRecord, PlatformFilter, TenantContext};
use adsdash_insights::fetch_ads_data;
use adsdash_windsor::WindsorClient;

const HEADERS: [&str; 11] = [
    "platform",
    "campaign_name",
    "clicks",
    "impressions",
    "spend",
    "cost_per_click",
    "click_through_rate",
    "conversions",
    "cost_per_conversion",
    "conversion_value",
    "return_on_ad_spend",
];

/// Fetch performance rows and write them as CSV to `output` (stdout when
/// `None`).
///
/// # Errors
///
/// Returns an error if CSV encoding or the write fails.
pub(crate) async fn run_export(
    client: &WindsorClient,
    tenant: &TenantContext,
    range: DateRange,
    platform: PlatformFilter,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let result = fetch_ads_data(client, tenant, range, platform).await;
    if let Some(reason) = result.fallback_reason() {
        tracing::warn!(?reason, %range, "exporting empty performance table");
    }

    let records = result.into_value().data;
    let csv_bytes = build_csv(&records)?;
    match output {
        Some(path) => {
            std::fs::write(path, &csv_bytes)?;
            tracing::info!(
                path = %path.display(),
                rows = records.len(),
                "wrote performance export"
            );
        }
        None => {
            use std::io::Write;
            std::io::stdout().lock().write_all(&csv_bytes)?;
        }
    }
    Ok(())
}

/// Prefix cells that spreadsheet apps would evaluate as formulas.
///
/// Values starting with `=`, `+`, `-`, `@`, TAB, or CR get a leading `'`.
fn sanitize_csv_field(val: &str) -> Cow<'_, str> {
    if val.starts_with(['=', '+', '-', '@', '\t', '\r']) {
        Cow::Owned(format!("'{val}"))
    } else {
        Cow::Borrowed(val)
    }
}

fn build_csv(records: &[PerformanceRecord]) -> anyhow::Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::with_capacity(records.len().saturating_mul(128)));
    wtr.write_record(HEADERS)?;

    for record in records {
        let row = [
            record.platform.as_str().to_string(),
            sanitize_csv_field(&record.campaign_name).into_owned(),
            record.clicks.to_string(),
            record.impressions.to_string(),
            record.spend.to_string(),
            record.cost_per_click.to_string(),
            record.click_through_rate.to_string(),
            record.conversions.to_string(),
            record.cost_per_conversion.to_string(),
            record.conversion_value.to_string(),
            record.return_on_ad_spend.to_string(),
        ];
        wtr.write_record(&row)?;
    }

    wtr.into_inner()
        .map_err(|e| anyhow::anyhow!("csv flush failed: {e}"))
}

#[cfg(test)]
mod tests {
    use adsdash_core::Platform;

    use super::*;

    fn record(campaign: &str, spend: f64) -> PerformanceRecord {
        PerformanceRecord {
            platform: Platform::Facebook,
            campaign_name: campaign.to_string(),
            clicks: 10.0,
            impressions: 1000.0,
            spend,
            cost_per_click: 0.5,
            click_through_rate: 1.0,
            conversions: 2.0,
            cost_per_conversion: 2.5,
            conversion_value: 20.0,
            return_on_ad_spend: 4.0,
        }
    }

    #[test]
    fn sanitize_prefixes_formula_starters() {
        assert_eq!(sanitize_csv_field("=SUM(A1)"), "'=SUM(A1)");
        assert_eq!(sanitize_csv_field("-10%"), "'-10%");
        assert_eq!(sanitize_csv_field("@handle"), "'@handle");
        assert!(matches!(sanitize_csv_field("Brand"), Cow::Borrowed("Brand")));
    }

    #[test]
    fn build_csv_writes_header_and_rows() {
        let bytes = build_csv(&[record("Spring, Sale", 5.0), record("=cmd", 1.5)]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("platform,campaign_name,clicks"));
        assert!(lines[1].starts_with("facebook,\"Spring, Sale\",10,1000,5,"));
        assert!(lines[2].starts_with("facebook,'=cmd,10,1000,1.5,"));
    }

    #[test]
    fn build_csv_with_no_rows_is_header_only() {
        let text = String::from_utf8(build_csv(&[]).unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
