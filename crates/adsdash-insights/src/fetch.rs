//! Per-domain fetch operations.
//!
//! Each operation makes at most one connector request and always resolves to
//! a [`DomainResult`]. Connector errors are logged here and folded into the
//! result's origin; they never propagate to the caller.

use adsdash_core::{
    AdsReport, AudienceBreakdown, CreativeRecord, DateRange, DaypartingRecord, FunnelData,
    GeoRecord, PlatformFilter, TenantContext,
};
use adsdash_windsor::{
    map_audience_row, map_dayparting_row, map_funnel_row, map_geo_row, map_performance_row,
    Domain, RawRow, WindsorClient,
};

use crate::audience::aggregate_audience;
use crate::creatives::select_creatives;
use crate::dayparting::{aggregate_dayparting, synthetic_week, total_clicks, zero_week};
use crate::fallback::{DomainResult, FallbackReason};
use crate::funnel::{build_funnel, FunnelTotals};
use crate::geo::aggregate_geo;
use crate::summary::build_ads_report;

/// Fetches rows for one domain, classifying every non-usable outcome.
async fn load_rows(
    client: &WindsorClient,
    tenant: &TenantContext,
    domain: Domain,
    range: DateRange,
) -> Result<Vec<RawRow>, FallbackReason> {
    let project = tenant.project_id().unwrap_or("-");
    let Some(credential) = tenant.credential() else {
        tracing::debug!(%domain, project, "tenant has no credential; returning empty result");
        return Err(FallbackReason::MissingCredential);
    };

    match client.fetch_rows(domain, Some(credential), range).await {
        Ok(rows) if rows.is_empty() => {
            tracing::info!(%domain, project, %range, "connector returned no rows");
            Err(FallbackReason::EmptySignal)
        }
        Ok(rows) => Ok(rows),
        Err(e) => {
            tracing::warn!(%domain, project, %range, error = %e, "connector request failed");
            Err(FallbackReason::ProviderUnavailable)
        }
    }
}

/// Runs the non-synthetic policy: provider rows are reduced, anything else
/// yields `empty`.
async fn fetch_domain<T>(
    client: &WindsorClient,
    tenant: &TenantContext,
    domain: Domain,
    range: DateRange,
    empty: impl FnOnce() -> T,
    reduce: impl FnOnce(&[RawRow]) -> T,
) -> DomainResult<T> {
    match load_rows(client, tenant, domain, range).await {
        Ok(rows) => DomainResult::provider(reduce(&rows)),
        Err(reason) => DomainResult::empty(empty(), reason),
    }
}

/// Campaign performance rows and their summary, filtered to `platform`.
pub async fn fetch_ads_data(
    client: &WindsorClient,
    tenant: &TenantContext,
    range: DateRange,
    platform: PlatformFilter,
) -> DomainResult<AdsReport> {
    fetch_domain(
        client,
        tenant,
        Domain::Performance,
        range,
        AdsReport::default,
        |rows| build_ads_report(rows.iter().map(map_performance_row).collect(), platform),
    )
    .await
}

pub async fn fetch_creatives_data(
    client: &WindsorClient,
    tenant: &TenantContext,
    range: DateRange,
) -> DomainResult<Vec<CreativeRecord>> {
    fetch_domain(
        client,
        tenant,
        Domain::Creatives,
        range,
        Vec::new,
        select_creatives,
    )
    .await
}

pub async fn fetch_audience_data(
    client: &WindsorClient,
    tenant: &TenantContext,
    range: DateRange,
) -> DomainResult<AudienceBreakdown> {
    fetch_domain(
        client,
        tenant,
        Domain::Audience,
        range,
        AudienceBreakdown::default,
        |rows| {
            let mapped: Vec<_> = rows.iter().map(map_audience_row).collect();
            aggregate_audience(&mapped)
        },
    )
    .await
}

pub async fn fetch_geo_data(
    client: &WindsorClient,
    tenant: &TenantContext,
    range: DateRange,
) -> DomainResult<Vec<GeoRecord>> {
    fetch_domain(client, tenant, Domain::Geo, range, Vec::new, |rows| {
        let mapped: Vec<_> = rows.iter().map(map_geo_row).collect();
        aggregate_geo(&mapped)
    })
    .await
}

/// Funnel steps.
///
/// A successful response with no rows still yields the fixed stages at zero.
/// Only a missing credential or a failed request yields a funnel with no
/// steps.
pub async fn fetch_funnel_data(
    client: &WindsorClient,
    tenant: &TenantContext,
    range: DateRange,
) -> DomainResult<FunnelData> {
    match load_rows(client, tenant, Domain::Funnel, range).await {
        Ok(rows) => {
            let mapped: Vec<_> = rows.iter().map(map_funnel_row).collect();
            DomainResult::provider(build_funnel(&FunnelTotals::accumulate(&mapped)))
        }
        Err(FallbackReason::EmptySignal) => {
            DomainResult::provider(build_funnel(&FunnelTotals::default()))
        }
        Err(reason) => DomainResult::empty(FunnelData::default(), reason),
    }
}

/// Activity per weekday, always seven entries, Monday first.
///
/// With no credential the week is zero-filled. A failed request, an empty
/// response, or a week with zero total clicks is replaced by
/// [`synthetic_week`]; the origin records which of the three applied.
pub async fn fetch_dayparting_data(
    client: &WindsorClient,
    tenant: &TenantContext,
    range: DateRange,
) -> DomainResult<Vec<DaypartingRecord>> {
    let rows = match load_rows(client, tenant, Domain::Dayparting, range).await {
        Ok(rows) => rows,
        Err(FallbackReason::MissingCredential) => {
            return DomainResult::empty(zero_week(), FallbackReason::MissingCredential);
        }
        Err(reason) => {
            tracing::warn!(?reason, %range, "substituting synthetic dayparting pattern");
            return DomainResult::synthetic(synthetic_week(), reason);
        }
    };

    let mapped: Vec<_> = rows.iter().map(map_dayparting_row).collect();
    let week = aggregate_dayparting(&mapped);
    if total_clicks(&week) > 0.0 {
        return DomainResult::provider(week);
    }

    tracing::warn!(
        rows = rows.len(),
        %range,
        "dayparting rows carry no clicks; substituting synthetic pattern"
    );
    DomainResult::synthetic(synthetic_week(), FallbackReason::ZeroActivity)
}
