//! Full dashboard load: all six domains for one tenant, issued concurrently.

use adsdash_core::{
    AdsReport, AudienceBreakdown, CreativeRecord, DateRange, DaypartingRecord, FunnelData,
    GeoRecord, PlatformFilter, TenantContext,
};
use adsdash_windsor::WindsorClient;
use serde::Serialize;

use crate::fallback::DomainResult;
use crate::fetch::{
    fetch_ads_data, fetch_audience_data, fetch_creatives_data, fetch_dayparting_data,
    fetch_funnel_data, fetch_geo_data,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub date_range: DateRange,
    pub platform: PlatformFilter,
    pub ads: DomainResult<AdsReport>,
    pub audience: DomainResult<AudienceBreakdown>,
    pub creatives: DomainResult<Vec<CreativeRecord>>,
    pub geo: DomainResult<Vec<GeoRecord>>,
    pub dayparting: DomainResult<Vec<DaypartingRecord>>,
    pub funnel: DomainResult<FunnelData>,
}

impl Dashboard {
    /// Number of domains that resolved to a fallback instead of provider data.
    #[must_use]
    pub fn fallback_count(&self) -> usize {
        [
            self.ads.is_provider(),
            self.audience.is_provider(),
            self.creatives.is_provider(),
            self.geo.is_provider(),
            self.dayparting.is_provider(),
            self.funnel.is_provider(),
        ]
        .into_iter()
        .filter(|ok| !ok)
        .count()
    }
}

/// Loads every domain concurrently. Each fetch settles on its own, so a
/// failing domain only affects its own field.
pub async fn load_dashboard(
    client: &WindsorClient,
    tenant: &TenantContext,
    range: DateRange,
    platform: PlatformFilter,
) -> Dashboard {
    let (ads, audience, creatives, geo, dayparting, funnel) = futures::join!(
        fetch_ads_data(client, tenant, range, platform),
        fetch_audience_data(client, tenant, range),
        fetch_creatives_data(client, tenant, range),
        fetch_geo_data(client, tenant, range),
        fetch_dayparting_data(client, tenant, range),
        fetch_funnel_data(client, tenant, range),
    );

    let dashboard = Dashboard {
        date_range: range,
        platform,
        ads,
        audience,
        creatives,
        geo,
        dayparting,
        funnel,
    };
    tracing::info!(
        project = tenant.project_id().unwrap_or("-"),
        %range,
        %platform,
        fallbacks = dashboard.fallback_count(),
        "dashboard loaded"
    );
    dashboard
}
