//! Aggregation, funnel derivation, and fallback policy for dashboard data.
//!
//! The `fetch_*` operations are the public entry points: each one queries the
//! connector for a single domain, maps and reduces the rows, and always
//! resolves to a [`DomainResult`]. Failures are absorbed and logged, never
//! propagated, so one broken domain cannot take down the others.

pub mod audience;
pub mod creatives;
pub mod dashboard;
pub mod dayparting;
pub mod fallback;
pub mod fetch;
pub mod funnel;
pub mod geo;
pub mod summary;

pub use audience::{aggregate_audience, AUDIENCE_TOP_N};
pub use creatives::{select_creatives, CREATIVE_LIMIT};
pub use dashboard::{load_dashboard, Dashboard};
pub use dayparting::{aggregate_dayparting, synthetic_week, zero_week, WEEK};
pub use fallback::{DomainResult, FallbackReason, Origin};
pub use fetch::{
    fetch_ads_data, fetch_audience_data, fetch_creatives_data, fetch_dayparting_data,
    fetch_funnel_data, fetch_geo_data,
};
pub use funnel::{build_funnel, FunnelTotals};
pub use geo::{aggregate_geo, GEO_TOP_N};
pub use summary::{build_ads_report, safe_ratio, summarize};
