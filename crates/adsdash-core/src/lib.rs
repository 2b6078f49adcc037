pub mod app_config;
pub mod coerce;
pub mod config;
pub mod filters;
pub mod geo_names;
pub mod metrics;
pub mod tenant;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use coerce::coerce_number;
pub use config::{load_app_config, load_app_config_from_env};
pub use filters::{DateRange, ParseFilterError, Platform, PlatformFilter};
pub use geo_names::normalize_place_name;
pub use metrics::{
    AdsReport, AudienceBreakdown, AudienceSlice, CreativeFormat, CreativeKind, CreativeRecord,
    DaypartingRecord, FunnelData, FunnelStage, FunnelStep, GeoRecord, PerformanceRecord,
    SummaryMetrics, weekday_name,
};
pub use tenant::TenantContext;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
