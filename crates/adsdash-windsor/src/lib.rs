//! Client and row mapping for the Windsor.ai ads-aggregation connector API.

pub mod client;
pub mod error;
pub mod mapper;
pub mod types;

pub use client::WindsorClient;
pub use error::WindsorError;
pub use mapper::{
    map_audience_row, map_creative_row, map_dayparting_row, map_funnel_row, map_geo_row,
    map_performance_row, parse_report_date, AudienceRow, DaypartingRow, FunnelRow, GeoRow,
};
pub use types::{Domain, RawRow};
