//! Query filters supplied by the caller: reporting window and platform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseFilterError {
    #[error("unknown date range {0:?}; expected last_7d, last_30d, this_month, or last_month")]
    DateRange(String),

    #[error("unknown platform {0:?}; expected all, google, or facebook")]
    Platform(String),
}

/// Reporting window. Values map one-to-one onto the provider's `date_preset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    #[serde(rename = "last_7d")]
    Last7Days,
    #[default]
    #[serde(rename = "last_30d")]
    Last30Days,
    ThisMonth,
    LastMonth,
}

impl DateRange {
    #[must_use]
    pub fn as_preset(self) -> &'static str {
        match self {
            DateRange::Last7Days => "last_7d",
            DateRange::Last30Days => "last_30d",
            DateRange::ThisMonth => "this_month",
            DateRange::LastMonth => "last_month",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_preset())
    }
}

impl FromStr for DateRange {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "last_7d" => Ok(DateRange::Last7Days),
            "last_30d" => Ok(DateRange::Last30Days),
            "this_month" => Ok(DateRange::ThisMonth),
            "last_month" => Ok(DateRange::LastMonth),
            other => Err(ParseFilterError::DateRange(other.to_string())),
        }
    }
}

/// Ad platform a canonical record belongs to.
///
/// Anything the provider reports other than `google` or `facebook` lands in
/// [`Platform::Unknown`]; there is no error path for unrecognised sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Google,
    Facebook,
    Unknown,
}

impl Platform {
    /// Classifies the provider's raw `source` value.
    #[must_use]
    pub fn from_source(source: Option<&str>) -> Self {
        match source {
            Some("facebook") => Platform::Facebook,
            Some("google") => Platform::Google,
            _ => Platform::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Google => "google",
            Platform::Facebook => "facebook",
            Platform::Unknown => "unknown",
        }
    }
}

/// Caller-requested platform scope for the performance summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformFilter {
    #[default]
    All,
    Google,
    Facebook,
}

impl PlatformFilter {
    /// Exact-equality match; `All` admits every platform including `Unknown`.
    #[must_use]
    pub fn matches(self, platform: Platform) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Google => platform == Platform::Google,
            PlatformFilter::Facebook => platform == Platform::Facebook,
        }
    }
}

impl fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlatformFilter::All => "all",
            PlatformFilter::Google => "google",
            PlatformFilter::Facebook => "facebook",
        })
    }
}

impl FromStr for PlatformFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(PlatformFilter::All),
            "google" => Ok(PlatformFilter::Google),
            "facebook" => Ok(PlatformFilter::Facebook),
            _ => Err(ParseFilterError::Platform(s.to_string())),
        }
    }
}
