//! Windsor connector wire types.
//!
//! The connector answers every query with `{ "data": [ {...}, ... ] }` where
//! each row is a flat object whose keys depend on the requested `fields` and
//! on which ad platforms the tenant has connected. Nothing about key presence
//! or value types is guaranteed, so rows stay untyped ([`RawRow`]) until the
//! mapper coerces them.

use std::fmt;

use adsdash_core::coerce_number;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Logical query sent to the connector. Each domain requests its own field
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Performance,
    Creatives,
    Audience,
    Geo,
    Dayparting,
    Funnel,
}

impl Domain {
    /// Comma-separated `fields` query parameter for this domain.
    #[must_use]
    pub fn fields(self) -> &'static str {
        match self {
            Domain::Performance => {
                "campaign,clicks,impressions,spend,cpc,ctr,source,conversions,cost_per_conversion,conversion_value,roas"
            }
            Domain::Creatives => {
                "source,campaign,ad_name,clicks,impressions,spend,conversions,ctr,roas,ad_image_url,url"
            }
            Domain::Audience => "source,gender,age,device,clicks,impressions",
            Domain::Geo => "country,region,city,spend,conversions,conversion_value",
            Domain::Dayparting => "date,clicks,conversions,spend",
            Domain::Funnel => {
                "source,impressions,clicks,spend,conversions,conversion_value,actions_add_to_cart,actions_initiate_checkout,actions_purchase"
            }
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Performance => "performance",
            Domain::Creatives => "creatives",
            Domain::Audience => "audience",
            Domain::Geo => "geo",
            Domain::Dayparting => "dayparting",
            Domain::Funnel => "funnel",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level connector response. `data` is kept loosely typed so that a
/// single malformed row does not reject the whole payload.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Value>>,
}

/// One untyped connector row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow(Map<String, Value>);

impl RawRow {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Wraps a JSON value, returning `None` for anything that is not an object.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// Numeric field, coerced; absent or non-numeric values read as `0.0`.
    #[must_use]
    pub fn number(&self, key: &str) -> f64 {
        coerce_number(self.0.get(key))
    }

    /// Text field. Blank strings, `null`, and missing keys are `None`;
    /// numbers are rendered as text (age buckets occasionally arrive numeric).
    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The raw `source` tag, compared verbatim for platform classification.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.0.get("source").and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for RawRow {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
