//! Tagged result type for domain fetches.
//!
//! A fetch never fails outright. It resolves either to data derived from the
//! connector or to a defined fallback value, and the tag records which one the
//! caller got and why.

use serde::Serialize;

/// Why a fetch resolved to a fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The tenant has no credential configured; no request was made.
    MissingCredential,
    /// Transport failure, non-2xx status, or an undecodable payload.
    ProviderUnavailable,
    /// The connector answered successfully with zero rows.
    EmptySignal,
    /// Rows were returned but reduced to zero activity (dayparting only).
    ZeroActivity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum Origin {
    /// Aggregated from connector rows.
    Provider,
    /// Defined empty or zero-valued result.
    Empty(FallbackReason),
    /// Synthetic placeholder so the consumer is never blank.
    Synthetic(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainResult<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> DomainResult<T> {
    #[must_use]
    pub fn provider(value: T) -> Self {
        Self {
            value,
            origin: Origin::Provider,
        }
    }

    #[must_use]
    pub fn empty(value: T, reason: FallbackReason) -> Self {
        Self {
            value,
            origin: Origin::Empty(reason),
        }
    }

    #[must_use]
    pub fn synthetic(value: T, reason: FallbackReason) -> Self {
        Self {
            value,
            origin: Origin::Synthetic(reason),
        }
    }

    #[must_use]
    pub fn is_provider(&self) -> bool {
        self.origin == Origin::Provider
    }

    #[must_use]
    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self.origin {
            Origin::Provider => None,
            Origin::Empty(reason) | Origin::Synthetic(reason) => Some(reason),
        }
    }

    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_reason_reports_tag() {
        let result = DomainResult::empty(Vec::<u8>::new(), FallbackReason::MissingCredential);
        assert!(!result.is_provider());
        assert_eq!(
            result.fallback_reason(),
            Some(FallbackReason::MissingCredential)
        );
        assert_eq!(DomainResult::provider(1).fallback_reason(), None);
    }

    #[test]
    fn into_value_returns_the_payload_whatever_the_origin() {
        let synthetic = DomainResult::synthetic(vec![1, 2], FallbackReason::EmptySignal);
        assert_eq!(synthetic.into_value(), vec![1, 2]);
        assert_eq!(DomainResult::provider("rows").into_value(), "rows");
    }

    #[test]
    fn origin_serializes_kind_and_reason() {
        let json =
            serde_json::to_value(DomainResult::synthetic(0, FallbackReason::ZeroActivity)).unwrap();
        assert_eq!(json["origin"]["kind"], "synthetic");
        assert_eq!(json["origin"]["reason"], "zero_activity");

        let json = serde_json::to_value(DomainResult::provider(0)).unwrap();
        assert_eq!(json["origin"]["kind"], "provider");
    }
}
