//! Conversion funnel derivation.

use adsdash_core::{FunnelData, FunnelStage, FunnelStep, Platform};
use adsdash_windsor::FunnelRow;

use crate::summary::safe_ratio;

/// Counts summed across every funnel row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FunnelTotals {
    pub impressions: f64,
    pub clicks: f64,
    pub add_to_cart: f64,
    pub initiate_checkout: f64,
    pub purchases: f64,
    pub purchase_value: f64,
}

impl FunnelTotals {
    /// Sums rows into totals.
    ///
    /// Cart and checkout actions only count for rows that can report them:
    /// Facebook rows, or any row carrying a positive add-to-cart figure.
    #[must_use]
    pub fn accumulate(rows: &[FunnelRow]) -> Self {
        rows.iter().fold(Self::default(), |mut totals, row| {
            totals.impressions += row.impressions;
            totals.clicks += row.clicks;
            totals.purchases += row.purchases;
            totals.purchase_value += row.purchase_value;
            if row.platform == Platform::Facebook || row.add_to_cart > 0.0 {
                totals.add_to_cart += row.add_to_cart;
                totals.initiate_checkout += row.initiate_checkout;
            }
            totals
        })
    }
}

fn step(stage: FunnelStage, count: f64, conversion_rate: f64) -> FunnelStep {
    FunnelStep {
        stage,
        count,
        conversion_rate,
        value: None,
    }
}

/// Builds the ordered funnel from totals.
///
/// Impressions, Clicks, and Purchase are always present; Add to Cart and
/// Initiate Checkout only when their totals are positive. Each rate is a
/// percentage of the preceding stage, except Purchase, which is measured
/// against Clicks whichever optional stages are present.
#[must_use]
pub fn build_funnel(totals: &FunnelTotals) -> FunnelData {
    let mut steps = vec![
        step(FunnelStage::Impressions, totals.impressions, 100.0),
        step(
            FunnelStage::Clicks,
            totals.clicks,
            safe_ratio(totals.clicks, totals.impressions) * 100.0,
        ),
    ];

    if totals.add_to_cart > 0.0 {
        steps.push(step(
            FunnelStage::AddToCart,
            totals.add_to_cart,
            safe_ratio(totals.add_to_cart, totals.clicks) * 100.0,
        ));
    }

    if totals.initiate_checkout > 0.0 {
        steps.push(step(
            FunnelStage::InitiateCheckout,
            totals.initiate_checkout,
            safe_ratio(totals.initiate_checkout, totals.add_to_cart) * 100.0,
        ));
    }

    steps.push(FunnelStep {
        value: (totals.purchase_value > 0.0).then_some(totals.purchase_value),
        ..step(
            FunnelStage::Purchase,
            totals.purchases,
            safe_ratio(totals.purchases, totals.clicks) * 100.0,
        )
    });

    FunnelData { steps }
}
