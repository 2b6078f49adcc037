//! Day-of-week activity breakdown and its synthetic placeholder.

use adsdash_core::DaypartingRecord;
use adsdash_windsor::DaypartingRow;
use chrono::{Datelike, Weekday};

/// Output order for every dayparting result.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Relative activity per weekday (Monday first) for the placeholder pattern.
const SYNTHETIC_ACTIVITY: [f64; 7] = [6.0, 5.6, 4.8, 5.0, 4.4, 3.2, 2.8];
/// The first two weekdays are weighted up in the placeholder pattern.
const EARLY_WEEK_BOOST: f64 = 1.5;

/// Seven zero-filled records, Monday through Sunday.
#[must_use]
pub fn zero_week() -> Vec<DaypartingRecord> {
    WEEK.iter().copied().map(DaypartingRecord::zeroed).collect()
}

/// Sums activity per weekday of each row's date.
///
/// Rows without a parseable date are dropped rather than counted. The result
/// always has exactly seven entries, Monday first.
#[must_use]
pub fn aggregate_dayparting(rows: &[DaypartingRow]) -> Vec<DaypartingRecord> {
    let mut week = zero_week();
    let mut undated = 0usize;

    for row in rows {
        let Some(date) = row.date else {
            undated += 1;
            continue;
        };
        let slot = &mut week[date.weekday().num_days_from_monday() as usize];
        slot.clicks += row.clicks;
        slot.conversions += row.conversions;
        slot.spend += row.spend;
    }

    if undated > 0 {
        tracing::debug!(undated, "dropped dayparting rows with unparseable dates");
    }

    week
}

#[must_use]
pub fn total_clicks(week: &[DaypartingRecord]) -> f64 {
    week.iter().map(|day| day.clicks).sum()
}

/// Deterministic placeholder week used when the connector gives no usable
/// signal. Every day has nonzero clicks; Monday and Tuesday peak.
#[must_use]
pub fn synthetic_week() -> Vec<DaypartingRecord> {
    WEEK.iter()
        .zip(SYNTHETIC_ACTIVITY)
        .enumerate()
        .map(|(position, (&day, base))| {
            let activity = if position < 2 {
                base * EARLY_WEEK_BOOST
            } else {
                base
            };
            DaypartingRecord {
                day_of_week: day,
                hour: 12,
                clicks: (activity * 25.0).floor() + 50.0,
                conversions: (activity * 0.8).floor(),
                spend: activity * 5.0,
            }
        })
        .collect()
}
