// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure activity-aggregation engine behind the dashboard endpoints.
//!
//! Every function here is a deterministic function of the supplied
//! activity list and an explicit `now` anchor. Nothing in this module
//! performs I/O or keeps state between queries; the service layer fetches
//! a window and each endpoint recomputes its facet from scratch.

pub mod bests;
pub mod buckets;
pub mod heatmap;
pub mod narrative;
pub mod snapshot;
pub mod sport;
pub mod totals;
pub mod trend;

pub use bests::PeriodBests;
pub use buckets::{Granularity, TimeBucket};
pub use heatmap::HeatmapDay;
pub use narrative::Story;
pub use snapshot::{build_snapshot, StatsSnapshot};
pub use sport::Sport;
pub use totals::AggregateTotals;

/// Round to one decimal place for display values.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format an integer with thousands separators ("15,187").
pub(crate) fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
