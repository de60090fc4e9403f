use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{PricePoint, PriceSeries, SeriesStats};
use crate::payload::{date, DayRecord};

use super::normalize::normalize;
use super::select::select_min;

/// How to resolve two day records carrying the same calendar date.
///
/// Duplicate dates are malformed input, not a designed feature; the default
/// keeps the later occurrence because that is what the upstream system has
/// always done and renderers tolerate it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateDatePolicy {
    #[default]
    LastWriteWins,
    Average,
    Reject,
}

/// Build a date-ordered price series from raw day records.
///
/// Per day: normalize, take the minimum price, skip the day when no valid
/// fare remains or its date cannot be parsed. Output points are strictly
/// ascending by date regardless of input order. An all-skipped input yields
/// empty points and all-zero stats by explicit policy.
pub fn build_series(days: &[DayRecord], duplicates: DuplicateDatePolicy) -> PriceSeries {
    let mut by_date: BTreeMap<NaiveDate, Vec<Decimal>> = BTreeMap::new();
    let mut skipped = 0usize;

    for day in days {
        let Some(parsed) = date::parse_flexible(&day.date) else {
            skipped += 1;
            continue;
        };
        let Some(min_price) = select_min(&normalize(&day.prices)) else {
            skipped += 1;
            continue;
        };
        by_date.entry(parsed).or_default().push(min_price);
    }

    if skipped > 0 {
        debug!(skipped, "excluded days without a parseable date or a valid price");
    }

    let points: Vec<PricePoint> = by_date
        .into_iter()
        .filter_map(|(date, prices)| resolve_duplicates(&prices, duplicates).map(|price| PricePoint { date, price }))
        .collect();

    let stats = compute_stats(&points);
    PriceSeries { points, stats }
}

fn resolve_duplicates(prices: &[Decimal], policy: DuplicateDatePolicy) -> Option<Decimal> {
    match policy {
        DuplicateDatePolicy::LastWriteWins => prices.last().copied(),
        DuplicateDatePolicy::Average => {
            let count = Decimal::from(prices.len());
            let sum: Decimal = prices.iter().copied().sum();
            (!prices.is_empty()).then(|| sum / count)
        }
        DuplicateDatePolicy::Reject => (prices.len() == 1).then(|| prices[0]),
    }
}

fn compute_stats(points: &[PricePoint]) -> SeriesStats {
    let mut prices = points.iter().map(|point| point.price);
    let Some(first) = prices.next() else {
        return SeriesStats::default();
    };

    let (min, max, sum) = prices.fold((first, first, first), |(min, max, sum), price| {
        (min.min(price), max.max(price), sum + price)
    });
    let mean = (sum / Decimal::from(points.len()))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    SeriesStats { min, max, mean }
}
