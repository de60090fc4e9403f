use crate::domain::{DestinationResult, PricePoint, WindowSummary};
use crate::payload::{date, DayRecord};

use super::normalize::normalize;
use super::select::select_min;
use super::AggregationOptions;

/// Summarize a whole search window for one route: how many days were
/// searched, how many carried at least one valid fare, and the single
/// cheapest `(date, price)` across the window.
///
/// Days whose date cannot be parsed are excluded entirely, consistent with
/// the series builder. When several days share the cheapest price the
/// earliest-seen one wins.
pub fn summarize_window(days: &[DayRecord]) -> WindowSummary {
    let mut summary = WindowSummary { total_days: days.len(), ..WindowSummary::default() };

    for day in days {
        let Some(parsed) = date::parse_flexible(&day.date) else { continue };
        let Some(min_price) = select_min(&normalize(&day.prices)) else { continue };

        summary.days_with_data += 1;
        if summary.cheapest.map_or(true, |cheapest| min_price < cheapest.price) {
            summary.cheapest = Some(PricePoint { date: parsed, price: min_price });
        }
    }

    summary
}

/// Evaluate one destination of an anywhere search from its raw day records.
///
/// Returns `None` when no day carries a valid fare, or when the cheapest
/// fare exceeds the configured price cap; the destination simply does not
/// appear in the result list.
pub fn evaluate_destination(
    destination: &str,
    days: &[DayRecord],
    options: &AggregationOptions,
) -> Option<DestinationResult> {
    let summary = summarize_window(days);
    let cheapest = summary.cheapest?;

    if options.max_price.is_some_and(|cap| cheapest.price > cap) {
        return None;
    }

    Some(DestinationResult {
        destination: destination.to_string(),
        min_price: Some(cheapest.price),
        cheapest_date: Some(cheapest.date),
        days_with_data: summary.days_with_data as u32,
        failed: false,
    })
}
