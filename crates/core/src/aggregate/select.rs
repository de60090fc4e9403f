use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{DayPriceSummary, NormalizedFare};
use crate::payload::FareGroup;

use super::normalize::normalize;

/// The numerically smallest price of the sequence, or `None` when it is
/// empty. Callers must branch on absence explicitly; there is no zero or
/// sentinel fallback.
pub fn select_min(fares: &[NormalizedFare]) -> Option<Decimal> {
    fares.iter().map(|fare| fare.price).min()
}

/// Normalize one day's fare groups and summarize it.
pub fn summarize_day(date: NaiveDate, groups: &[FareGroup]) -> DayPriceSummary {
    let fares = normalize(groups);
    DayPriceSummary { date, min_price: select_min(&fares), fare_count: fares.len() }
}
