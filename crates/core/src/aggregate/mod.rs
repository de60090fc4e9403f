//! The aggregation operations of the fare engine.
//!
//! Five independent, pure transformations over the normalized fare shape:
//! normalization, minimum selection, series building, tariff tables, and
//! destination ranking, plus the window summaries the anywhere search is
//! built from. No shared mutable state; every call returns a freshly
//! constructed value, so concurrent invocations need no coordination.

pub mod anywhere;
pub mod normalize;
pub mod select;
pub mod series;
pub mod tariff;
pub mod window;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    DayPriceSummary, DestinationResult, NormalizedFare, PriceSeries, TariffOption, WindowSummary,
};
use crate::payload::{DayRecord, FareGroup};

pub use anywhere::rank_destinations;
pub use normalize::normalize;
pub use select::{select_min, summarize_day};
pub use series::{build_series, DuplicateDatePolicy};
pub use tariff::build_tariff_table;
pub use window::{evaluate_destination, summarize_window};

/// Tunables shared by the aggregation operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationOptions {
    /// Resolution for day records sharing a calendar date.
    pub duplicate_dates: DuplicateDatePolicy,
    /// Drop destinations whose cheapest fare exceeds this cap.
    pub max_price: Option<Decimal>,
}

/// Facade bundling the aggregation operations with a fixed set of options.
///
/// The free functions remain the primary API; the facade exists for callers
/// that thread one configuration through several views of the same payload.
#[derive(Clone, Copy, Debug, Default)]
pub struct FareEngine {
    options: AggregationOptions,
}

impl FareEngine {
    pub fn new(options: AggregationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AggregationOptions {
        &self.options
    }

    pub fn normalize(&self, groups: &[FareGroup]) -> Vec<NormalizedFare> {
        normalize(groups)
    }

    pub fn select_min(&self, fares: &[NormalizedFare]) -> Option<Decimal> {
        select_min(fares)
    }

    pub fn summarize_day(&self, date: NaiveDate, groups: &[FareGroup]) -> DayPriceSummary {
        summarize_day(date, groups)
    }

    pub fn build_series(&self, days: &[DayRecord]) -> PriceSeries {
        build_series(days, self.options.duplicate_dates)
    }

    pub fn build_tariff_table(&self, groups: &[FareGroup], chain_id: &str) -> Vec<TariffOption> {
        build_tariff_table(groups, chain_id)
    }

    pub fn rank_destinations(&self, results: Vec<DestinationResult>) -> Vec<DestinationResult> {
        rank_destinations(results)
    }

    pub fn summarize_window(&self, days: &[DayRecord]) -> WindowSummary {
        summarize_window(days)
    }

    pub fn evaluate_destination(
        &self,
        destination: &str,
        days: &[DayRecord],
    ) -> Option<DestinationResult> {
        evaluate_destination(destination, days, &self.options)
    }
}
