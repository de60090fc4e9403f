use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cheapest fare found for one calendar day of a search window.
///
/// `min_price` is `None` when the day had zero valid fares after
/// normalization. It is never zero and never a sentinel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPriceSummary {
    pub date: NaiveDate,
    pub min_price: Option<Decimal>,
    pub fare_count: usize,
}

/// One point of a chronological price series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: Decimal,
}

/// Summary statistics over the prices present in a series.
///
/// Computed only over days that made it into `points`; days without a price
/// are excluded, not treated as zero. When the series is empty all three
/// values are zero by explicit policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub min: Decimal,
    pub max: Decimal,
    /// Arithmetic mean, rounded to the nearest whole currency unit.
    pub mean: Decimal,
}

/// Date-ordered price series suitable for a time-series chart.
///
/// Invariant: `points` is strictly ascending by date regardless of the order
/// or date format of the input day records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub points: Vec<PricePoint>,
    pub stats: SeriesStats,
}

impl PriceSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Aggregate view of a whole search window for one route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSummary {
    pub total_days: usize,
    /// Days with at least one valid fare. Counts every priced day, not just
    /// the ones that improved the running minimum.
    pub days_with_data: usize,
    pub cheapest: Option<PricePoint>,
}
