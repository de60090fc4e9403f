//! Fare aggregation engine.
//!
//! Takes the raw, deeply nested fare payload returned by a remote airfare
//! service and derives the views a search UI renders: the cheapest fare per
//! day, a chronological price series with summary statistics, a per-flight
//! tariff table grouped by fare class, and a ranked destination list for
//! open-ended "anywhere" searches.
//!
//! The payload is treated as hostile: prices may be strings, fare lists may
//! be replaced by error markers, dates arrive in mixed formats. Malformed
//! entries are dropped, never coerced, and no data-quality problem ever
//! surfaces as an error to the caller.

pub mod aggregate;
pub mod domain;
pub mod errors;
pub mod payload;

pub use aggregate::{
    build_series, build_tariff_table, evaluate_destination, normalize, rank_destinations,
    select_min, summarize_day, summarize_window, AggregationOptions, DuplicateDatePolicy,
    FareEngine,
};
pub use domain::{
    DayPriceSummary, DestinationResult, FareClassId, NormalizedFare, PricePoint, PriceSeries,
    SeriesStats, TariffOption, WindowSummary,
};
pub use errors::PayloadError;
pub use payload::{
    decode_days, decode_destinations, DayRecord, DestinationRecord, FareGroup, FlightGroup, RawFare,
};
