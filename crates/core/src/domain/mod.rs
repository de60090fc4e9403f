pub mod destination;
pub mod fare;
pub mod series;

pub use destination::DestinationResult;
pub use fare::{FareClassId, NormalizedFare, TariffOption};
pub use series::{DayPriceSummary, PricePoint, PriceSeries, SeriesStats, WindowSummary};
