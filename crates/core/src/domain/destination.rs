use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cheapest-fare result for one destination of an anywhere search.
///
/// Created from the remote service's per-destination record (or locally via
/// `aggregate::window::evaluate_destination`). The ranker only filters and
/// sorts these; it never mutates or re-derives `failed` or `cheapest_date`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationResult {
    pub destination: String,
    pub min_price: Option<Decimal>,
    pub cheapest_date: Option<NaiveDate>,
    pub days_with_data: u32,
    pub failed: bool,
}
