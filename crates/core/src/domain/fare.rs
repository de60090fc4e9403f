use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fare-class (tariff brand) identifier, e.g. `DP.EC.Y.1.ST`.
///
/// Ordered lexically; tariff tables use it as the deterministic tie-break
/// when two tariffs share a price.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FareClassId(pub String);

impl FareClassId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single fully validated fare.
///
/// Produced only by the normalizer. Invariants: `price` is a finite positive
/// decimal, `seats_available` is already clamped to a sensible count.
/// Downstream components rely on these and perform no further validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedFare {
    pub fare_class_id: FareClassId,
    pub price: Decimal,
    pub seats_available: u32,
}

/// One row of a per-flight tariff table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffOption {
    pub fare_class_id: FareClassId,
    pub price: Decimal,
    pub seats_available: u32,
    pub is_available: bool,
}

impl From<NormalizedFare> for TariffOption {
    fn from(fare: NormalizedFare) -> Self {
        let is_available = fare.seats_available > 0;
        Self {
            fare_class_id: fare.fare_class_id,
            price: fare.price,
            seats_available: fare.seats_available,
            is_available,
        }
    }
}
