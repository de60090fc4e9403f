use tracing::debug;

use crate::domain::{FareClassId, NormalizedFare};
use crate::payload::{parse_price, parse_seats, FareGroup, RawFare};

/// Flatten a day's (or flight's) fare groups into validated fares.
///
/// Exhaustive over the payload sum type: error markers and unrecognized
/// shapes fall to the drop branch, and individual fare records that fail
/// price validation are dropped silently. A result with zero fares is a
/// normal, representable state, not an error.
pub fn normalize(groups: &[FareGroup]) -> Vec<NormalizedFare> {
    let mut fares = Vec::new();
    let mut dropped = 0usize;

    for group in groups {
        match group {
            FareGroup::Tariffs(chains) => {
                for records in chains.values() {
                    for record in records {
                        match normalize_record(record) {
                            Some(fare) => fares.push(fare),
                            None => dropped += 1,
                        }
                    }
                }
            }
            FareGroup::Failed { .. } | FareGroup::Unrecognized(_) => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, kept = fares.len(), "dropped malformed fare entries during normalization");
    }
    fares
}

/// Normalize the fare records of a single chain, preserving order.
pub(crate) fn normalize_records(records: &[RawFare]) -> Vec<NormalizedFare> {
    records.iter().filter_map(normalize_record).collect()
}

fn normalize_record(record: &RawFare) -> Option<NormalizedFare> {
    let price = record.price.as_ref().and_then(parse_price)?;
    Some(NormalizedFare {
        fare_class_id: FareClassId(record.brand.clone().unwrap_or_default()),
        price,
        seats_available: parse_seats(record.available.as_ref()),
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::normalize;
    use crate::payload::FareGroup;

    fn groups(value: serde_json::Value) -> Vec<FareGroup> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn flattens_every_chain_of_every_group() {
        let fares = normalize(&groups(json!([
            {"1001-1002": [
                {"price": "5999", "available": 4, "brand": "DP.EC.Y.1.ST"},
                {"price": 7500, "available": 0, "brand": "DP.EC.Y.2.AD"}
            ]},
            {"1003-1004": [
                {"price": 4300, "available": 2, "brand": "DP.EC.Y.1.ST"}
            ]}
        ])));

        assert_eq!(fares.len(), 3);
        assert!(fares.iter().all(|fare| fare.price > Decimal::ZERO));
    }

    #[test]
    fn drops_unparseable_and_non_positive_prices() {
        let fares = normalize(&groups(json!([
            {"1001-1002": [
                {"price": "n/a", "available": 4, "brand": "A"},
                {"price": 0, "available": 4, "brand": "B"},
                {"price": -250, "available": 4, "brand": "C"},
                {"available": 4, "brand": "D"},
                {"price": 3100, "available": 1, "brand": "E"}
            ]}
        ])));

        assert_eq!(fares.len(), 1);
        assert_eq!(fares[0].fare_class_id.as_str(), "E");
    }

    #[test]
    fn drops_error_markers_and_unknown_shapes_without_failing() {
        let fares = normalize(&groups(json!([
            {"error": "search backend unavailable"},
            [1, 2, 3],
            "noise",
            {"1001-1002": [{"price": 2800, "available": 6, "brand": "A"}]}
        ])));

        assert_eq!(fares.len(), 1);
    }

    #[test]
    fn missing_brand_becomes_empty_fare_class() {
        let fares = normalize(&groups(json!([
            {"1001-1002": [{"price": 2800, "available": 6}]}
        ])));

        assert_eq!(fares.len(), 1);
        assert_eq!(fares[0].fare_class_id.as_str(), "");
        assert_eq!(fares[0].seats_available, 6);
    }

    #[test]
    fn normalizing_already_normalized_fares_is_idempotent() {
        let first = normalize(&groups(json!([
            {"1001-1002": [
                {"price": "5999", "available": "4", "brand": "DP.EC.Y.1.ST"},
                {"price": 7500, "available": 0, "brand": "DP.EC.Y.2.AD"}
            ]}
        ])));

        // Re-encode the normalized fares as a raw payload and run them
        // through again.
        let reencoded: Vec<serde_json::Value> = first
            .iter()
            .map(|fare| {
                json!({"price": fare.price.to_string(), "available": fare.seats_available, "brand": fare.fare_class_id.as_str()})
            })
            .collect();
        let second = normalize(&groups(json!([{ "1001-1002": reencoded }])));

        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(normalize(&[]).is_empty());
    }
}
