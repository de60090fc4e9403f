//! Wire model for the remote fare service's payloads.
//!
//! Everything in here is untrusted: prices arrive as numbers or strings,
//! whole fare groups may be replaced by error markers, and unknown shapes
//! show up routinely. The types are deliberately shape-tolerant: fields
//! default when absent, and the [`FareGroup`] sum type gives the normalizer
//! an exhaustive match with an explicit drop branch instead of ad hoc
//! existence checks.

pub mod date;

use std::collections::BTreeMap;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::domain::DestinationResult;
use crate::errors::PayloadError;

/// One day of a route search: the date string as the service sent it, the
/// flight groups flown that day, and the per-chain fare lists.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayRecord {
    pub date: String,
    pub flights: Vec<FlightGroup>,
    pub prices: Vec<FareGroup>,
}

/// A flight group inside a day record. Only the fare chain identifier is
/// relevant to aggregation; everything else about a flight belongs to the
/// rendering collaborator.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightGroup {
    #[serde(rename = "chainId")]
    pub chain_id: Option<String>,
}

/// One entry of a day record's `prices` array.
///
/// The service emits either a map of fare chain id to fare list, or an error
/// marker object in its place. Anything else is `Unrecognized` and falls to
/// the normalizer's drop branch.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FareGroup {
    Failed { error: Value },
    Tariffs(BTreeMap<String, Vec<RawFare>>),
    Unrecognized(Value),
}

/// A single raw fare entry. Every field must be treated as possibly absent
/// or mistyped until the normalizer has vetted it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFare {
    pub price: Option<Value>,
    pub available: Option<Value>,
    pub brand: Option<String>,
}

/// Per-destination record of an anywhere search response.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationRecord {
    pub destination: String,
    pub min_price: Option<Value>,
    pub cheapest_date: Option<String>,
    pub total_days_with_prices: Option<u32>,
    pub error: Option<Value>,
}

impl DestinationRecord {
    /// Convert into the domain result. A present `error` marks the
    /// destination as failed; the ranker excludes it even if a price came
    /// along with the error.
    pub fn into_result(self) -> DestinationResult {
        DestinationResult {
            failed: self.error.is_some(),
            min_price: self.min_price.as_ref().and_then(parse_price),
            cheapest_date: self.cheapest_date.as_deref().and_then(date::parse_flexible),
            days_with_data: self.total_days_with_prices.unwrap_or(0),
            destination: self.destination,
        }
    }
}

/// Parse a price from whatever representation the wire carries.
///
/// Accepts JSON numbers and numeric strings. Returns `None` for anything
/// that is not a finite positive decimal, and never coerces to zero.
pub(crate) fn parse_price(value: &Value) -> Option<Decimal> {
    let parsed = match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Some(Decimal::from(int))
            } else {
                number.as_f64().and_then(Decimal::from_f64)
            }
        }
        Value::String(text) => {
            let text = text.trim();
            text.parse::<Decimal>().ok().or_else(|| Decimal::from_scientific(text).ok())
        }
        _ => None,
    }?;
    (parsed > Decimal::ZERO).then_some(parsed)
}

/// Parse a seat count. Missing or unparseable values count as zero seats:
/// a fare with a valid price still participates in price aggregation, it is
/// just not bookable.
pub(crate) fn parse_seats(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(number)) => number.as_u64().map(|n| n.min(u32::MAX as u64) as u32).unwrap_or(0),
        Some(Value::String(text)) => text.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    }
}

/// Decode a sequence of day records from a raw JSON value.
///
/// Accepts either a bare array or the service's search envelope (an object
/// whose `flights` key holds the array). Malformed elements inside the array
/// are skipped per element; a top-level value of any other shape is a caller
/// contract violation and fails loudly.
pub fn decode_days(value: &Value) -> Result<Vec<DayRecord>, PayloadError> {
    let items = unwrap_collection(value, "flights", "day records")?;
    Ok(decode_elements(items, "day record"))
}

/// Decode per-destination anywhere records. Same tolerance rules as
/// [`decode_days`]; the envelope key here is `cheapest_flights`.
pub fn decode_destinations(value: &Value) -> Result<Vec<DestinationRecord>, PayloadError> {
    let items = unwrap_collection(value, "cheapest_flights", "destination records")?;
    Ok(decode_elements(items, "destination record"))
}

fn unwrap_collection<'a>(
    value: &'a Value,
    envelope_key: &str,
    expected: &'static str,
) -> Result<&'a [Value], PayloadError> {
    if let Some(items) = value.as_array() {
        return Ok(items);
    }
    if let Some(items) = value.get(envelope_key).and_then(Value::as_array) {
        return Ok(items);
    }
    Err(PayloadError::NotACollection { expected, found: json_type_name(value) })
}

fn decode_elements<T: serde::de::DeserializeOwned>(items: &[Value], what: &str) -> Vec<T> {
    let mut decoded = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for item in items {
        match serde_json::from_value::<T>(item.clone()) {
            Ok(record) => decoded.push(record),
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(skipped, kept = decoded.len(), "skipped undecodable {what} elements");
    }
    decoded
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::{json, Value};

    use super::{decode_days, decode_destinations, parse_price, parse_seats, FareGroup};
    use crate::errors::PayloadError;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn price_parses_numbers_and_numeric_strings() {
        assert_eq!(parse_price(&json!(5999)), Some(dec("5999")));
        assert_eq!(parse_price(&json!(5999.5)), Some(dec("5999.5")));
        assert_eq!(parse_price(&json!("5999")), Some(dec("5999")));
        assert_eq!(parse_price(&json!(" 5999.50 ")), Some(dec("5999.50")));
    }

    #[test]
    fn price_rejects_non_positive_and_non_numeric() {
        assert_eq!(parse_price(&json!("n/a")), None);
        assert_eq!(parse_price(&json!(0)), None);
        assert_eq!(parse_price(&json!(-10)), None);
        assert_eq!(parse_price(&json!(null)), None);
        assert_eq!(parse_price(&json!([5999])), None);
        assert_eq!(parse_price(&json!(f64::NAN)), None); // serializes to null
    }

    #[test]
    fn seats_default_to_zero_when_absent_or_mistyped() {
        assert_eq!(parse_seats(Some(&json!(4))), 4);
        assert_eq!(parse_seats(Some(&json!("4"))), 4);
        assert_eq!(parse_seats(Some(&json!(-1))), 0);
        assert_eq!(parse_seats(Some(&json!("many"))), 0);
        assert_eq!(parse_seats(None), 0);
    }

    #[test]
    fn fare_group_classifies_error_markers() {
        let group: FareGroup = serde_json::from_value(json!({"error": "backend timeout"})).unwrap();
        assert!(matches!(group, FareGroup::Failed { .. }));
    }

    #[test]
    fn fare_group_classifies_tariff_maps() {
        let group: FareGroup = serde_json::from_value(json!({
            "44684148-44684149": [{"price": "5999", "available": 4, "brand": "DP.EC.Y.1.ST"}]
        }))
        .unwrap();
        match group {
            FareGroup::Tariffs(chains) => assert_eq!(chains.len(), 1),
            other => panic!("expected tariffs, got {other:?}"),
        }
    }

    #[test]
    fn fare_group_keeps_unknown_shapes_for_the_drop_branch() {
        let group: FareGroup = serde_json::from_value(json!([1, 2, 3])).unwrap();
        assert!(matches!(group, FareGroup::Unrecognized(_)));
    }

    #[test]
    fn decode_days_accepts_bare_array_and_envelope() {
        let bare = json!([{"date": "01.09.2026", "flights": [], "prices": []}]);
        assert_eq!(decode_days(&bare).unwrap().len(), 1);

        let envelope = json!({"flights": [{"date": "01.09.2026"}], "days_with_data": 1});
        assert_eq!(decode_days(&envelope).unwrap().len(), 1);
    }

    #[test]
    fn decode_days_skips_garbage_elements_but_keeps_good_ones() {
        let value = json!([42, {"date": "01.09.2026", "prices": []}, "noise"]);
        let days = decode_days(&value).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, "01.09.2026");
    }

    #[test]
    fn decode_days_fails_loudly_on_non_collection_input() {
        let error = decode_days(&Value::String("not a payload".into())).unwrap_err();
        assert!(matches!(error, PayloadError::NotACollection { found: "string", .. }));
    }

    #[test]
    fn destination_record_converts_error_marker_to_failed() {
        let records = decode_destinations(&json!([
            {"destination": "LED", "min_price": 4200, "cheapest_date": "03.09.2026", "total_days_with_prices": 12},
            {"destination": "AER", "min_price": 3100, "error": "rate limited"}
        ]))
        .unwrap();

        let led = records[0].clone().into_result();
        assert!(!led.failed);
        assert_eq!(led.min_price, Some(dec("4200")));
        assert_eq!(led.days_with_data, 12);
        assert!(led.cheapest_date.is_some());

        let aer = records[1].clone().into_result();
        assert!(aer.failed);
        assert_eq!(aer.min_price, Some(dec("3100")));
    }
}
