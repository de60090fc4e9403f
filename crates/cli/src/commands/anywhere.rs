use std::path::Path;

use rust_decimal::Decimal;
use serde::Serialize;

use farescan_core::{decode_destinations, rank_destinations, DestinationResult};

use crate::commands::{load_payload, CommandResult};

#[derive(Debug, Serialize)]
struct AnywhereOutput {
    command: &'static str,
    status: &'static str,
    max_price: Option<Decimal>,
    destinations: Vec<DestinationResult>,
}

/// Ranked destination list for a captured anywhere-search payload, with an
/// optional price cap applied before ranking.
pub fn run(payload_path: &Path, max_price: Option<&str>) -> CommandResult {
    let cap = match max_price {
        Some(raw) => match raw.trim().parse::<Decimal>() {
            Ok(value) => Some(value),
            Err(_) => {
                return CommandResult::failure(
                    "anywhere",
                    "invalid_argument",
                    format!("`--max-price {raw}` is not a decimal amount"),
                );
            }
        },
        None => None,
    };

    let value = match load_payload("anywhere", payload_path) {
        Ok(value) => value,
        Err(failure) => return failure,
    };
    let records = match decode_destinations(&value) {
        Ok(records) => records,
        Err(error) => return CommandResult::failure("anywhere", "payload_shape", error.to_string()),
    };

    let mut results: Vec<DestinationResult> =
        records.into_iter().map(|record| record.into_result()).collect();
    if let Some(cap) = cap {
        results.retain(|result| result.min_price.map_or(false, |price| price <= cap));
    }

    CommandResult::success(AnywhereOutput {
        command: "anywhere",
        status: "ok",
        max_price: cap,
        destinations: rank_destinations(results),
    })
}
