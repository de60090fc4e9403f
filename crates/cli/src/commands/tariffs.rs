use std::path::Path;

use serde::Serialize;

use farescan_core::{build_tariff_table, payload::date, TariffOption};

use crate::commands::{decode_day_records, load_payload, CommandResult};

#[derive(Debug, Serialize)]
struct TariffsOutput {
    command: &'static str,
    status: &'static str,
    chain_id: String,
    date: Option<String>,
    tariffs: Vec<TariffOption>,
}

/// Ranked tariff table for one fare chain, taken from the first day of the
/// payload that carries the chain. An unknown chain is a normal empty
/// result, not an error.
pub fn run(payload_path: &Path, chain_id: &str) -> CommandResult {
    let value = match load_payload("tariffs", payload_path) {
        Ok(value) => value,
        Err(failure) => return failure,
    };
    let records = match decode_day_records("tariffs", &value) {
        Ok(records) => records,
        Err(failure) => return failure,
    };

    let hit = records
        .iter()
        .map(|record| (record, build_tariff_table(&record.prices, chain_id)))
        .find(|(_, tariffs)| !tariffs.is_empty());

    let (date, tariffs) = match hit {
        Some((record, tariffs)) => {
            (date::parse_flexible(&record.date).map(|d| d.to_string()), tariffs)
        }
        None => (None, Vec::new()),
    };

    CommandResult::success(TariffsOutput {
        command: "tariffs",
        status: "ok",
        chain_id: chain_id.to_string(),
        date,
        tariffs,
    })
}
