use std::path::Path;

use serde::Serialize;

use farescan_core::{build_series, DuplicateDatePolicy, PriceSeries};

use crate::commands::{decode_day_records, load_payload, CommandResult};

#[derive(Debug, Serialize)]
struct SeriesOutput {
    command: &'static str,
    status: &'static str,
    duplicate_dates: DuplicateDatePolicy,
    series: PriceSeries,
}

/// Chronological price series for a captured route search payload.
pub fn run(payload_path: &Path, duplicates: DuplicateDatePolicy) -> CommandResult {
    let value = match load_payload("series", payload_path) {
        Ok(value) => value,
        Err(failure) => return failure,
    };
    let records = match decode_day_records("series", &value) {
        Ok(records) => records,
        Err(failure) => return failure,
    };

    CommandResult::success(SeriesOutput {
        command: "series",
        status: "ok",
        duplicate_dates: duplicates,
        series: build_series(&records, duplicates),
    })
}
