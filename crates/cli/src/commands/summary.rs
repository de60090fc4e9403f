use std::path::Path;

use serde::Serialize;

use farescan_core::{payload::date, summarize_day, summarize_window, DayPriceSummary, WindowSummary};

use crate::commands::{decode_day_records, load_payload, CommandResult};

#[derive(Debug, Serialize)]
struct SummaryOutput {
    command: &'static str,
    status: &'static str,
    days: Vec<DayPriceSummary>,
    window: WindowSummary,
}

/// Per-day cheapest-fare summaries plus the window aggregate for a captured
/// route search payload.
pub fn run(payload_path: &Path) -> CommandResult {
    let value = match load_payload("summary", payload_path) {
        Ok(value) => value,
        Err(failure) => return failure,
    };
    let records = match decode_day_records("summary", &value) {
        Ok(records) => records,
        Err(failure) => return failure,
    };

    let mut days: Vec<DayPriceSummary> = records
        .iter()
        .filter_map(|record| {
            date::parse_flexible(&record.date)
                .map(|parsed| summarize_day(parsed, &record.prices))
        })
        .collect();
    days.sort_by_key(|summary| summary.date);

    CommandResult::success(SummaryOutput {
        command: "summary",
        status: "ok",
        days,
        window: summarize_window(&records),
    })
}
