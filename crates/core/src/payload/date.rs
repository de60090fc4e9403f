use chrono::NaiveDate;

/// Parse a date string in any of the formats the remote service is known to
/// emit: the locale form `17.03.2026`, ISO `2026-03-17`, or an ISO datetime
/// of which only the date prefix matters.
///
/// Returns `None` for anything else; callers exclude the record rather than
/// sorting it incorrectly.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%d.%m.%Y") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    // Datetime forms: keep the date prefix, drop the rest.
    let prefix = trimmed.split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}
