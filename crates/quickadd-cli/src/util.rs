use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

const REFERENCE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a `--now` override: `2025-06-10T09:30:00`, `2025-06-10 09:30:00`,
/// `2025-06-10T09:30` or a bare date (midnight).
pub fn parse_reference_time(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();
    for format in &REFERENCE_TIME_FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(time);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| format!("Invalid reference time '{}'. Use YYYY-MM-DDTHH:MM:SS", value))
}

/// The clock snapshot for one command: the override if given, else the local clock read once.
pub fn reference_now(override_now: Option<NaiveDateTime>) -> NaiveDateTime {
    override_now.unwrap_or_else(|| Local::now().naive_local())
}
