//! Next-occurrence resolution for named weekdays.

use chrono::{Datelike, Days, NaiveDateTime, Weekday};

/// Parse a full English weekday name (case-insensitive).
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.trim().to_lowercase().as_str() {
        "sunday" => Some(Weekday::Sun),
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        _ => None,
    }
}

/// Next occurrence of `target` strictly after today.
///
/// The distance is always between 1 and 7 days: asking for the weekday `now`
/// already falls on yields the same day next week. The time of day is carried
/// over from `now` unchanged. `None` only at the end of chrono's date range.
pub fn next_weekday(target: Weekday, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let current = now.weekday().num_days_from_sunday();
    let target = target.num_days_from_sunday();

    let delta = if target > current {
        target - current
    } else {
        target + 7 - current
    };

    now.checked_add_days(Days::new(u64::from(delta)))
}

/// Next occurrence of the weekday called `name`, or `None` for an unknown name.
pub fn next_occurrence(name: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    weekday_from_name(name).and_then(|weekday| next_weekday(weekday, now))
}
