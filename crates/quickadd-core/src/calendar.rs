//! Lenient calendar arithmetic.
//!
//! Day and month values coming out of free text are never rejected. They
//! overflow into the following month or year the same way a lenient calendar
//! setter does: February 30th becomes March 2nd, month 15 becomes March of the
//! next year and day 0 is the last day of the previous month. The only way to
//! get `None` out of this module is to leave chrono's representable range.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

/// Formats the local calendar date as `YYYY-MM-DD`.
pub fn format_ymd(date: NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Start of the calendar day containing `now`.
pub fn midnight(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN)
}

/// `days` whole days after the start of `now`'s calendar day.
pub fn days_from_today(now: NaiveDateTime, days: u64) -> Option<NaiveDateTime> {
    midnight(now).checked_add_days(Days::new(days))
}

/// Builds a date from a year, a zero-based month and a one-based day,
/// carrying any overflow into the following months and years.
pub fn normalized_date(year: i32, month0: i64, day: i64) -> Option<NaiveDate> {
    let year = i32::try_from(i64::from(year).checked_add(month0.div_euclid(12))?).ok()?;
    let month = u32::try_from(month0.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let offset = day.checked_sub(1)?;
    if offset >= 0 {
        first.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        first.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}

/// Midnight on `day` of `month0` in `now`'s year, moved one year ahead when
/// it falls strictly before `now`.
///
/// The comparison uses the full instant, so a month/day naming today rolls
/// over as soon as midnight has passed. Rolling re-applies the overflow
/// rules, which turns February 29th into March 1st outside leap years.
pub fn upcoming_month_day(month0: i64, day: i64, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let candidate = normalized_date(now.year(), month0, day)?.and_time(NaiveTime::MIN);
    if candidate >= now {
        return Some(candidate);
    }

    let rolled = normalized_date(
        candidate.year().checked_add(1)?,
        i64::from(candidate.month0()),
        i64::from(candidate.day()),
    )?;
    Some(rolled.and_time(NaiveTime::MIN))
}
