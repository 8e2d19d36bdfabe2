//! Natural-language date extraction from task names.
//!
//! A task name such as `"pay rent in 3 days"` is split into a title
//! (`"pay rent"`) and a date. Recognition is a fixed, ordered table of
//! [`DateRule`]s; the first rule whose pattern occurs anywhere in the text
//! wins, its span is cut out of the text and the rest becomes the title.
//!
//! The numeric rule reads `D/M` (day first). `6/15` is therefore day 6 of
//! month 15, which the lenient calendar carries into March of the next year.

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::{Captures, Regex, RegexBuilder};
use serde::Serialize;
use std::fmt;

use crate::calendar::{days_from_today, midnight, upcoming_month_day};
use crate::models::ParseResult;
use crate::weekday::next_occurrence;

const MONTH_NAMES: &str = "january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec";

/// Month names and abbreviations with their zero-based month index.
const MONTHS: [(&str, i64); 23] = [
    ("january", 0),
    ("february", 1),
    ("march", 2),
    ("april", 3),
    ("may", 4),
    ("june", 5),
    ("july", 6),
    ("august", 7),
    ("september", 8),
    ("october", 9),
    ("november", 10),
    ("december", 11),
    ("jan", 0),
    ("feb", 1),
    ("mar", 2),
    ("apr", 3),
    ("jun", 5),
    ("jul", 6),
    ("aug", 7),
    ("sep", 8),
    ("oct", 9),
    ("nov", 10),
    ("dec", 11),
];

/// The kinds of date expression, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// `in 3 days`, `1 day`
    RelativeDays,
    /// `in 2 weeks`, `1 week`
    RelativeWeeks,
    /// `friday`, `next monday`
    Weekday,
    /// `3rd of july`, `on 14 feb`
    DayMonth,
    /// `july 3rd`, `on feb 14`
    MonthDay,
    /// `25/12`, `on 1-3` (day first)
    NumericDayMonth,
    Tomorrow,
    Today,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::RelativeDays => "relative-days",
            RuleKind::RelativeWeeks => "relative-weeks",
            RuleKind::Weekday => "weekday",
            RuleKind::DayMonth => "day-month",
            RuleKind::MonthDay => "month-day",
            RuleKind::NumericDayMonth => "numeric-day-month",
            RuleKind::Tomorrow => "tomorrow",
            RuleKind::Today => "today",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognizer pattern paired with the extractor selected by its kind.
#[derive(Debug)]
pub struct DateRule {
    pub kind: RuleKind,
    pattern: Regex,
}

impl DateRule {
    /// Case folding, `\s` and `\b` are ASCII-only, so a match always
    /// spells a name the month and weekday tables know.
    fn new(kind: RuleKind, pattern: &str) -> Self {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .unicode(false)
            .build()
            .unwrap_or_else(|e| panic!("invalid pattern for {} rule: {}", kind, e));
        Self { kind, pattern }
    }

    /// Compute the date for a match of this rule against the `now` snapshot.
    ///
    /// `None` means the numbers in the match cannot be represented as a
    /// calendar date (e.g. a day count overflowing `u64`).
    fn extract(&self, caps: &Captures<'_>, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match self.kind {
            RuleKind::RelativeDays => days_from_today(now, number::<u64>(caps, "count")?),
            RuleKind::RelativeWeeks => {
                days_from_today(now, number::<u64>(caps, "count")?.checked_mul(7)?)
            }
            RuleKind::Weekday => next_occurrence(&caps["weekday"], now),
            RuleKind::DayMonth | RuleKind::MonthDay => upcoming_month_day(
                month_index(&caps["month"])?,
                number::<i64>(caps, "day")?,
                now,
            ),
            RuleKind::NumericDayMonth => upcoming_month_day(
                number::<i64>(caps, "month")? - 1,
                number::<i64>(caps, "day")?,
                now,
            ),
            RuleKind::Tomorrow => days_from_today(now, 1),
            RuleKind::Today => Some(midnight(now)),
        }
    }
}

lazy_static! {
    static ref RULES: Vec<DateRule> = vec![
        DateRule::new(
            RuleKind::RelativeDays,
            r"\b(?:in\s+)?(?P<count>[0-9]+)\s+days?\b",
        ),
        DateRule::new(
            RuleKind::RelativeWeeks,
            r"\b(?:in\s+)?(?P<count>[0-9]+)\s+weeks?\b",
        ),
        DateRule::new(
            RuleKind::Weekday,
            r"\b(?:next\s+)?(?P<weekday>monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
        ),
        DateRule::new(
            RuleKind::DayMonth,
            &format!(
                r"\b(?:on\s+)?(?P<day>[0-9]{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?(?P<month>{})\b",
                MONTH_NAMES
            ),
        ),
        DateRule::new(
            RuleKind::MonthDay,
            &format!(
                r"\b(?:on\s+)?(?P<month>{})\s+(?P<day>[0-9]{{1,2}})(?:st|nd|rd|th)?\b",
                MONTH_NAMES
            ),
        ),
        DateRule::new(
            RuleKind::NumericDayMonth,
            r"\b(?:on\s+)?(?P<day>[0-9]{1,2})[/-](?P<month>[0-9]{1,2})\b",
        ),
        DateRule::new(RuleKind::Tomorrow, r"\btomorrow\b"),
        DateRule::new(RuleKind::Today, r"\btoday\b"),
    ];
}

/// The rule table in evaluation order.
pub fn rules() -> &'static [DateRule] {
    &RULES
}

fn number<T: std::str::FromStr>(caps: &Captures<'_>, group: &str) -> Option<T> {
    caps.name(group)?.as_str().parse().ok()
}

/// Zero-based month index for a full or three-letter English month name.
pub fn month_index(name: &str) -> Option<i64> {
    let name = name.to_lowercase();
    MONTHS
        .iter()
        .find(|(month, _)| *month == name)
        .map(|(_, index)| *index)
}

/// Split `text` into a title and the date it mentions, relative to `now`.
///
/// Never fails. Without a recognisable expression the trimmed text comes back
/// as the title with no date. Only the first occurrence of the winning rule is
/// removed from the title.
pub fn parse(text: &str, now: NaiveDateTime) -> ParseResult {
    for rule in rules() {
        trace!("trying {} rule", rule.kind);
        let Some(caps) = rule.pattern.captures(text) else {
            continue;
        };

        let span = caps.get(0).map_or(0..0, |m| m.range());
        let date = rule.extract(&caps, now);
        debug!(
            "{} rule matched {:?} -> {:?}",
            rule.kind,
            &text[span.clone()],
            date
        );

        let mut title = String::with_capacity(text.len());
        title.push_str(&text[..span.start]);
        title.push_str(&text[span.end..]);

        return ParseResult {
            title: title.trim().to_string(),
            date,
            rule: Some(rule.kind),
        };
    }

    ParseResult {
        title: text.trim().to_string(),
        date: None,
        rule: None,
    }
}
