use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};

use crate::calendar::format_ymd;
use crate::error::{CoreError, Result};
use crate::matcher::{parse, RuleKind};
use crate::source_id;

/// Value sent as `source` with every created task.
pub const TASK_SOURCE: &str = "quickadd";

/// Title and date extracted from a free-form task name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub title: String,
    /// Local wall-clock date. Midnight for every rule except the weekday rule,
    /// which keeps the time of day of the reference instant.
    pub date: Option<NaiveDateTime>,
    /// The rule that matched, if any.
    pub rule: Option<RuleKind>,
}

/// What the user typed into the task form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub name: String,
    pub description: Option<String>,
}

/// Request body for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub name: String,
    pub description: Option<String>,
    pub area_id: String,
    pub source: String,
    pub source_id: String,
    #[serde(
        serialize_with = "serialize_ymd",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_on: Option<NaiveDateTime>,
}

fn serialize_ymd<S: Serializer>(
    date: &Option<NaiveDateTime>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.serialize_str(&format_ymd(*date)),
        None => serializer.serialize_none(),
    }
}

impl NewTask {
    /// Build the request for `form`, extracting a date from the task name.
    ///
    /// A name that is nothing but a date expression keeps the raw name as its
    /// title so the task is never created nameless.
    pub fn from_form(form: &TaskForm, area_id: &str, now: NaiveDateTime) -> Result<Self> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(CoreError::MissingTaskName);
        }
        if area_id.trim().is_empty() {
            return Err(CoreError::MissingAreaId);
        }

        let parsed = parse(name, now);
        let title = if parsed.title.is_empty() {
            name.to_string()
        } else {
            parsed.title
        };

        let description = form
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Ok(Self {
            name: title,
            description,
            area_id: area_id.trim().to_string(),
            source: TASK_SOURCE.to_string(),
            source_id: source_id::generate(),
            scheduled_on: parsed.date,
        })
    }
}

/// Outcome of a successful create call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedTask {
    /// Missing when the API reports the task already exists for this source id.
    pub id: Option<String>,
}
