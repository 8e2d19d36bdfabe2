//! # Quickadd Core Library
//!
//! Turns a free-form task name into a Lunatask task: the date mentioned in
//! the text is pulled out into a scheduled date and the rest becomes the
//! title.
//!
//! ## Features
//!
//! - **Ordered Rule Table**: eight case-insensitive date patterns, first match
//!   wins (`in 3 days`, `2 weeks`, `next friday`, `3rd of july`, `july 3`,
//!   `25/12`, `tomorrow`, `today`)
//! - **Injected Clock**: every computation runs against one `now` snapshot
//! - **Lenient Calendar**: out-of-range days and months carry over instead of
//!   failing; parsing never errors
//! - **Idempotent Submission**: each request carries a generated `source_id`
//!
//! ## Core Modules
//!
//! - [`matcher`]: the rule table and [`matcher::parse`]
//! - [`weekday`]: next occurrence of a named weekday
//! - [`calendar`]: lenient date arithmetic and `YYYY-MM-DD` formatting
//! - [`models`]: parse results and request payloads
//! - [`source_id`]: idempotency tokens
//! - [`client`]: the [`client::TaskSink`] trait and the HTTP client
//! - [`error`]: error types for submission
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use quickadd_core::matcher::parse;
//!
//! let now = NaiveDate::from_ymd_opt(2025, 6, 10)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//!
//! let result = parse("Buy milk tomorrow", now);
//! assert_eq!(result.title, "Buy milk");
//! assert_eq!(
//!     result.date.map(|d| d.date()),
//!     NaiveDate::from_ymd_opt(2025, 6, 11)
//! );
//! ```

pub mod calendar;
pub mod client;
pub mod error;
pub mod matcher;
pub mod models;
pub mod source_id;
pub mod weekday;

pub use error::{CoreError, Result};
pub use matcher::parse;
pub use models::ParseResult;
