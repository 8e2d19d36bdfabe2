use chrono::{NaiveDateTime, NaiveTime};
use chrono_humanize::HumanTime;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use quickadd_core::ParseResult;

#[derive(Debug, Clone)]
pub struct ViewParse {
    pub input: String,
    pub result: ParseResult,
}

/// Calendar date, plus the time when the rule kept one.
pub fn format_date(date: NaiveDateTime) -> String {
    if date.time() == NaiveTime::MIN {
        date.format("%Y-%m-%d").to_string()
    } else {
        date.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// `2025-06-13 (in 3 days)`
pub fn describe_date(date: NaiveDateTime, now: NaiveDateTime) -> String {
    format!("{} ({})", format_date(date), HumanTime::from(date - now))
}

pub fn display_parse_results(rows: &[ViewParse], now: NaiveDateTime) {
    let mut table = Table::new();
    table.set_header(vec!["Input", "Title", "Date", "Rule"]);

    for view in rows {
        let mut row = Row::new();
        row.add_cell(Cell::new(&view.input));

        let title_cell = if view.result.title.is_empty() {
            Cell::new("(empty)").fg(Color::DarkGrey)
        } else {
            Cell::new(&view.result.title).add_attribute(Attribute::Bold)
        };
        row.add_cell(title_cell);

        let date_cell = match (view.result.date, view.result.rule) {
            (Some(date), _) => Cell::new(describe_date(date, now)).fg(Color::Cyan),
            (None, Some(_)) => Cell::new("out of range").fg(Color::Red),
            (None, None) => Cell::new("None").fg(Color::DarkGrey),
        };
        row.add_cell(date_cell);

        row.add_cell(Cell::new(
            view.result
                .rule
                .map_or_else(|| "-".to_string(), |rule| rule.to_string()),
        ));
        table.add_row(row);
    }

    println!("{table}");
}
