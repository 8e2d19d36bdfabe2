use anyhow::Result;
use quickadd_core::matcher::parse;

use crate::cli::ParseCommand;
use crate::util::reference_now;
use crate::views::table::{display_parse_results, ViewParse};

pub fn parse_inputs(command: ParseCommand) -> Result<()> {
    let now = reference_now(command.now);

    let rows: Vec<ViewParse> = command
        .inputs
        .into_iter()
        .map(|input| {
            let result = parse(&input, now);
            ViewParse { input, result }
        })
        .collect();

    if command.json {
        let results: Vec<_> = rows.iter().map(|row| &row.result).collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        display_parse_results(&rows, now);
    }

    Ok(())
}
