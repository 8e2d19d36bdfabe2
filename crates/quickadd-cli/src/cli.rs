use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use crate::util::parse_reference_time;

/// Capture Lunatask tasks with natural-language dates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a task, scheduling it from any date in its name
    Add(AddCommand),
    /// Show how task names would be split into title and date
    Parse(ParseCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The task name, e.g. "pay rent in 3 days". Prompts when omitted.
    pub text: Vec<String>,
    /// The description of the task
    #[clap(short, long)]
    pub description: Option<String>,
    /// Print the request body instead of sending it
    #[clap(long)]
    pub dry_run: bool,
    /// Reference time used instead of the system clock
    #[clap(long, hide = true, value_parser = parse_reference_time)]
    pub now: Option<NaiveDateTime>,
}

#[derive(Parser, Debug, Clone)]
pub struct ParseCommand {
    /// One or more task names to parse
    #[clap(required = true)]
    pub inputs: Vec<String>,
    /// Print results as JSON
    #[clap(long)]
    pub json: bool,
    /// Reference time used instead of the system clock
    #[clap(long, hide = true, value_parser = parse_reference_time)]
    pub now: Option<NaiveDateTime>,
}
