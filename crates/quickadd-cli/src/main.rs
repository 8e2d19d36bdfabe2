use clap::Parser;
use env_logger::Env;
use owo_colors::{OwoColorize, Style};
use quickadd_core::error::CoreError;

mod cli;
mod commands;
mod config;
mod util;
mod views;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();

    let config = match config::Config::new() {
        Ok(config) => config,
        Err(e) => {
            handle_error(anyhow::anyhow!("Invalid configuration: {}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        cli::Commands::Add(command) => commands::add::add_task(command, &config).await,
        cli::Commands::Parse(command) => commands::parse::parse_inputs(command),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::MissingApiToken => {
                eprintln!(
                    "{} API token required. Set {} or add api_token to quickadd.toml.",
                    "Error:".style(error_style),
                    "QUICKADD_API_TOKEN".yellow()
                );
            }
            CoreError::MissingAreaId => {
                eprintln!(
                    "{} Area ID required. Set {} or add area_id to quickadd.toml.",
                    "Error:".style(error_style),
                    "QUICKADD_AREA_ID".yellow()
                );
            }
            CoreError::InvalidToken => {
                eprintln!(
                    "{} Invalid API token. Please check your configured token.",
                    "Error:".style(error_style)
                );
            }
            CoreError::Api { status, body } => {
                eprintln!(
                    "{} Failed to create task ({}): {}",
                    "Error:".style(error_style),
                    status.yellow(),
                    body
                );
            }
            CoreError::Http(e) => {
                eprintln!("{} HTTP error: {}", "Error:".style(error_style), e);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
