use anyhow::Result;
use dialoguer::Input;
use log::debug;
use owo_colors::{OwoColorize, Style};
use quickadd_core::client::{submit, LunataskClient};
use quickadd_core::models::{NewTask, TaskForm};

use crate::cli::AddCommand;
use crate::config::Config;
use crate::util::reference_now;
use crate::views::table::describe_date;

pub async fn add_task(command: AddCommand, config: &Config) -> Result<()> {
    let form = if command.text.is_empty() {
        prompt_form(command.description)?
    } else {
        TaskForm {
            name: command.text.join(" "),
            description: command.description,
        }
    };
    let now = reference_now(command.now);
    debug!("Adding task {:?} at {}", form.name, now);

    if command.dry_run {
        let task = NewTask::from_form(&form, config.area_id()?, now)?;
        println!("{}", serde_json::to_string_pretty(&task)?);
        return Ok(());
    }

    let client = LunataskClient::new(&config.api_url, config.api_token()?)?;
    let (task, created) = submit(&client, &form, config.area_id()?, now).await?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();

    println!(
        "{} Created task: {}",
        "✓".style(success_style),
        task.name.bright_white().bold()
    );
    match task.scheduled_on {
        Some(date) => println!(
            "  {} Scheduled: {}",
            "→".style(info_style),
            describe_date(date, now).cyan()
        ),
        None => println!("  {} No date found in the task name", "→".style(info_style)),
    }
    match created.id {
        Some(id) => println!("  {} Task ID: {}", "→".style(info_style), id.yellow()),
        None => println!(
            "  {} Task already existed for source id {}",
            "→".style(info_style),
            task.source_id.yellow()
        ),
    }

    Ok(())
}

/// Ask for the task fields that were not given on the command line.
fn prompt_form(description: Option<String>) -> Result<TaskForm> {
    let name: String = Input::new()
        .with_prompt("Task name")
        .interact_text()?;

    let description = match description {
        Some(description) => Some(description),
        None => {
            let description: String = Input::new()
                .with_prompt("Description (optional)")
                .allow_empty(true)
                .interact_text()?;
            Some(description)
        }
    };

    Ok(TaskForm { name, description })
}
