use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use tracing::info;
use weather_core::{Config, WeatherProvider, WeatherWidget, provider_from_config};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a named location")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `interactive` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Prompt for locations until Esc or Ctrl-C.
    Interactive,

    /// Look up one location and exit.
    Show {
        /// Location name, e.g. "Paris".
        location: String,

        /// Print the widget view as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Interactive => {
                let widget = WeatherWidget::new(load_provider()?);
                interactive(widget).await
            }
            Command::Show { location, json } => {
                let widget = WeatherWidget::new(load_provider()?);
                show(widget, location, json).await
            }
        }
    }
}

fn load_provider() -> anyhow::Result<Box<dyn WeatherProvider>> {
    let config = Config::load()?;
    provider_from_config(&config)
}

fn configure() -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    let path = config.save()?;
    info!(path = %path.display(), "configuration saved");

    println!("Saved configuration to {}", path.display());
    Ok(ExitCode::SUCCESS)
}

async fn interactive<P: WeatherProvider>(mut widget: WeatherWidget<P>) -> anyhow::Result<ExitCode> {
    println!("Weather Widget");
    println!("Search for the current weather conditions in your city.\n");

    loop {
        let answer = Text::new("Location:")
            .with_placeholder("Enter a city name")
            .with_initial_value(widget.location())
            .prompt();

        let raw = match answer {
            Ok(raw) => raw,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read location"),
        };

        widget.set_location(raw);
        println!("Loading...");
        widget.submit().await?;
        println!("{}\n", render::render(&widget.view()));
    }

    Ok(ExitCode::SUCCESS)
}

async fn show<P: WeatherProvider>(
    mut widget: WeatherWidget<P>,
    location: String,
    json: bool,
) -> anyhow::Result<ExitCode> {
    widget.set_location(location);
    widget.submit().await?;

    let view = widget.view();
    if json {
        let out = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
        println!("{out}");
    } else {
        println!("{}", render::render(&view));
    }

    Ok(if view.status.error().is_some() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
