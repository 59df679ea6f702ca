use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::debug;
use weather_now_core::{
    CityCatalog, Config, MAX_SUGGESTIONS, SearchSession, SubmitOutcome, WeatherProvider,
    provider_from_config,
};

use crate::{completer::CityCompleter, output};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-now", version, about = "Current weather for popular Indian cities")]
pub struct Cli {
    /// Log lookups and requests to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive search with city autocomplete (default).
    Search,

    /// Show weather for one city from the catalog.
    Show {
        /// City name, matched case-insensitively against the catalog.
        city: String,

        /// Print the derived values as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List cities matching a prefix, or the whole catalog.
    Cities {
        prefix: Option<String>,
    },

    /// Store the OpenWeather API key in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Search) {
            Command::Search => {
                let config = Config::load()?;
                let provider = provider_from_config(&config)?;
                search(SearchSession::new(provider)).await
            }
            Command::Show { city, json } => {
                let config = Config::load()?;
                let provider = provider_from_config(&config)?;
                show(SearchSession::new(provider), &city, json).await
            }
            Command::Cities { prefix } => {
                let catalog = CityCatalog::popular();
                match prefix {
                    Some(prefix) => output::print_suggestions(&catalog.suggest(&prefix)),
                    None => output::print_suggestions(catalog.cities()),
                }
                Ok(())
            }
            Command::Configure => configure(),
        }
    }
}

async fn show<P: WeatherProvider>(
    mut session: SearchSession<P>,
    city: &str,
    json: bool,
) -> anyhow::Result<()> {
    session.set_input(city);

    let outcome = session.submit().await?;
    if let Some(line) = output::failure_line(&outcome) {
        anyhow::bail!(line);
    }

    match session.snapshot() {
        Some(snapshot) if json => output::print_json(snapshot)?,
        snapshot => output::print_panel(snapshot),
    }

    Ok(())
}

async fn search<P: WeatherProvider>(mut session: SearchSession<P>) -> anyhow::Result<()> {
    let completer = CityCompleter::new(session.catalog());
    output::print_panel(session.snapshot());

    loop {
        let prompt = Text::new("City:")
            .with_placeholder("Enter a city")
            .with_autocomplete(completer)
            .with_page_size(MAX_SUGGESTIONS)
            .with_initial_value(session.input())
            .prompt();

        let text = match prompt {
            Ok(text) => text,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                debug!("search cancelled");
                return Ok(());
            }
            Err(err) => return Err(err).context("Failed to read city input"),
        };

        session.set_input(text);

        match session.submit().await {
            Ok(SubmitOutcome::Updated) => {}
            Ok(outcome) => {
                if let Some(line) = output::failure_line(&outcome) {
                    eprintln!("{line}");
                }
            }
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        }

        println!();
        output::print_panel(session.snapshot());
        println!();
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load_file()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.api_key = Some(api_key.trim().to_string());
    let path = config.save()?;

    println!("Saved API key to {}", path.display());
    Ok(())
}
