use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use surf_core::{Beach, BeachPosition, Config, ForecastService, ReqwestFetcher, StormGlass};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "surf", version, about = "Marine forecast for your beaches")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use this config file instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the StormGlass API token.
    Configure,

    /// Show the hourly marine forecast for a coordinate.
    Points {
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        #[arg(allow_negative_numbers = true)]
        lng: f64,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Manage the beaches used by `forecast`.
    #[command(subcommand)]
    Beach(BeachCommand),

    /// Show the forecast for every configured beach, grouped by hour.
    Forecast {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum BeachCommand {
    /// Add a beach, or replace one with the same name.
    Add {
        name: String,

        #[arg(allow_negative_numbers = true)]
        lat: f64,

        #[arg(allow_negative_numbers = true)]
        lng: f64,

        /// Direction the beach faces: N, S, E or W.
        #[arg(value_parser = parse_position)]
        position: BeachPosition,
    },

    /// Remove a beach by name.
    Remove { name: String },

    /// List configured beaches.
    List,
}

fn parse_position(value: &str) -> Result<BeachPosition, String> {
    BeachPosition::try_from(value).map_err(|e| e.to_string())
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config_path = match self.config {
            Some(path) => path,
            None => Config::config_file_path()?,
        };
        let mut config = Config::load_from(&config_path)?;

        match self.command {
            Command::Configure => {
                let token = inquire::Password::new("StormGlass API token:")
                    .without_confirmation()
                    .prompt()
                    .context("Failed to read API token")?;

                config.set_api_token(token.trim().to_string());
                config.save_to(&config_path)?;
                println!("Saved API token to {}", config_path.display());
            }
            Command::Points { lat, lng, json } => {
                let points = stormglass(&config)?.fetch_points(lat, lng).await?;
                tracing::info!(lat, lng, points = points.len(), "fetched forecast points");

                if json {
                    println!("{}", serde_json::to_string_pretty(&points)?);
                } else {
                    print!("{}", output::points_table(&points));
                }
            }
            Command::Beach(BeachCommand::Add { name, lat, lng, position }) => {
                config.add_beach(Beach { name: name.clone(), lat, lng, position });
                config.save_to(&config_path)?;
                println!("Saved beach '{name}'");
            }
            Command::Beach(BeachCommand::Remove { name }) => {
                if !config.remove_beach(&name) {
                    anyhow::bail!("No beach named '{name}' is configured.");
                }
                config.save_to(&config_path)?;
                println!("Removed beach '{name}'");
            }
            Command::Beach(BeachCommand::List) => {
                print!("{}", output::beaches_table(&config.beaches));
            }
            Command::Forecast { json } => {
                if config.beaches.is_empty() {
                    anyhow::bail!(
                        "No beaches configured.\n\
                         Hint: run `surf beach add <name> <lat> <lng> <position>` first."
                    );
                }

                let service = ForecastService::new(stormglass(&config)?);
                let forecast = service.process_forecast_for_beaches(&config.beaches).await?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&forecast)?);
                } else {
                    print!("{}", output::forecast_table(&forecast));
                }
            }
        }

        Ok(())
    }
}

fn stormglass(config: &Config) -> anyhow::Result<StormGlass<ReqwestFetcher>> {
    let fetcher = ReqwestFetcher::new(config.api_token()?.to_owned());

    Ok(StormGlass::new(fetcher)
        .with_api_url(config.stormglass.api_url.clone())
        .with_forecast_days(config.stormglass.forecast_days))
}
