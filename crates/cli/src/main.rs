//! # covid
//!
//! Command-line interface for the COVID-19 dashboard data and forecasts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use data_core::{download_latest, CachedSource, CsvFileSource, SourceConfig};
use data_spi::{DataSource, ObservationTable, STATE_NONE};
use forecast_facade::{graph_stat, resolve_statistic, Forecaster, Horizon, SeriesQuery};

#[derive(Parser)]
#[command(name = "covid")]
#[command(about = "COVID-19 case and death series and forecasts", long_about = None)]
struct Cli {
    /// Read observations from this CSV instead of the configured source
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the latest export and write the local snapshot
    Download {
        /// Source URL (default: COVID_DATA_URL or the public export)
        #[arg(short, long)]
        url: Option<String>,

        /// Snapshot path (default: COVID_CACHE_PATH or latest_covid_data.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List countries
    Countries,

    /// List the states of a country
    States {
        #[arg(short, long)]
        country: String,
    },

    /// Print a cleaned historical series as JSON
    Show {
        #[arg(short, long)]
        country: String,

        /// State name, or "None" for national totals
        #[arg(short, long)]
        state: Option<String>,

        /// "Cumulative Cases" or "Cumulative Deaths"
        #[arg(long)]
        stat: Option<String>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Forecast a series and print the result as JSON
    Forecast {
        #[arg(short, long)]
        country: String,

        #[arg(short, long)]
        state: Option<String>,

        #[arg(long)]
        stat: Option<String>,

        /// Days to forecast
        #[arg(long, default_value_t = 30)]
        horizon: usize,

        /// Optimizer iteration cap
        #[arg(long, default_value_t = 150)]
        max_iterations: usize,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn load_table(data: Option<&Path>) -> Result<ObservationTable> {
    let table = match data {
        Some(path) => CsvFileSource::new(path)
            .load_observations()
            .with_context(|| format!("could not read {}", path.display()))?,
        None => {
            let config = SourceConfig::from_env()?;
            CachedSource::new(config.clone())
                .load_observations()
                .with_context(|| format!("could not load data from {}", config.url))?
        }
    };
    tracing::debug!(rows = table.len(), "observation table loaded");
    Ok(table)
}

/// Write JSON to a file or stdout.
fn write_json(value: &serde_json::Value, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
            eprintln!("Written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn run_download(url: Option<String>, output: Option<PathBuf>) -> Result<()> {
    let mut config = SourceConfig::from_env()?;
    if let Some(url) = url {
        config.url = url;
    }
    if let Some(path) = output {
        config.cache_path = path;
    }
    let rows = download_latest(&config)
        .with_context(|| format!("download from {} failed", config.url))?;
    println!("Wrote {} rows to {}", rows, config.cache_path.display());
    Ok(())
}

fn run_states(table: &ObservationTable, country: &str) -> Result<()> {
    if !table.countries().contains(&country) {
        bail!("unknown country '{}'", country);
    }
    let regions = table.regions(country);
    if regions.is_empty() {
        println!("{}", STATE_NONE);
    }
    for region in regions {
        println!("{}", region);
    }
    Ok(())
}

fn show_json(table: &ObservationTable, query: &SeriesQuery) -> Result<serde_json::Value> {
    let series = graph_stat(table, query)?;
    Ok(serde_json::json!({
        "country": query.country(),
        "state": query.state(),
        "statistic": query.statistic(),
        "series": series,
    }))
}

fn forecast_json(
    table: &ObservationTable,
    query: &SeriesQuery,
    horizon: usize,
    max_iterations: usize,
) -> Result<serde_json::Value> {
    let horizon = Horizon::new(horizon)?;
    let result = Forecaster::new()
        .with_max_iterations(max_iterations)
        .get_prediction(table, query, horizon)?;
    Ok(serde_json::json!({
        "country": query.country(),
        "state": query.state(),
        "statistic": query.statistic(),
        "horizon": horizon,
        "history": result.history,
        "forecast": {
            "dates": result.dates,
            "values": result.values,
        },
    }))
}

fn run(cli: Cli) -> Result<()> {
    let data = cli.data.as_deref();
    match cli.command {
        Commands::Download { url, output } => run_download(url, output),

        Commands::Countries => {
            for country in load_table(data)?.sorted_countries() {
                println!("{}", country);
            }
            Ok(())
        }

        Commands::States { country } => run_states(&load_table(data)?, &country),

        Commands::Show {
            country,
            state,
            stat,
            output,
        } => {
            let table = load_table(data)?;
            let query = SeriesQuery::new(country, state.as_deref(), resolve_statistic(stat.as_deref()));
            write_json(&show_json(&table, &query)?, output.as_deref())
        }

        Commands::Forecast {
            country,
            state,
            stat,
            horizon,
            max_iterations,
            output,
        } => {
            let table = load_table(data)?;
            let query = SeriesQuery::new(country, state.as_deref(), resolve_statistic(stat.as_deref()));
            write_json(
                &forecast_json(&table, &query, horizon, max_iterations)?,
                output.as_deref(),
            )
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    run(Cli::parse())
}
