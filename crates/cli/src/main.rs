//! WAN capacity graph CLI
//!
//! Renders ASCII charts of a site's internet link capacity over a
//! historical window, resolving the site by closest name match.

mod auth;
mod config;
mod prompt;

use anyhow::Result;
use capgraph_lib::client::ApiClient;
use capgraph_lib::output;
use capgraph_lib::pipeline::{self, RunOptions};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_GRAPH_HEIGHT: u32 = 15;

/// WAN capacity graph CLI
#[derive(Parser)]
#[command(name = "capgraph")]
#[command(author, version, about = "ASCII WAN capacity graphs for a site", long_about = None)]
pub struct Cli {
    /// Controller API URL (falls back to the config file, then the built-in
    /// default)
    #[arg(long, env = "CAPGRAPH_API_URL")]
    pub api_url: Option<String>,

    /// Auth token for the controller
    #[arg(long, short = 't', value_name = "TOKEN")]
    pub token: Option<String>,

    /// File containing the auth token
    #[arg(long, short = 'f', value_name = "TOKENFILE")]
    pub authtokenfile: Option<std::path::PathBuf>,

    /// Site to graph; the closest name match wins
    #[arg(long, short = 's', value_name = "SITE")]
    pub site_name: String,

    /// Period of time (in hours) for the resulting graph
    #[arg(long, short = 'p', default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..))]
    pub period: u32,

    /// How many days ago the period starts
    #[arg(long, short = 'd', default_value_t = 2)]
    pub days: u32,

    /// Height of the rendered graph in rows (default 15)
    #[arg(long, short = 'g', value_parser = clap::value_parser!(u32).range(1..))]
    pub graph_height: Option<u32>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().without_time())
        .init();

    let config = config::Config::load().unwrap_or_default();
    let api_url = cli
        .api_url
        .clone()
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| config::DEFAULT_API_URL.to_string());
    let graph_height = cli
        .graph_height
        .or(config.default_height)
        .unwrap_or(DEFAULT_GRAPH_HEIGHT);

    let token = auth::resolve_token(&cli)?;

    let mut client = ApiClient::new(&api_url)?;
    client.login(&token).await?;
    output::print_success("Authentication complete");

    let options = RunOptions {
        site_query: cli.site_name.clone(),
        period_hours: cli.period,
        days_ago: cli.days,
        graph_height: graph_height as usize,
    };

    let outcome = pipeline::run(&client, &options, &prompt::PromptChooser).await;
    client.logout().await;

    if let Err(err) = outcome {
        output::print_error(&err.to_string());
        std::process::exit(1);
    }
    Ok(())
}
