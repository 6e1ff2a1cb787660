//! Weather data admin console.
//!
//! ```text
//!   CLI args ──▶ config (file + env + flags) ──▶ ApiClient ──▶ backend /api
//!                                                   ▲
//!   `open <path>` ──▶ Navigator ──▶ view loader ──▶ View::render
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use weather_admin::client::{ApiClient, BearerToken, LogNotifier, RequestIdStamp};
use weather_admin::config::{self, validation::validate_config, AppConfig, ConfigError};
use weather_admin::observability::logging;
use weather_admin::routing::{Navigator, RouteTable};
use weather_admin::views::ViewContext;

#[derive(Parser)]
#[command(name = "weather-admin")]
#[command(about = "Console for the weather data admin backend", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides client.base_address.
    #[arg(long)]
    base_url: Option<String>,

    /// Overrides client.timeout_ms.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Bearer token attached to every request.
    #[arg(long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the console's routes
    Routes,
    /// Navigate to a route and print the page
    Open {
        /// Route path, e.g. /cities
        path: String,

        /// Page parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Upload a weather data CSV file
    Upload {
        file: PathBuf,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::loader::from_env()?,
    };

    if let Some(base) = &cli.base_url {
        config.client.base_address = base.clone();
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.client.timeout_ms = timeout_ms;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn build_client(cli: &Cli, config: &AppConfig) -> Result<ApiClient, Box<dyn std::error::Error>> {
    let builder = ApiClient::builder(config.client.clone())
        .notifier(Arc::new(LogNotifier))
        .metrics(config.observability.metrics_enabled);

    let client = match &cli.token {
        Some(token) => builder.interceptor(BearerToken::new(token.clone())).build()?,
        None => builder.interceptor(RequestIdStamp).build()?,
    };
    Ok(client)
}

async fn run(cli: Cli, config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Routes => {
            for entry in RouteTable::standard().entries() {
                println!("{:<16} {}", entry.path, entry.name);
            }
        }
        Commands::Open { path, params } => {
            let api = build_client(&cli, &config)?;
            let navigator = Navigator::new(RouteTable::standard());
            let resolved = navigator.navigate(path).await?;

            let ctx = params
                .iter()
                .fold(ViewContext::new(api), |ctx, (k, v)| ctx.with_param(k, v));
            let page = resolved.view.render(&ctx).await?;
            print!("{}", page);
        }
        Commands::Upload { file } => {
            let api = build_client(&cli, &config)?;
            let contents = tokio::fs::read(file).await?;
            let name = file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("upload.csv")
                .to_string();
            let summary = api.weather().upload_csv(&name, contents).await?;
            println!("{}", summary);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    logging::init(&config.observability);

    tracing::info!(
        base_address = %config.client.base_address,
        timeout_ms = config.client.timeout_ms,
        "Configuration loaded"
    );

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
