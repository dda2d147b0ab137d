//! keiba-web - race listings and prediction form over the race API.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use keiba_web::{AppState, Config, HttpRaceApi};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    println!("keiba-web {}", VERSION);
    println!();
    println!("Usage: keiba-web [--config <path>]");
    println!();
    println!("Without --config, ./config.toml is read if present.");
    println!("Any setting can be overridden with KEIBA__SECTION__KEY, e.g. KEIBA__API__BASE_URL.");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("keiba-web {}", VERSION);
        return Ok(());
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    // Load configuration
    let config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).ok_or("--config requires a path")?;
            Config::load_from(path)
        }
        None => Config::load(),
    }
    .map_err(|e| format!("Failed to load configuration: {}", e))?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting keiba-web {}", VERSION);

    let api = HttpRaceApi::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )?;
    tracing::info!("Using race API at {}", api.base_url());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(Arc::new(api)));
    let app = keiba_web::app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
