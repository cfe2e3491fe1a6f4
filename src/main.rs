use clap::Parser;
use poem::{listener::TcpListener, Server};

use itty_bitty_api::api::build_app;
use itty_bitty_api::cli::{self, Cli};
use itty_bitty_api::config::{init_logging, ServerSettings};
use itty_bitty_api::{contracts, AppData};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_logging()?;

    let settings = ServerSettings::from_env()?;
    tracing::debug!("Loaded settings: {:?}", settings);

    let app_data = AppData::init(settings)?;

    if !cli.is_serve() {
        return cli::execute_command(cli, &app_data);
    }

    let address = app_data.settings.server_address();
    let public_url = app_data.settings.public_url().to_string();
    let app = build_app(&app_data);

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("API endpoints available at {}{}", public_url, contracts::API_PREFIX);
    tracing::info!("Swagger UI available at {}{}", public_url, contracts::DOCS);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
