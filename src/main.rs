use std::process::ExitCode;
use std::sync::Arc;
use tarot_api::{build_router, deck, AppState, Config};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tarot_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting tarot card API server");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // The deck is loaded once and shared read-only by every request
    let deck = match deck::load(&config.data_path) {
        Ok(deck) => deck,
        Err(e) => {
            error!(error = %e, path = %config.data_path.display(), "Failed to load card data");
            return ExitCode::FAILURE;
        }
    };

    let app_state = AppState::new(Arc::new(deck));
    let app = build_router(app_state, &config);

    let address = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %address, "Failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    info!("Tarot API server running on http://{}", address);
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server terminated");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
