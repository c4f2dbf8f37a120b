// src/main.rs

use dotenvy::dotenv;
use ecoplay::config::Config;
use ecoplay::routes;
use ecoplay::session;
use ecoplay::state::AppState;
use ecoplay::store::{self, Store};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Open the record store
    let store = Store::open(&config.data_dir).expect("Failed to open data directory");
    tracing::info!("Record store opened at '{}'", config.data_dir);

    // Seed demo records where the backing blobs are absent or unreadable
    store::seed(&store).expect("Failed to seed demo records");

    // Create AppState
    let state = AppState {
        store,
        session: session::shared(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr.as_str())
        .await
        .expect("Failed to bind listen address");

    // Start the server
    axum::serve(listener, app).await.unwrap();
}
