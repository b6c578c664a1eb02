mod config;
mod notify;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::SiteConfig::from_env().expect("invalid configuration");

    // Delivery falls back to the log notifier if the Telegram client cannot be built.
    let notifier: Arc<dyn notify::Notifier> = match notify::from_config(&config) {
        Ok(notifier) => notifier,
        Err(e) => {
            tracing::warn!(error = %e, "telegram notifier unavailable, inquiries will only be logged");
            Arc::new(notify::log::LogNotifier::new(config.simulated_delay))
        }
    };
    tracing::info!(notifier = notifier.kind(), recipient = %config.recipient, "inquiry delivery configured");

    let state = state::AppState::new(notifier, &config.recipient);

    let app = routes::leptos_app(state).expect("leptos app setup failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "office-site listening");
    axum::serve(listener, app).await.expect("server failed");
}
