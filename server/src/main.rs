mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Non-fatal: a random key only means preferences reset on restart.
    if config.cookie_secret.is_none() {
        tracing::warn!("COOKIE_SECRET not set; signing cookies with a per-process key");
    }

    let addr = config.addr();
    let state = state::AppState::new(&config);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(%addr, version = routes::VERSION, categories = config.categories.len(), "trivia settings listening");
    axum::serve(listener, app).await.expect("server failed");
}
