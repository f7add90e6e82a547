mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    // A missing or weak secret stops the boot; no request is served without one.
    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if config.dev_session_bypass {
        tracing::warn!("DEV_SESSION_BYPASS enabled; /api/dev/session issues sessions without credentials");
    }
    tracing::info!(
        deployment = ?config.deployment,
        cookie = %config.session.cookie_name,
        secure = config.session.secure,
        previous_secrets = config.session.previous_secrets.len(),
        posts = %config.posts_path.display(),
        "session config loaded"
    );

    let port = config.port;
    let state = state::AppState::new(&config);

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "server listening");
    axum::serve(listener, app).await.expect("server failed");
}
