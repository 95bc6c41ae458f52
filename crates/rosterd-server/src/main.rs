//! rosterd server — application entry point.

use axum::http::HeaderValue;
use rosterd_db::DbManager;
use rosterd_server::bootstrap::ensure_admin;
use rosterd_server::config::ServerConfig;
use rosterd_server::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("rosterd=info".parse()?),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let manager = DbManager::connect(&config.db).await?;
    rosterd_db::run_migrations(manager.client()).await?;

    let state = AppState::new(manager.client().clone(), config.auth.clone());

    if let Some(password) = &config.admin_password {
        ensure_admin(&state.auth, &state.users, password).await?;
    }

    let cors_origin = config.cors_origin.parse::<HeaderValue>().ok();
    let app = rosterd_server::app(state, cors_origin);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "rosterd server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
