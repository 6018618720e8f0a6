//! Timesheet formatter HTTP service.

use timesheet_formatter::api::{AppState, create_router};
use timesheet_formatter::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = ConfigLoader::from_env()?;
    let config = loader.config();
    info!(
        profile = ?config.conversion.profile,
        upload_dir = %config.storage.upload_dir.display(),
        "Starting timesheet formatter"
    );

    let state = AppState::from_config(config)?;
    let app = create_router(state);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
