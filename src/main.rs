mod model;
mod server;

use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    service::{notification::Mailer, upload::UploadStore},
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config.database_url).await?;
    let uploads = UploadStore::new(&config.upload_dir);

    let mailer = Mailer::from_config(&config);
    if mailer.is_none() {
        tracing::warn!("Mail credentials not configured; order notifications disabled");
    }

    let app = router::router()
        .nest_service("/uploads", ServeDir::new(&config.upload_dir))
        // Multipart bodies carry the 5 MB image plus form fields.
        .layer(DefaultBodyLimit::max(8 * 1024 * 1024))
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(db, uploads, mailer));

    tracing::info!("Listening on {}", config.bind_address);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
