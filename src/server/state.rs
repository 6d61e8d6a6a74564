use sea_orm::DatabaseConnection;

use crate::server::service::notification::Mailer;
use crate::server::service::upload::UploadStore;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub uploads: UploadStore,
    /// `None` when mail credentials are not configured.
    pub mailer: Option<Mailer>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, uploads: UploadStore, mailer: Option<Mailer>) -> Self {
        Self { db, uploads, mailer }
    }
}
