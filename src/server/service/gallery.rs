use sea_orm::DatabaseConnection;

use crate::server::{
    data::gallery::GalleryRepository,
    error::AppError,
    model::gallery::{CreateGalleryParams, Gallery, UpdateGalleryParams},
};

pub struct GalleryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all gallery entries, newest first
    pub async fn get_all(&self) -> Result<Vec<Gallery>, AppError> {
        Ok(GalleryRepository::new(self.db).get_all().await?)
    }

    /// Gets a gallery entry by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Gallery>, AppError> {
        Ok(GalleryRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a gallery entry
    pub async fn create(&self, params: CreateGalleryParams) -> Result<Gallery, AppError> {
        Ok(GalleryRepository::new(self.db).create(params).await?)
    }

    /// Updates a gallery entry
    ///
    /// # Returns
    /// - `Ok(Some(Gallery))` - Updated entry
    /// - `Ok(None)` - No entry with the given ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateGalleryParams,
    ) -> Result<Option<Gallery>, AppError> {
        Ok(GalleryRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes a gallery entry
    ///
    /// # Returns
    /// - `Ok(true)` - Entry was deleted
    /// - `Ok(false)` - No entry with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(GalleryRepository::new(self.db).delete(id).await?)
    }
}
