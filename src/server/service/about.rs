use sea_orm::DatabaseConnection;

use crate::server::{
    data::about::AboutRepository,
    error::AppError,
    model::about::{About, CreateAboutParams, UpdateAboutParams},
};

pub struct AboutService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AboutService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all "about" entries, newest first
    pub async fn get_all(&self) -> Result<Vec<About>, AppError> {
        Ok(AboutRepository::new(self.db).get_all().await?)
    }

    /// Gets an "about" entry by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<About>, AppError> {
        Ok(AboutRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates an "about" entry
    pub async fn create(&self, params: CreateAboutParams) -> Result<About, AppError> {
        Ok(AboutRepository::new(self.db).create(params).await?)
    }

    /// Updates an "about" entry
    ///
    /// # Returns
    /// - `Ok(Some(About))` - Updated entry
    /// - `Ok(None)` - No entry with the given ID
    pub async fn update(&self, id: i32, params: UpdateAboutParams) -> Result<Option<About>, AppError> {
        Ok(AboutRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes an "about" entry
    ///
    /// # Returns
    /// - `Ok(true)` - Entry was deleted
    /// - `Ok(false)` - No entry with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(AboutRepository::new(self.db).delete(id).await?)
    }
}
