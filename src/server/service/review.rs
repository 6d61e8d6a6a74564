use sea_orm::DatabaseConnection;

use crate::server::{
    data::review::ReviewRepository,
    error::AppError,
    model::review::{CreateReviewParams, Review, UpdateReviewParams},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all reviews, newest first
    pub async fn get_all(&self) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_all().await?)
    }

    /// Gets a review by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a review
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, AppError> {
        Ok(ReviewRepository::new(self.db).create(params).await?)
    }

    /// Updates a review
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - Updated review
    /// - `Ok(None)` - No review with the given ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReviewParams,
    ) -> Result<Option<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes a review
    ///
    /// # Returns
    /// - `Ok(true)` - Review was deleted
    /// - `Ok(false)` - No review with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ReviewRepository::new(self.db).delete(id).await?)
    }
}
