use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::review::{CreateReviewParams, Review, UpdateReviewParams};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all reviews, newest first
    pub async fn get_all(&self) -> Result<Vec<Review>, DbErr> {
        Ok(entity::prelude::Review::find()
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Review::from_entity)
            .collect())
    }

    /// Gets a review by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        Ok(entity::prelude::Review::find_by_id(id)
            .one(self.db)
            .await?
            .map(Review::from_entity))
    }

    /// Creates a new review
    pub async fn create(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let now = Utc::now();

        let model = entity::review::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            rate: ActiveValue::Set(params.rate),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(model))
    }

    /// Applies the supplied fields to a review
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - Updated review
    /// - `Ok(None)` - No review with the given ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReviewParams,
    ) -> Result<Option<Review>, DbErr> {
        let Some(existing) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::review::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(rate) = params.rate {
            active_model.rate = ActiveValue::Set(rate);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        Ok(Some(Review::from_entity(model)))
    }

    /// Deletes a review
    ///
    /// # Returns
    /// - `Ok(true)` - Review was deleted
    /// - `Ok(false)` - No review with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
