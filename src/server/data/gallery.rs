use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::gallery::{CreateGalleryParams, Gallery, UpdateGalleryParams};

pub struct GalleryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all gallery entries, newest first
    pub async fn get_all(&self) -> Result<Vec<Gallery>, DbErr> {
        Ok(entity::prelude::Gallery::find()
            .order_by_desc(entity::gallery::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Gallery::from_entity)
            .collect())
    }

    /// Gets a gallery entry by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Gallery>, DbErr> {
        Ok(entity::prelude::Gallery::find_by_id(id)
            .one(self.db)
            .await?
            .map(Gallery::from_entity))
    }

    /// Creates a new gallery entry
    pub async fn create(&self, params: CreateGalleryParams) -> Result<Gallery, DbErr> {
        let now = Utc::now();

        let model = entity::gallery::ActiveModel {
            image: ActiveValue::Set(params.image),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Gallery::from_entity(model))
    }

    /// Applies the supplied fields to a gallery entry
    ///
    /// # Returns
    /// - `Ok(Some(Gallery))` - Updated entry
    /// - `Ok(None)` - No entry with the given ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateGalleryParams,
    ) -> Result<Option<Gallery>, DbErr> {
        let Some(existing) = entity::prelude::Gallery::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::gallery::ActiveModel = existing.into();
        if let Some(image) = params.image {
            active_model.image = ActiveValue::Set(image);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        Ok(Some(Gallery::from_entity(model)))
    }

    /// Deletes a gallery entry
    ///
    /// # Returns
    /// - `Ok(true)` - Entry was deleted
    /// - `Ok(false)` - No entry with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Gallery::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
