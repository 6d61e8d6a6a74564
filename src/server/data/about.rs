use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::about::{About, CreateAboutParams, UpdateAboutParams};

pub struct AboutRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AboutRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all "about" entries, newest first
    pub async fn get_all(&self) -> Result<Vec<About>, DbErr> {
        Ok(entity::prelude::About::find()
            .order_by_desc(entity::about::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(About::from_entity)
            .collect())
    }

    /// Gets an "about" entry by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<About>, DbErr> {
        Ok(entity::prelude::About::find_by_id(id)
            .one(self.db)
            .await?
            .map(About::from_entity))
    }

    /// Creates a new "about" entry
    pub async fn create(&self, params: CreateAboutParams) -> Result<About, DbErr> {
        let now = Utc::now();

        let model = entity::about::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(About::from_entity(model))
    }

    /// Applies the supplied fields to an "about" entry
    ///
    /// # Returns
    /// - `Ok(Some(About))` - Updated entry
    /// - `Ok(None)` - No entry with the given ID
    pub async fn update(&self, id: i32, params: UpdateAboutParams) -> Result<Option<About>, DbErr> {
        let Some(existing) = entity::prelude::About::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::about::ActiveModel = existing.into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        Ok(Some(About::from_entity(model)))
    }

    /// Deletes an "about" entry
    ///
    /// # Returns
    /// - `Ok(true)` - Entry was deleted
    /// - `Ok(false)` - No entry with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::About::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
