use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::contact::{Contact, CreateContactParams, UpdateContactParams};

pub struct ContactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all contact submissions, newest first
    pub async fn get_all(&self) -> Result<Vec<Contact>, DbErr> {
        Ok(entity::prelude::Contact::find()
            .order_by_desc(entity::contact::Column::SubmittedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Contact::from_entity)
            .collect())
    }

    /// Gets a contact submission by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Contact>, DbErr> {
        Ok(entity::prelude::Contact::find_by_id(id)
            .one(self.db)
            .await?
            .map(Contact::from_entity))
    }

    /// Creates a new contact submission
    pub async fn create(&self, params: CreateContactParams) -> Result<Contact, DbErr> {
        let model = entity::contact::ActiveModel {
            fullname: ActiveValue::Set(params.fullname),
            phone: ActiveValue::Set(params.phone),
            address: ActiveValue::Set(params.address),
            feedback: ActiveValue::Set(params.feedback),
            rating: ActiveValue::Set(params.rating),
            submitted_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Contact::from_entity(model))
    }

    /// Applies the supplied fields to a contact submission
    ///
    /// # Returns
    /// - `Ok(Some(Contact))` - Updated submission
    /// - `Ok(None)` - No submission with the given ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateContactParams,
    ) -> Result<Option<Contact>, DbErr> {
        let Some(existing) = entity::prelude::Contact::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::contact::ActiveModel = existing.into();
        if let Some(fullname) = params.fullname {
            active_model.fullname = ActiveValue::Set(fullname);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }
        if let Some(feedback) = params.feedback {
            active_model.feedback = ActiveValue::Set(Some(feedback));
        }
        if let Some(rating) = params.rating {
            active_model.rating = ActiveValue::Set(rating);
        }

        let model = active_model.update(self.db).await?;

        Ok(Some(Contact::from_entity(model)))
    }

    /// Deletes a contact submission
    ///
    /// # Returns
    /// - `Ok(true)` - Submission was deleted
    /// - `Ok(false)` - No submission with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Contact::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
