use sea_orm::DatabaseConnection;

use crate::server::{
    data::contact::ContactRepository,
    error::AppError,
    model::contact::{Contact, CreateContactParams, UpdateContactParams},
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all contact submissions, newest first
    pub async fn get_all(&self) -> Result<Vec<Contact>, AppError> {
        Ok(ContactRepository::new(self.db).get_all().await?)
    }

    /// Gets a contact submission by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Contact>, AppError> {
        Ok(ContactRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates a contact submission
    pub async fn create(&self, params: CreateContactParams) -> Result<Contact, AppError> {
        Ok(ContactRepository::new(self.db).create(params).await?)
    }

    /// Updates a contact submission
    ///
    /// # Returns
    /// - `Ok(Some(Contact))` - Updated submission
    /// - `Ok(None)` - No submission with the given ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateContactParams,
    ) -> Result<Option<Contact>, AppError> {
        Ok(ContactRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes a contact submission
    ///
    /// # Returns
    /// - `Ok(true)` - Submission was deleted
    /// - `Ok(false)` - No submission with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ContactRepository::new(self.db).delete(id).await?)
    }
}
