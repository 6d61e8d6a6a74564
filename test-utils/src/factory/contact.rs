//! Contact factory for creating test contact submissions.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a contact submission with a unique name and no feedback.
pub async fn create_contact(db: &DatabaseConnection) -> Result<entity::contact::Model, DbErr> {
    entity::contact::ActiveModel {
        id: ActiveValue::NotSet,
        fullname: ActiveValue::Set(format!("Contact {}", next_id())),
        phone: ActiveValue::Set("9876543210".to_string()),
        address: ActiveValue::Set("12 Market Street".to_string()),
        feedback: ActiveValue::Set(None),
        rating: ActiveValue::Set(0),
        submitted_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
