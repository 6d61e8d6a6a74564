//! Review factory for creating test review records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a review with a unique reviewer name and a rating of 4.
pub async fn create_review(db: &DatabaseConnection) -> Result<entity::review::Model, DbErr> {
    let now = Utc::now();

    entity::review::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(format!("Reviewer {}", next_id())),
        description: ActiveValue::Set("Great produce".to_string()),
        rate: ActiveValue::Set(4),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
