//! About factory for creating test "about" entries.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates an "about" entry with a unique title.
pub async fn create_about(db: &DatabaseConnection) -> Result<entity::about::Model, DbErr> {
    let now = Utc::now();

    entity::about::ActiveModel {
        id: ActiveValue::NotSet,
        title: ActiveValue::Set(format!("About {}", next_id())),
        description: ActiveValue::Set(String::new()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
