use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with the provided email and placeholder profile fields.
    pub async fn insert_mock_user(&self, email: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password: ActiveValue::Set(Some("password".to_string())),
                first_name: ActiveValue::Set("Ash".to_string()),
                last_name: ActiveValue::Set(Some("Ketchum".to_string())),
                age: ActiveValue::Set(Some(10)),
                gender: ActiveValue::Set(Some("male".to_string())),
                subscription_date: ActiveValue::Set(Utc::now().naive_utc()),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
