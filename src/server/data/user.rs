//! User repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{model::user::UpdateUserDto, server::model::input::NewUser};

/// Repository for user records
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns every user ordered by ID
    pub async fn list_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a user by ID
    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Creates a new user, stamping the subscription date with the current UTC time
    ///
    /// A duplicate email surfaces as a unique constraint violation [`DbErr`].
    pub async fn create(&self, user: NewUser) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password),
            first_name: ActiveValue::Set(user.first_name),
            last_name: ActiveValue::Set(user.last_name),
            age: ActiveValue::Set(user.age),
            gender: ActiveValue::Set(user.gender),
            subscription_date: ActiveValue::Set(Utc::now().naive_utc()),
            is_active: ActiveValue::Set(user.is_active),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Overwrites the fields present in `changes`, leaving the rest untouched
    ///
    /// Returns `None` if the user does not exist.
    pub async fn update(
        &self,
        user_id: i32,
        changes: &UpdateUserDto,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id).one(self.db).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.clone().into_active_model();
        if let Some(email) = &changes.email {
            user_am.email = ActiveValue::Set(email.clone());
        }
        if let Some(is_active) = changes.is_active {
            user_am.is_active = ActiveValue::Set(is_active);
        }

        // Nothing to write; `update` on an unchanged model errors.
        if !user_am.is_changed() {
            return Ok(Some(user));
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field. Favorite rows referencing the
    /// user are left in place.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
