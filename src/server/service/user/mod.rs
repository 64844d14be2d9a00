//! User service layer.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::ConnectionTrait;

use crate::{
    model::{
        api::MessageDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        data::user::UserRepository,
        error::{entity::EntityError, Error},
        model::input::NewUser,
        service::is_unique_violation,
    },
};

/// Service for managing user accounts.
pub struct UserService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserService<'a, C> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection or transaction reference
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Retrieves every user ordered by ID.
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).list_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a single user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::EntityError)` - No user with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(EntityError::UserNotFound(user_id))?;

        Ok(user.into())
    }

    /// Validates the payload and creates a user.
    ///
    /// `subscription_date` is set to the current UTC time and `is_active` defaults to `true`.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ValidationError)` - `email` or `first_name` missing, nothing was written
    /// - `Err(Error::EntityError)` - The email is already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, payload: CreateUserDto) -> Result<UserDto, Error> {
        let new_user = NewUser::try_from(payload)?;
        let email = new_user.email.clone();

        let user = UserRepository::new(self.db)
            .create(new_user)
            .await
            .map_err(|e| match is_unique_violation(&e) {
                true => Error::from(EntityError::EmailTaken(email)),
                false => e.into(),
            })?;

        tracing::info!("Created user ID {}", user.id);

        Ok(user.into())
    }

    /// Applies the provided fields to an existing user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated user
    /// - `Err(Error::EntityError)` - No user with this ID, or the new email is taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_user(
        &self,
        user_id: i32,
        changes: UpdateUserDto,
    ) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .update(user_id, &changes)
            .await
            .map_err(|e| match (is_unique_violation(&e), &changes.email) {
                (true, Some(email)) => Error::from(EntityError::EmailTaken(email.clone())),
                _ => e.into(),
            })?
            .ok_or(EntityError::UserNotFound(user_id))?;

        tracing::info!("Updated user ID {}", user.id);

        Ok(user.into())
    }

    /// Deletes a user. Favorites referencing the user are kept.
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - "User deleted"
    /// - `Err(Error::EntityError)` - No user with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_user(&self, user_id: i32) -> Result<MessageDto, Error> {
        let result = UserRepository::new(self.db).delete(user_id).await?;

        if result.rows_affected == 0 {
            return Err(EntityError::UserNotFound(user_id).into());
        }

        tracing::info!("Deleted user ID {}", user_id);

        Ok(MessageDto::new("User deleted"))
    }
}
