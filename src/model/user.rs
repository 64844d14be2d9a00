use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A user as returned by the API. The password is never included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    /// Set when the user was created, ISO-8601 in UTC
    pub subscription_date: NaiveDateTime,
    pub is_active: bool,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            gender: user.gender,
            subscription_date: user.subscription_date,
            is_active: user.is_active,
        }
    }
}

/// Body of `POST /users`. `email` and `first_name` are required.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    /// Defaults to `true`
    pub is_active: Option<bool>,
}

/// Body of `PUT /users/{id}`. Omitted fields keep their stored value.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pokedex_test_utils::prelude::*;

    use super::UserDto;

    /// Expect the password to be dropped and the timestamp to serialize as ISO-8601
    #[test]
    fn serializes_without_password() {
        let subscription_date = NaiveDate::from_ymd_opt(2025, 10, 17)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        let user = UserDto::from(factory::mock_user_model(1, subscription_date));

        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["subscription_date"], "2025-10-17T12:30:00");
        assert_eq!(json["is_active"], true);
        assert_eq!(json["last_name"], serde_json::Value::Null);
    }
}
