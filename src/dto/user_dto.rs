use crate::entity::user::User;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form body of POST /token.
#[derive(Clone, Deserialize)]
pub struct UserLoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct UserCreateDto {
    #[validate(length(
        min = 3,
        max = 30,
        message = "Username must be between 3 and 30 characters"
    ))]
    pub username: String,
    #[validate(length(max = 100, message = "First name must not exceed 100 characters"))]
    pub first_name: String,
    #[validate(length(max = 100, message = "Last name must not exceed 100 characters"))]
    pub last_name: String,
    #[validate(email(message = "Not a valid email address"))]
    #[validate(length(max = 254, message = "Email must not exceed 254 characters"))]
    pub email: String,
    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be between 8 and 128 characters"
    ))]
    pub password: String,
}

/// Partial update of profile fields; absent fields are left untouched.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct UserUpdateDto {
    #[validate(length(max = 100, message = "First name must not exceed 100 characters"))]
    pub first_name: Option<String>,
    #[validate(length(max = 100, message = "Last name must not exceed 100 characters"))]
    pub last_name: Option<String>,
    #[validate(email(message = "Not a valid email address"))]
    #[validate(length(max = 254, message = "Email must not exceed 254 characters"))]
    pub email: Option<String>,
}

/// The outward representation of a user; carries no password hash.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserReadDto {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub active: bool,
    pub admin: bool,
}

impl From<User> for UserReadDto {
    fn from(model: User) -> Self {
        Self {
            id: model.id,
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            active: model.active,
            admin: model.admin,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ListQueryDto {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Clone, Deserialize)]
pub struct SetPasswordQueryDto {
    pub password: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SetAdminQueryDto {
    pub admin: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SetActiveQueryDto {
    pub active: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl std::fmt::Debug for UserLoginDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLoginDto")
            .field("username", &self.username)
            .finish()
    }
}

impl std::fmt::Debug for UserCreateDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreateDto")
            .field("username", &self.username)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .finish()
    }
}

impl std::fmt::Debug for SetPasswordQueryDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetPasswordQueryDto").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(email: &str) -> UserCreateDto {
        UserCreateDto {
            username: "somebody".to_string(),
            first_name: "Some".to_string(),
            last_name: "Body".to_string(),
            email: email.to_string(),
            password: "correct horse battery".to_string(),
        }
    }

    #[test]
    fn test_create_dto_accepts_valid_email() {
        assert!(create_dto("somebody@example.com").validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_invalid_email() {
        assert!(create_dto("bademail").validate().is_err());
        assert!(create_dto("still@bad@mail").validate().is_err());
    }

    #[test]
    fn test_create_dto_rejects_short_username() {
        let mut dto = create_dto("somebody@example.com");
        dto.username = "ab".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_dto_validates_email_only_when_present() {
        let dto = UserUpdateDto {
            first_name: Some("New".to_string()),
            last_name: None,
            email: None,
        };
        assert!(dto.validate().is_ok());

        let dto = UserUpdateDto {
            first_name: None,
            last_name: None,
            email: Some("not-an-address".to_string()),
        };
        assert!(dto.validate().is_err());
    }
}
