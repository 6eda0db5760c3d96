//! User account domain model and parameters.

use crate::{
    model::user::{CreateOrUpdateUserDto, UserDto},
    server::error::validation::ValidationError,
};

/// User account without its credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl User {
    pub fn from_entity(entity: entity::app_user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.user_name,
            email: entity.email,
            is_admin: entity.is_admin,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            is_admin: self.is_admin,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

impl RegisterUserParams {
    pub fn from_dto(dto: CreateOrUpdateUserDto) -> Result<Self, ValidationError> {
        let password = dto
            .password
            .filter(|password| !password.is_empty())
            .ok_or(ValidationError::EmptyField("password"))?;

        Ok(Self {
            name: non_empty(dto.name, "name")?,
            email: normalize_email(dto.email)?,
            password,
            is_admin: dto.is_admin,
        })
    }
}

/// Parameters for changing an account's name and email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserParams {
    pub name: String,
    pub email: String,
}

impl UpdateUserParams {
    pub fn from_dto(dto: CreateOrUpdateUserDto) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_empty(dto.name, "name")?,
            email: normalize_email(dto.email)?,
        })
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, ValidationError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value)
}

/// Emails are stored lower-cased so lookups can match them exactly.
fn normalize_email(email: String) -> Result<String, ValidationError> {
    Ok(non_empty(email, "email")?.to_lowercase())
}
