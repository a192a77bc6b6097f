//! User domain models and parameters.
//!
//! Provides domain models for login accounts, their role within the clinic, and the
//! parameter type used when registering new accounts.

use sea_orm::DbErr;

use crate::model::user::{UserDto, UserRoleDto};

/// Role of a login account within its clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Professional,
}

impl UserRole {
    /// Stored representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Professional => "PROFESSIONAL",
        }
    }

    /// Parses the stored representation of a role.
    ///
    /// # Returns
    /// - `Ok(UserRole)` - Known role
    /// - `Err(DbErr::Custom)` - Stored value is not a known role
    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "ADMIN" => Ok(Self::Admin),
            "PROFESSIONAL" => Ok(Self::Professional),
            other => Err(DbErr::Custom(format!("Unknown user role '{}'", other))),
        }
    }

    pub fn from_dto(dto: UserRoleDto) -> Self {
        match dto {
            UserRoleDto::Admin => Self::Admin,
            UserRoleDto::Professional => Self::Professional,
        }
    }

    pub fn into_dto(self) -> UserRoleDto {
        match self {
            Self::Admin => UserRoleDto::Admin,
            Self::Professional => UserRoleDto::Professional,
        }
    }
}

/// Login account belonging to a single clinic.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub clinic_id: i32,
    pub name: String,
    pub email: String,
    /// PHC string produced by the password service. Never leaves the server.
    pub password_hash: String,
    pub role: UserRole,
    pub active: bool,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash and active flag are not exposed.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.into_dto(),
            clinic_id: self.clinic_id,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known value
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            clinic_id: entity.clinic_id,
            name: entity.name,
            email: entity.email,
            password_hash: entity.password_hash,
            role: UserRole::from_db(&entity.role)?,
            active: entity.active,
        })
    }
}

/// Parameters for creating a login account.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub clinic_id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}
