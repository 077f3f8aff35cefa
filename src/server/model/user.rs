//! User domain models and parameters.
//!
//! Provides the user domain model, the `Actor` view of a user consumed by the booking
//! core, and parameter types for registration.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

use crate::model::user::{UserDto, UserRoleDto};

/// Registered account acting as a trader or an LSP.
///
/// The password hash never leaves the repository layer, so it is not part of the
/// domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// Whether an LSP has approved this trader for booking.
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role,
            verified: entity.verified,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: role_into_dto(self.role),
            verified: self.verified,
            created_at: self.created_at,
        }
    }

    /// Identity the booking core acts upon.
    pub fn actor(&self) -> Actor {
        Actor {
            id: self.id,
            role: self.role,
            verified: self.verified,
        }
    }
}

/// Authenticated identity supplied to the booking core.
///
/// Produced by the auth guard from the session and trusted without re-verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: i32,
    pub role: UserRole,
    pub verified: bool,
}

/// Parameters for registering a new account.
///
/// New accounts always start unverified.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: UserRole,
}

/// Parameters for inserting a user once the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
}

pub fn role_into_dto(role: UserRole) -> UserRoleDto {
    match role {
        UserRole::Trader => UserRoleDto::Trader,
        UserRole::Lsp => UserRoleDto::Lsp,
    }
}

pub fn role_from_dto(role: UserRoleDto) -> UserRole {
    match role {
        UserRoleDto::Trader => UserRole::Trader,
        UserRoleDto::Lsp => UserRole::Lsp,
    }
}

impl From<crate::model::user::RegisterUserDto> for RegisterUserParam {
    fn from(dto: crate::model::user::RegisterUserDto) -> Self {
        Self {
            email: dto.email,
            name: dto.name,
            password: dto.password,
            role: role_from_dto(dto.role),
        }
    }
}
