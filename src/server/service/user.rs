//! User service for business logic.
//!
//! Provides the `UserService` for looking up users and for LSP approval of traders.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks the trader `id` as verified so they can book containers.
    ///
    /// # Returns
    /// - `Ok(User)` - The verified trader
    /// - `Err(AppError::NotFound)` - No user with that ID, or the user is not a trader
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn approve_trader(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.verify_trader(id).await? {
            return Err(AppError::NotFound(format!("Trader {} not found", id)));
        }

        let user = user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Trader {} not found", id)))?;

        tracing::info!("Trader {} verified", id);

        Ok(user)
    }
}
