//! Session-based access control for request handlers.
//!
//! `AuthGuard` resolves the logged-in user from the session and checks the
//! requested permissions. Booking actions are not gated here: the booking service
//! applies its own capability table to the resolved `Actor`.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Permission a handler may require of the logged-in user.
pub enum Permission {
    /// User has the LSP role.
    Lsp,
    /// User has the Trader role.
    Trader,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks every permission in `permissions`.
    ///
    /// An empty slice only requires a valid login.
    ///
    /// # Returns
    /// - `Ok(User)` - Logged-in user holding every permission
    /// - `Err(AuthError::UserNotInSession)` - No user ID in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission is missing
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Lsp => {
                    if user.role != UserRole::Lsp {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an LSP-only action without the LSP role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Trader => {
                    if user.role != UserRole::Trader {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted a trader-only action without the Trader role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
