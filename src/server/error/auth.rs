use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session; the caller never logged in or logged out.
    #[error("No user in session")]
    UserNotInSession,

    /// Session references a user ID that no longer exists in the database.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// User lacks the role required by the endpoint.
    ///
    /// # Fields
    /// - ID of the user denied access
    /// - Server-side description of the denied action, logged only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Email unknown or password mismatch during login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration with an email that already has an account.
    #[error("Email already registered")]
    EmailTaken,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `EmailTaken` → 400 Bad Request
///
/// Denials are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
            Self::EmailTaken => (
                StatusCode::BAD_REQUEST,
                "Email already registered. Please log in.",
            ),
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
