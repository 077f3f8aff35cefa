use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Approve a trader.
///
/// Marks the trader as verified, allowing them to book containers.
///
/// # Access Control
/// - `Lsp` - Only LSPs can approve traders
///
/// # Returns
/// - `200 OK` - The verified trader
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not an LSP
/// - `404 Not Found` - No trader with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users/{id}/approve",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Trader user ID")
    ),
    responses(
        (status = 200, description = "Trader verified", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an LSP", body = ErrorDto),
        (status = 404, description = "Trader not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_trader(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Lsp])
        .await?;

    let user = UserService::new(&state.db).approve_trader(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
