use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, container::LspAnalyticsDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::container::ContainerService,
        state::AppState,
    },
};

/// Tag for grouping analytics endpoints in OpenAPI documentation
pub static ANALYTICS_TAG: &str = "analytics";

/// Get booking statistics for the calling LSP's containers.
///
/// # Access Control
/// - `Lsp` - Only LSPs, counting only their own containers
///
/// # Returns
/// - `200 OK` - Container counts per status and total active bookings
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not an LSP
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/lsp/analytics",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Container statistics", body = LspAnalyticsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an LSP", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lsp_analytics(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Lsp])
        .await?;

    let counts = ContainerService::new(&state.db).analytics(user.id).await?;

    Ok((StatusCode::OK, Json(counts.into_dto())))
}
