use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        container::{ContainerDto, SuggestionRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::container::ContainerService,
        state::AppState,
    },
};

/// Tag for grouping suggestion endpoints in OpenAPI documentation
pub static SUGGESTION_TAG: &str = "suggestion";

/// Suggest containers for a shipment.
///
/// Cargo type and destination are accepted but not yet used for ranking; the
/// first available containers are returned.
///
/// # Access Control
/// - `Trader` - Only traders can request suggestions
///
/// # Returns
/// - `200 OK` - Up to three available containers
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not a trader
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/suggestions/containers",
    tag = SUGGESTION_TAG,
    request_body = SuggestionRequestDto,
    responses(
        (status = 200, description = "Suggested containers", body = Vec<ContainerDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a trader", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn suggest_containers(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SuggestionRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Trader])
        .await?;

    tracing::debug!(
        "Container suggestion for user {} (cargo type {:?}, destination {:?})",
        user.id,
        payload.cargo_type,
        payload.destination
    );

    let containers = ContainerService::new(&state.db).suggest().await?;

    let dtos: Vec<ContainerDto> = containers.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
