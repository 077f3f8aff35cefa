use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        container::{
            ContainerDto, ContainerListQuery, CreateContainerDto, SweepResultDto,
            UpdateContainerDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::container::status_from_dto,
        service::{container::ContainerService, sweep::ExpirySweeper},
        state::AppState,
    },
};

/// Tag for grouping container endpoints in OpenAPI documentation
pub static CONTAINER_TAG: &str = "container";

/// List containers.
///
/// Returns all containers ordered by ID, optionally filtered by status.
///
/// # Returns
/// - `200 OK` - List of containers
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/containers",
    tag = CONTAINER_TAG,
    params(ContainerListQuery),
    responses(
        (status = 200, description = "Containers", body = Vec<ContainerDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_containers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ContainerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let containers = ContainerService::new(&state.db)
        .list(query.status.map(status_from_dto))
        .await?;

    let dtos: Vec<ContainerDto> = containers.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a container by ID.
///
/// # Returns
/// - `200 OK` - The container
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No container with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/containers/{id}",
    tag = CONTAINER_TAG,
    params(
        ("id" = i32, Path, description = "Container ID")
    ),
    responses(
        (status = 200, description = "Container", body = ContainerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Container not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_container(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let container = ContainerService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(container.into_dto())))
}

/// Create a container.
///
/// The container starts `available` and is owned by the calling LSP.
///
/// # Access Control
/// - `Lsp` - Only LSPs can create containers
///
/// # Returns
/// - `201 Created` - The created container
/// - `400 Bad Request` - Empty name or non-positive capacity
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not an LSP
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/containers",
    tag = CONTAINER_TAG,
    request_body = CreateContainerDto,
    responses(
        (status = 201, description = "Container created", body = ContainerDto),
        (status = 400, description = "Invalid container data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an LSP", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_container(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateContainerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Lsp])
        .await?;

    let container = ContainerService::new(&state.db)
        .create(user.id, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(container.into_dto())))
}

/// Update a container's name and/or capacity.
///
/// Booking status is not affected.
///
/// # Access Control
/// - `Lsp` - Only the LSP that created the container
///
/// # Returns
/// - `200 OK` - The updated container
/// - `400 Bad Request` - Nothing to update or invalid values
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller did not create the container
/// - `404 Not Found` - No container with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/containers/{id}",
    tag = CONTAINER_TAG,
    params(
        ("id" = i32, Path, description = "Container ID")
    ),
    request_body = UpdateContainerDto,
    responses(
        (status = 200, description = "Container updated", body = ContainerDto),
        (status = 400, description = "Invalid container data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller did not create the container", body = ErrorDto),
        (status = 404, description = "Container not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_container(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateContainerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Lsp])
        .await?;

    let container = ContainerService::new(&state.db)
        .update(id, user.id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(container.into_dto())))
}

/// Delete a container, whatever its booking status.
///
/// # Access Control
/// - `Lsp` - Only the LSP that created the container
///
/// # Returns
/// - `204 No Content` - Container deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller did not create the container
/// - `404 Not Found` - No container with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/containers/{id}",
    tag = CONTAINER_TAG,
    params(
        ("id" = i32, Path, description = "Container ID")
    ),
    responses(
        (status = 204, description = "Container deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller did not create the container", body = ErrorDto),
        (status = 404, description = "Container not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_container(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Lsp])
        .await?;

    ContainerService::new(&state.db).delete(id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Release expired pending bookings.
///
/// Runs the long expiry sweep now: pending containers booked longer ago than the
/// configured deadline return to `available`.
///
/// # Access Control
/// - `Lsp` - Only LSPs can trigger the sweep
///
/// # Returns
/// - `200 OK` - Number of released containers
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not an LSP
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/containers/auto-cancel",
    tag = CONTAINER_TAG,
    responses(
        (status = 200, description = "Expired bookings released", body = SweepResultDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an LSP", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn release_expired_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Lsp])
        .await?;

    let affected_rows = ExpirySweeper::new(&state.db)
        .sweep(&state.long_sweep, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(SweepResultDto { affected_rows })))
}
