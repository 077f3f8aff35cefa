use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, container::ContainerDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book an available container.
///
/// Moves the container to `pending` with the caller as holder. Of two concurrent
/// requests for the same container at most one succeeds.
///
/// # Access Control
/// - Verified traders only, checked by the booking service
///
/// # Returns
/// - `200 OK` - The pending container
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not a verified trader
/// - `404 Not Found` - No container with that ID
/// - `409 Conflict` - Container is not available or was booked concurrently
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/containers/{id}/book",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Container ID")
    ),
    responses(
        (status = 200, description = "Container booked", body = ContainerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a verified trader", body = ErrorDto),
        (status = 404, description = "Container not found", body = ErrorDto),
        (status = 409, description = "Container not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book_container(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let container = BookingService::new(&state.db)
        .book(&user.actor(), id)
        .await?;

    Ok((StatusCode::OK, Json(container.into_dto())))
}

/// Confirm a pending booking held by the caller.
///
/// # Access Control
/// - The trader holding the booking, checked by the booking service
///
/// # Returns
/// - `200 OK` - The confirmed container
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not hold the booking
/// - `404 Not Found` - No container with that ID
/// - `409 Conflict` - Container is not pending or changed concurrently
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/containers/{id}/confirm",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Container ID")
    ),
    responses(
        (status = 200, description = "Booking confirmed", body = ContainerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not hold the booking", body = ErrorDto),
        (status = 404, description = "Container not found", body = ErrorDto),
        (status = 409, description = "Container not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let container = BookingService::new(&state.db)
        .confirm(&user.actor(), id)
        .await?;

    Ok((StatusCode::OK, Json(container.into_dto())))
}

/// Cancel a pending booking held by the caller.
///
/// The container returns to `available`.
///
/// # Access Control
/// - The trader holding the booking, checked by the booking service
///
/// # Returns
/// - `200 OK` - The released container
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not hold the booking
/// - `404 Not Found` - No container with that ID
/// - `409 Conflict` - Container is not pending or changed concurrently
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/containers/{id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Container ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = ContainerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not hold the booking", body = ErrorDto),
        (status = 404, description = "Container not found", body = ErrorDto),
        (status = 409, description = "Container not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let container = BookingService::new(&state.db)
        .cancel(&user.actor(), id)
        .await?;

    Ok((StatusCode::OK, Json(container.into_dto())))
}
