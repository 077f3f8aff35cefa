use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::container::ContainerStatus;
use sea_orm::ActiveEnum;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reasons a booking transition is rejected.
///
/// All variants are terminal for the request and recoverable by the caller.
/// `RaceLost` and `InvalidState` both mean the container is not in the state the
/// action needs; they differ only in whether the state changed after it was read.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    /// No container has the requested ID.
    #[error("Container {0} not found")]
    NotFound(i32),

    /// Actor role, verification, or ownership does not permit the action.
    #[error("{0}")]
    Forbidden(String),

    /// The container's current status does not allow the action.
    #[error("Container {container_id} is {} and cannot be changed this way", .status.to_value())]
    InvalidState {
        container_id: i32,
        status: ContainerStatus,
    },

    /// The container matched when read but a concurrent write changed it first.
    #[error("Container {0} was modified by another request")]
    RaceLost(i32),
}

/// Converts booking rejections into HTTP responses.
///
/// - `NotFound` → 404 Not Found
/// - `Forbidden` → 403 Forbidden
/// - `InvalidState` / `RaceLost` → 409 Conflict
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::InvalidState { .. } | Self::RaceLost(_) => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
