use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{analytics, auth, booking, container, suggestion, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Container Booking API",
        description = "Container booking for traders and logistics service providers"
    ),
    tags(
        (name = "auth", description = "Registration, login and sessions"),
        (name = "user", description = "Trader approval"),
        (name = "container", description = "Container management and expiry"),
        (name = "booking", description = "Booking state transitions"),
        (name = "analytics", description = "LSP statistics"),
        (name = "suggestion", description = "Container suggestions")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(user::approve_trader))
        .routes(routes!(
            container::list_containers,
            container::create_container
        ))
        .routes(routes!(
            container::get_container,
            container::update_container,
            container::delete_container
        ))
        .routes(routes!(container::release_expired_bookings))
        .routes(routes!(booking::book_container))
        .routes(routes!(booking::confirm_booking))
        .routes(routes!(booking::cancel_booking))
        .routes(routes!(analytics::get_lsp_analytics))
        .routes(routes!(suggestion::suggest_containers))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
