//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here together with its utoipa annotation. The collected
//! OpenAPI document is served as JSON at `/api/docs/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, model::app::AppState};

/// Path the OpenAPI document is served at
pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";

/// Builds the application's HTTP router with all API endpoints.
///
/// # Registered Endpoints
/// - `GET /api/breaches/search/{email}` - Breaches of a registered user, synced on first lookup
/// - `GET /api/breaches` - Paginated list of stored breaches
/// - `GET /api/breaches/{id}` - Single stored breach
/// - `POST /api/breaches/notify-demo` - Send a single breach alert email
/// - `GET /api/docs/openapi.json` - OpenAPI document
///
/// # Returns
/// An Axum `Router<AppState>`, ready to be given its state and served.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Breachwatch", description = "Breachwatch API"), tags(
        (name = controller::breach::BREACH_TAG, description = "Breach lookup and alert routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::breach::search_breaches))
        .routes(routes!(controller::breach::list_breaches))
        .routes(routes!(controller::breach::get_breach))
        .routes(routes!(controller::breach::notify_demo))
        .split_for_parts();

    routes.route(
        OPENAPI_PATH,
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
