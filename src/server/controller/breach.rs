//! Breach lookup, listing and alert endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        breach::{BreachDto, NotificationRequestDto, PaginationParams},
    },
    server::{
        error::{breach::BreachError, Error},
        model::app::AppState,
        service::{breach::BreachService, notification::NotificationService},
    },
};

/// OpenAPI tag grouping the breach routes
pub static BREACH_TAG: &str = "breach";

/// Get the breaches of a registered user by email
///
/// Stored breaches are returned as they are; the breach API is only queried while the user
/// has none.
#[utoipa::path(
    get,
    path = "/api/breaches/search/{email}",
    tag = BREACH_TAG,
    params(
        ("email" = String, Path, description = "Email address of a registered user")
    ),
    responses(
        (status = 200, description = "Breaches of the user, possibly none", body = Vec<BreachDto>),
        (status = 404, description = "No user registered with the email", body = ErrorDto),
        (status = 429, description = "Breach API rate limit exceeded", body = ErrorDto),
        (status = 503, description = "Breach API unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_breaches(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let breach_service = BreachService::new(&state.db, &state.hibp_client);

    let records = breach_service.sync_and_fetch(&email).await?;
    let breach_dtos: Vec<BreachDto> = records.into_iter().map(BreachDto::from).collect();

    Ok((StatusCode::OK, Json(breach_dtos)))
}

/// List stored breaches across all users
#[utoipa::path(
    get,
    path = "/api/breaches",
    tag = BREACH_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of stored breaches", body = Vec<BreachDto>),
        (status = 404, description = "No breaches on the requested page", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_breaches(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let breach_service = BreachService::new(&state.db, &state.hibp_client);

    let records = breach_service
        .list_breaches(params.skip.unwrap_or(0), params.limit)
        .await?;

    if records.is_empty() {
        return Err(BreachError::NoRecordsFound.into());
    }

    let breach_dtos: Vec<BreachDto> = records.into_iter().map(BreachDto::from).collect();

    Ok((StatusCode::OK, Json(breach_dtos)))
}

/// Get a stored breach by ID
#[utoipa::path(
    get,
    path = "/api/breaches/{id}",
    tag = BREACH_TAG,
    params(
        ("id" = i32, Path, description = "ID of the breach record")
    ),
    responses(
        (status = 200, description = "The breach record", body = BreachDto),
        (status = 404, description = "Breach record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_breach(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let breach_service = BreachService::new(&state.db, &state.hibp_client);

    let record = breach_service.get_breach(id).await?;

    Ok((StatusCode::OK, Json(BreachDto::from(record))))
}

/// Send a single breach alert email
#[utoipa::path(
    post,
    path = "/api/breaches/notify-demo",
    tag = BREACH_TAG,
    request_body = NotificationRequestDto,
    responses(
        (status = 200, description = "Alert email sent", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn notify_demo(
    State(state): State<AppState>,
    Json(request): Json<NotificationRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let notification_service = NotificationService::new(state.mailer.as_ref(), &state.templates);

    notification_service.notify_single(&request).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Email sent".to_string(),
        }),
    ))
}
