//! Member controller.

use crate::{
    extractors::{AuthenticatedUser, UserParamsQuery, ValidatedJson, ValidatedJsonRejection},
    responses::{no_content, pagination_headers, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use dating_core::{DatingError, UserId};
use dating_service::{UserForDetailedDto, UserForListDto, UserForUpdateDto};
use tracing::debug;

/// Creates the member router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user).put(update_user))
        .route("/:id/like/:recipient_id", post(like_user))
}

/// List members matching the caller's filters.
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "users",
    params(UserParamsQuery),
    responses(
        (status = 200, description = "Page of members; metadata in the Pagination header", body = [UserForListDto]),
        (status = 400, description = "Invalid query", body = ApiResponse),
        (status = 401, description = "Missing or invalid token", body = ApiResponse),
        (status = 404, description = "Caller not found", body = ApiResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_users(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    query: Result<Query<UserParamsQuery>, QueryRejection>,
) -> ApiResult<(HeaderMap, Json<Vec<UserForListDto>>)> {
    let caller = user.identity()?;
    let Query(query) = query.map_err(|e| DatingError::validation(e.body_text()))?;
    debug!("List users request from {}", caller);

    let page = state.user_service.list_users(query.into_params(caller)?).await?;
    let headers = pagination_headers(page.info)?;

    Ok((headers, Json(page.content)))
}

/// Get a member's full profile.
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member profile", body = UserForDetailedDto),
        (status = 401, description = "Missing or invalid token", body = ApiResponse),
        (status = 404, description = "Member not found", body = ApiResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UserForDetailedDto>> {
    user.identity()?;
    debug!("Get user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let profile = state.user_service.get_user(user_id).await?;
    Ok(Json(profile))
}

/// Update the caller's own profile.
#[utoipa::path(
    put,
    path = "/api/user/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "Member id; must be the caller")),
    request_body = UserForUpdateDto,
    responses(
        (status = 204, description = "Profile saved"),
        (status = 400, description = "Invalid body", body = ApiResponse),
        (status = 401, description = "Route id is not the caller", body = ApiResponse),
        (status = 404, description = "Member not found", body = ApiResponse),
        (status = 500, description = "Profile could not be saved", body = ApiResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    body: Result<ValidatedJson<UserForUpdateDto>, ValidatedJsonRejection>,
) -> ApiResult<Response> {
    debug!("Update user request: {}", id);

    let user_id = user.require_self(parse_user_id(&id)?)?;
    let request = match body {
        Ok(ValidatedJson(request)) => request,
        Err(rejection) => return Ok(rejection.into_response()),
    };

    state.user_service.update_user(user_id, request).await?;
    Ok(no_content().into_response())
}

/// Like another member.
#[utoipa::path(
    post,
    path = "/api/user/{id}/like/{recipient_id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "Liker id; must be the caller"),
        ("recipient_id" = i64, Path, description = "Member being liked")
    ),
    responses(
        (status = 200, description = "Like stored"),
        (status = 400, description = "Already liked or could not be stored", body = ApiResponse),
        (status = 401, description = "Route id is not the caller", body = ApiResponse),
        (status = 404, description = "Recipient not found", body = ApiResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn like_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path((id, recipient_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    debug!("Like request: {} -> {}", id, recipient_id);

    let liker = user.require_self(parse_user_id(&id)?)?;
    let recipient = parse_user_id(&recipient_id)?;
    state.user_service.like_user(liker, recipient).await?;

    Ok(StatusCode::OK)
}

fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id).map_err(|_| AppError(DatingError::validation(format!("Invalid user ID: {id}"))))
}
