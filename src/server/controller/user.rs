use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::CurrentUserDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the authenticated account.
///
/// # Returns
/// - `200 OK` - The caller's account
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Account no longer exists
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current account", body = CurrentUserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db).get_current(caller.user_id).await?;

    Ok(Json(CurrentUserDto {
        user: user.into_dto(),
    }))
}
