use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{data::user::UserRepository, error::AppError, model::user::UserDto, state::AppState};

/// GET /api/users
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users: Vec<UserDto> = UserRepository::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(UserDto::from)
        .collect();

    Ok(Json(json!({ "users": users })))
}

/// GET /api/users/{username}
pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserRepository::new(&state.db)
        .find_by_username(&username)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(json!({ "user": UserDto::from(user) })))
}
