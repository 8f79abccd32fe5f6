use axum::{Json, extract::State};

use crate::modules::users::adapters::inbound::errors::ApiError;
use crate::modules::users::core::user::User;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    tracing::info!("Get all users...");
    Ok(Json(state.users.list().await?))
}
