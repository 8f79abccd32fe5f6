use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::users::adapters::inbound::errors::ApiError;
use crate::modules::users::core::ports::UserStoreError;
use crate::modules::users::core::user::{User, parse_user_id};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let Some(user_id) = parse_user_id(&id) else {
        tracing::warn!("User not found with Id: {id}");
        return Err(ApiError::NotFound);
    };

    let user = state.users.get(user_id).await.inspect_err(|error| {
        if matches!(error, UserStoreError::NotFound { .. }) {
            tracing::warn!("User not found with Id: {id}");
        }
    })?;
    tracing::info!("Get user Id :: {id}");
    Ok(Json(user))
}
