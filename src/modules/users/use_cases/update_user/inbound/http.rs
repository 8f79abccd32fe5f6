use axum::{Json, body::Bytes, extract::State};

use crate::modules::users::adapters::inbound::errors::ApiError;
use crate::modules::users::core::ports::UpsertOutcome;
use crate::modules::users::core::user::User;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<User>>, ApiError> {
    let user = User::from_json(&body)?;
    let id = user.id;
    let (outcome, users) = state.users.upsert(user).await?;
    match outcome {
        UpsertOutcome::Updated => tracing::info!("Updating user id :: {id}"),
        UpsertOutcome::Inserted => tracing::info!("Upserting user id :: {id}"),
    }
    Ok(Json(users))
}
