use axum::{Json, body::Bytes, extract::State};

use crate::modules::users::adapters::inbound::errors::ApiError;
use crate::modules::users::core::user::User;
use crate::shell::state::AppState;

// The body is decoded by hand so that clients omitting the content type are
// still served, and so decode failures map onto ApiError.
pub async fn handle(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<User>>, ApiError> {
    let user = User::from_json(&body)?;
    tracing::info!("Adding user id :: {}", user.id);
    Ok(Json(state.users.add(user).await?))
}
