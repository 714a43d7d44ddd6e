//! Activity directory routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::directory::{self, DirectoryError};
use crate::state::{AppState, Directory};

#[derive(Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub(crate) fn directory_error_to_response(err: DirectoryError) -> (StatusCode, Json<ErrorBody>) {
    let status = match err {
        DirectoryError::ActivityNotFound | DirectoryError::ParticipantNotFound => StatusCode::NOT_FOUND,
        DirectoryError::AlreadySignedUp | DirectoryError::ActivityFull => StatusCode::BAD_REQUEST,
    };
    (status, Json(ErrorBody { detail: err.to_string() }))
}

/// `GET /activities` — list all activities with their rosters.
pub async fn list_activities(State(state): State<AppState>) -> Json<Directory> {
    Json(directory::list_activities(&state).await)
}

/// `POST /activities/:name/signup?email=` — add a participant.
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorBody>)> {
    let message = directory::signup(&state, &name, &query.email)
        .await
        .map_err(directory_error_to_response)?;
    Ok(Json(MessageResponse { message }))
}

/// `DELETE /activities/:name/signup?email=` — remove a participant.
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorBody>)> {
    let message = directory::unregister(&state, &name, &query.email)
        .await
        .map_err(directory_error_to_response)?;
    Ok(Json(MessageResponse { message }))
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
