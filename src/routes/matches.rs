use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::SqlitePool;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

use crate::dto::roster_dto::SharedRosterState;
use crate::services::{
    match_builder::create_match,
    match_share::share_text,
    match_store,
    pitch_layout::resolve_slots,
    websocket::send_match_update,
};

/**
 * POST to generate teams from the roster. Calling it again regenerates with a
 * new coin flip, id and timestamp.
 */
pub async fn generate_match(
    Extension(state): Extension<SharedRosterState>,
    Extension(tx): Extension<broadcast::Sender<String>>,
) -> Response {
    let (players, format) = {
        let guard = state.read().await;
        (guard.players.clone(), guard.format)
    };

    let needed = format.team_size() * 2;
    if players.len() < needed {
        warn!("Refused to generate: {} of {} players.", players.len(), needed);
        return (
            StatusCode::BAD_REQUEST,
            format!("You need {} players for a {} match.", needed, format),
        )
            .into_response();
    }

    let generated = create_match(&players, format, &mut rand::rng());
    info!("Generated match {} ({}).", generated.id, format);

    state.write().await.current_match = Some(generated.clone());
    send_match_update(&tx, &state).await;

    (StatusCode::OK, Json(generated)).into_response()
}

pub async fn get_current_match(Extension(state): Extension<SharedRosterState>) -> Response {
    match state.read().await.current_match.clone() {
        Some(current) => (StatusCode::OK, Json(current)).into_response(),
        None => (StatusCode::NOT_FOUND, "No match has been generated.").into_response(),
    }
}

pub async fn share_current_match(Extension(state): Extension<SharedRosterState>) -> Response {
    match state.read().await.current_match.as_ref() {
        Some(current) => (StatusCode::OK, share_text(current, false)).into_response(),
        None => (StatusCode::NOT_FOUND, "No match has been generated.").into_response(),
    }
}

/**
 * GET the pitch diagram of the current match.
 */
pub async fn current_pitch(Extension(state): Extension<SharedRosterState>) -> Response {
    match state.read().await.current_match.as_ref() {
        Some(current) => (StatusCode::OK, Json(resolve_slots(current))).into_response(),
        None => (StatusCode::NOT_FOUND, "No match has been generated.").into_response(),
    }
}

/**
 * POST to persist the current match.
 */
pub async fn save_current_match(
    Extension(state): Extension<SharedRosterState>,
    Extension(pool): Extension<SqlitePool>,
) -> impl IntoResponse {
    let Some(current) = state.read().await.current_match.clone() else {
        return (StatusCode::NOT_FOUND, "No match has been generated.".to_string());
    };

    match match_store::save_match(&pool, &current).await {
        Ok(_) => (StatusCode::OK, "Your match has been saved successfully.".to_string()),
        Err(e) => {
            error!("Failed to save match {}: {}", current.id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save match. Please try again.".to_string(),
            )
        }
    }
}

pub async fn list_saved_matches(Extension(pool): Extension<SqlitePool>) -> Response {
    match match_store::list_matches(&pool).await {
        Ok(matches) => (StatusCode::OK, Json(matches)).into_response(),
        Err(e) => {
            error!("Failed to load saved matches: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load saved matches. Please try again.",
            )
                .into_response()
        }
    }
}

pub async fn share_saved_match(
    Extension(pool): Extension<SqlitePool>,
    Path(match_id): Path<String>,
) -> impl IntoResponse {
    match match_store::get_match(&pool, &match_id).await {
        Ok(Some(saved)) => (StatusCode::OK, share_text(&saved, true)),
        Ok(None) => (StatusCode::NOT_FOUND, "Match was not found.".to_string()),
        Err(e) => {
            error!("Failed to load match {}: {}", match_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not share match details".to_string(),
            )
        }
    }
}

/**
 * DELETE a saved match by id.
 */
pub async fn delete_saved_match(
    Extension(pool): Extension<SqlitePool>,
    Path(match_id): Path<String>,
) -> impl IntoResponse {
    info!("Deleting match {}", match_id);

    match match_store::delete_match(&pool, &match_id).await {
        Ok(true) => (StatusCode::OK, "Match was successfully removed.".to_string()),
        Ok(false) => (StatusCode::NOT_FOUND, "Match was not found.".to_string()),
        Err(e) => {
            error!("Failed to delete match: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to delete match. Please try again.".to_string(),
            )
        }
    }
}
