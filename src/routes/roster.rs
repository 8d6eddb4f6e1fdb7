use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::dto::{
    format_dto::FormatSelection,
    player_dto::{MAX_GOALKEEPERS, Player, PlayerInput, Position},
    roster_dto::{DistributionReport, SharedRosterState},
};
use crate::services::{
    match_builder::generate_id,
    team_balancer::{has_minimum_distribution, position_counts},
    websocket::{send_match_update, send_roster_update},
};

/**
 * GET the players on the roster.
 */
pub async fn get_players(Extension(state): Extension<SharedRosterState>) -> impl IntoResponse {
    let players = state.read().await.players.clone();
    (StatusCode::OK, Json(players))
}

/**
 * POST a new player. The id is assigned here.
 */
pub async fn add_player(
    Extension(state): Extension<SharedRosterState>,
    Extension(tx): Extension<broadcast::Sender<String>>,
    Json(payload): Json<PlayerInput>,
) -> Response {
    let name = match payload.validate() {
        Ok(name) => name,
        Err(msg) => return (StatusCode::BAD_REQUEST, msg).into_response(),
    };

    let player = {
        let mut guard = state.write().await;

        if payload.position == Position::Goalkeeper {
            let keepers = guard
                .players
                .iter()
                .filter(|p| p.position == Position::Goalkeeper)
                .count();
            if keepers >= MAX_GOALKEEPERS {
                warn!("Rejected {}: goalkeeper limit reached.", name);
                return (
                    StatusCode::BAD_REQUEST,
                    "Maximum of 2 goalkeepers reached".to_string(),
                )
                    .into_response();
            }
        }

        let player = Player {
            id: generate_id(&mut rand::rng()),
            name,
            position: payload.position,
            skill_level: payload.skill_level,
        };
        guard.players.push(player.clone());
        player
    };

    info!("Added player {} ({}).", player.name, player.id);
    send_roster_update(&tx, &state).await;
    (StatusCode::OK, Json(player)).into_response()
}

/**
 * PUT new details for an existing player.
 */
pub async fn update_player(
    Extension(state): Extension<SharedRosterState>,
    Extension(tx): Extension<broadcast::Sender<String>>,
    Path(player_id): Path<String>,
    Json(payload): Json<PlayerInput>,
) -> Response {
    let name = match payload.validate() {
        Ok(name) => name,
        Err(msg) => return (StatusCode::BAD_REQUEST, msg).into_response(),
    };

    let updated = {
        let mut guard = state.write().await;
        let Some(player) = guard.players.iter_mut().find(|p| p.id == player_id) else {
            return (StatusCode::NOT_FOUND, "Player was not found.".to_string()).into_response();
        };

        player.name = name;
        player.position = payload.position;
        player.skill_level = payload.skill_level;
        player.clone()
    };

    info!("Updated player {}.", updated.id);
    send_roster_update(&tx, &state).await;
    (StatusCode::OK, Json(updated)).into_response()
}

/**
 * DELETE a player by id. The current match no longer fits the roster, so it is
 * dropped as well.
 */
pub async fn remove_player(
    Extension(state): Extension<SharedRosterState>,
    Extension(tx): Extension<broadcast::Sender<String>>,
    Path(player_id): Path<String>,
) -> impl IntoResponse {
    {
        let mut guard = state.write().await;
        let before = guard.players.len();
        guard.players.retain(|p| p.id != player_id);

        if guard.players.len() == before {
            return (StatusCode::NOT_FOUND, "Player was not found.".to_string());
        }
        guard.current_match = None;
    }

    info!("Removed player {}.", player_id);
    send_roster_update(&tx, &state).await;
    send_match_update(&tx, &state).await;
    (StatusCode::OK, "Player was successfully removed.".to_string())
}

pub async fn get_format(Extension(state): Extension<SharedRosterState>) -> impl IntoResponse {
    let format = state.read().await.format;
    (StatusCode::OK, Json(FormatSelection { format }))
}

pub async fn set_format(
    Extension(state): Extension<SharedRosterState>,
    Json(payload): Json<FormatSelection>,
) -> impl IntoResponse {
    state.write().await.format = payload.format;
    info!("Format set to {}.", payload.format);
    (StatusCode::OK, Json(payload))
}

/**
 * GET how the roster covers the positional quota of the selected format.
 */
pub async fn get_distribution(Extension(state): Extension<SharedRosterState>) -> impl IntoResponse {
    let guard = state.read().await;
    let counts = position_counts(&guard.players);

    let report = DistributionReport {
        format: guard.format,
        players_needed: guard.format.team_size() * 2,
        goalkeepers: counts[Position::Goalkeeper.rank()],
        defenders: counts[Position::Defender.rank()],
        midfielders: counts[Position::Midfielder.rank()],
        forwards: counts[Position::Forward.rank()],
        has_minimum_distribution: has_minimum_distribution(&guard.players, guard.format),
    };

    (StatusCode::OK, Json(report))
}
