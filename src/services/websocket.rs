use axum::{
    extract::{Extension, ws::{Message, WebSocket, WebSocketUpgrade}},
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{error, info};

use crate::dto::{
    match_dto::MatchUpdate,
    player_dto::RosterUpdate,
    roster_dto::SharedRosterState,
};

fn publish<T: Serialize>(tx: &broadcast::Sender<String>, update: &T) {
    match serde_json::to_string(update) {
        Ok(json) => {
            // no subscribers is not an error
            let _ = tx.send(json);
        }
        Err(e) => {
            error!("Failed to serialize update message: {}", e);
        }
    }
}

pub async fn send_roster_update(tx: &broadcast::Sender<String>, state: &SharedRosterState) {
    let players = state.read().await.players.clone();

    publish(tx, &RosterUpdate {
        r#type: "roster_update".to_string(),
        players,
    });
}

pub async fn send_match_update(tx: &broadcast::Sender<String>, state: &SharedRosterState) {
    let current = state.read().await.current_match.clone();

    publish(tx, &MatchUpdate {
        r#type: "match_update".to_string(),
        r#match: current,
    });
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    Extension(tx): Extension<broadcast::Sender<String>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, tx))
}

async fn handle_socket(socket: WebSocket, tx: broadcast::Sender<String>) {
    let (mut sender, mut receiver) = socket.split();
    let mut rx = tx.subscribe();
    info!("Live update client connected.");

    let send_task = tokio::spawn(async move {
        while let Ok(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // Clients only listen; drain until they hang up.
    while let Some(Ok(msg)) = receiver.next().await {
        if let Message::Close(_) = msg {
            break;
        }
    }

    send_task.abort();
    info!("Live update client disconnected.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::player_dto::{Player, Position};
    use crate::dto::roster_dto::RosterState;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[tokio::test]
    async fn roster_update_is_tagged_json() {
        let (tx, mut rx) = broadcast::channel(4);
        let state: SharedRosterState = Arc::new(RwLock::new(RosterState::default()));
        state.write().await.players.push(Player {
            id: "p1".into(),
            name: "Ana".into(),
            position: Position::Defender,
            skill_level: 2,
        });

        send_roster_update(&tx, &state).await;

        let msg: serde_json::Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(msg["type"], "roster_update");
        assert_eq!(msg["players"][0]["name"], "Ana");
    }

    #[tokio::test]
    async fn match_update_without_subscribers_is_dropped() {
        let (tx, rx) = broadcast::channel::<String>(4);
        drop(rx);
        let state: SharedRosterState = Arc::new(RwLock::new(RosterState::default()));

        send_match_update(&tx, &state).await;
    }
}
