use axum::{body::to_bytes, response::Response};
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

use crate::dto::roster_dto::{RosterState, SharedRosterState};

pub fn new_state() -> (SharedRosterState, broadcast::Sender<String>) {
    let (tx, _rx) = broadcast::channel(16);
    (Arc::new(RwLock::new(RosterState::default())), tx)
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
