use axum::{
    extract::Extension,
    routing::{get, post, put},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tower_http::cors::CorsLayer;
use tracing::info;

mod config;

mod dto {
    pub mod format_dto;
    pub mod match_dto;
    pub mod player_dto;
    pub mod roster_dto;
    pub mod team_dto;
}

mod routes {
    pub mod matches;
    pub mod roster;
    #[cfg(test)]
    pub mod test_support;
}

mod services {
    pub mod match_builder;
    pub mod match_share;
    pub mod match_store;
    pub mod pitch_layout;
    pub mod team_balancer;
    pub mod websocket;
}

use config::Config;
use dto::roster_dto::{RosterState, SharedRosterState};
use routes::{matches, roster};
use services::{match_store, websocket::websocket_handler};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid DATABASE_URL")
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Could not connect to SQLite");

    match_store::init_schema(&pool)
        .await
        .expect("Could not create the matches table");

    info!("Connected to sqlite database at {}.", config.database_url);

    let state: SharedRosterState = Arc::new(RwLock::new(RosterState::default()));
    let (tx, _rx) = broadcast::channel::<String>(100);

    let app = Router::new()
        .route("/players", get(roster::get_players).post(roster::add_player))
        .route(
            "/players/{id}",
            put(roster::update_player).delete(roster::remove_player),
        )
        .route("/format", get(roster::get_format).put(roster::set_format))
        .route("/distribution", get(roster::get_distribution))
        .route("/matches", get(matches::list_saved_matches))
        .route("/matches/generate", post(matches::generate_match))
        .route("/matches/current", get(matches::get_current_match))
        .route("/matches/current/share", get(matches::share_current_match))
        .route("/matches/current/pitch", get(matches::current_pitch))
        .route("/matches/current/save", post(matches::save_current_match))
        .route("/matches/{id}", axum::routing::delete(matches::delete_saved_match))
        .route("/matches/{id}/share", get(matches::share_saved_match))
        .route("/ws", get(websocket_handler))
        .layer(Extension(pool))
        .layer(Extension(state))
        .layer(Extension(tx))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Could not bind the listener");
    info!("Started server on {}.", config.bind_addr);
    axum::serve(listener, app).await.expect("Server error");
}
