use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::dto::{format_dto::MatchFormat, match_dto::Match, player_dto::Player};

/// Working state of the match organiser: the roster being edited, the
/// selected format and the last generated match.
#[derive(Debug, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RosterState {
    pub format: MatchFormat,
    pub players: Vec<Player>,
    pub current_match: Option<Match>,
}

pub type SharedRosterState = Arc<RwLock<RosterState>>;

/// Reply of GET /distribution.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionReport {
    pub format: MatchFormat,
    pub players_needed: usize,
    pub goalkeepers: usize,
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
    pub has_minimum_distribution: bool,
}
