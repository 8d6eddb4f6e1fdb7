use serde::{Deserialize, Serialize};

use crate::dto::player_dto::Player;

pub const TEAM_A_NAME: &str = "Team A";
pub const TEAM_B_NAME: &str = "Team B";
pub const TEAM_A_COLOR: &str = "#ff4d4d";
pub const TEAM_B_COLOR: &str = "#4d79ff";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub color: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn team_a(players: Vec<Player>) -> Self {
        Self {
            name: TEAM_A_NAME.to_string(),
            color: TEAM_A_COLOR.to_string(),
            players,
        }
    }

    pub fn team_b(players: Vec<Player>) -> Self {
        Self {
            name: TEAM_B_NAME.to_string(),
            color: TEAM_B_COLOR.to_string(),
            players,
        }
    }

    /// Mean skill level, 0.0 for an empty team.
    pub fn average_skill(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        let total: u32 = self.players.iter().map(|p| p.skill_level as u32).sum();
        total as f64 / self.players.len() as f64
    }
}

/// Both sides produced by one balancer run.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lineup {
    pub team_a: Team,
    pub team_b: Team,
}
