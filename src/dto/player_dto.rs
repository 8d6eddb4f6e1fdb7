use serde::{Deserialize, Serialize};

pub const MIN_SKILL: u8 = 1;
pub const MAX_SKILL: u8 = 5;
pub const MAX_GOALKEEPERS: usize = 2;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// Pitch order, goal line first.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    pub fn rank(self) -> usize {
        match self {
            Position::Goalkeeper => 0,
            Position::Defender => 1,
            Position::Midfielder => 2,
            Position::Forward => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Position::Goalkeeper => "#ffcc00",
            Position::Defender => "#00cc66",
            Position::Midfielder => "#cc66ff",
            Position::Forward => "#ff6600",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub skill_level: u8,
}

/// Body of POST /players and PUT /players/{id}.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInput {
    pub name: String,
    pub position: Position,
    pub skill_level: u8,
}

impl PlayerInput {
    /// Trims the name and checks the skill range. Returns the cleaned name.
    pub fn validate(&self) -> Result<String, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Please enter a player name".to_string());
        }
        if !(MIN_SKILL..=MAX_SKILL).contains(&self.skill_level) {
            return Err(format!(
                "Skill level must be between {} and {}",
                MIN_SKILL, MAX_SKILL
            ));
        }
        Ok(name.to_string())
    }
}

#[derive(Serialize)]
pub struct RosterUpdate {
    pub r#type: String,
    pub players: Vec<Player>,
}
