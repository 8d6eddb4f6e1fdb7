use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use crate::dto::{format_dto::MatchFormat, team_dto::Team};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub format: MatchFormat,
    pub created_at: DateTime<Utc>,
    pub team_a: Team,
    pub team_b: Team,
}

/// A row of the `matches` table. Teams are stored as JSON text and the
/// timestamp as RFC 3339.
#[derive(Debug, FromRow, Clone)]
pub struct MatchRow {
    pub id: String,
    pub format: String,
    pub created_at: String,
    pub team_a: Json<Team>,
    pub team_b: Json<Team>,
}

#[derive(Serialize)]
pub struct MatchUpdate {
    pub r#type: String,
    pub r#match: Option<Match>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::player_dto::{Player, Position};
    use chrono::TimeZone;

    #[test]
    fn match_json_round_trip_keeps_every_field() {
        let created_at = Utc.with_ymd_and_hms(2026, 10, 17, 18, 30, 5).unwrap()
            + chrono::Duration::milliseconds(250);
        let original = Match {
            id: "k3j2h1g0f9e8d".into(),
            format: MatchFormat::SevenASide,
            created_at,
            team_a: Team::team_a(vec![Player {
                id: "a".into(),
                name: "Ana".into(),
                position: Position::Goalkeeper,
                skill_level: 5,
            }]),
            team_b: Team::team_b(vec![]),
        };

        let json = serde_json::to_string(&original).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["format"], "7v7");
        assert!(value["createdAt"].as_str().unwrap().starts_with("2026-10-17T18:30:05"));
        assert_eq!(value["teamA"]["players"][0]["skillLevel"], 5);

        let back: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
