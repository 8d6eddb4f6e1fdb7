use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dto::player_dto::Position;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchFormat {
    #[default]
    #[serde(rename = "6v6")]
    SixASide,
    #[serde(rename = "7v7")]
    SevenASide,
    #[serde(rename = "8v8")]
    EightASide,
}

impl MatchFormat {
    pub const ALL: [MatchFormat; 3] = [
        MatchFormat::SixASide,
        MatchFormat::SevenASide,
        MatchFormat::EightASide,
    ];

    /// Players per team.
    pub fn team_size(self) -> usize {
        match self {
            MatchFormat::SixASide => 6,
            MatchFormat::SevenASide => 7,
            MatchFormat::EightASide => 8,
        }
    }

    /// Required count of a position on one team.
    pub fn quota(self, position: Position) -> usize {
        let (gk, def, mid, fwd) = match self {
            MatchFormat::SixASide => (1, 2, 2, 1),
            MatchFormat::SevenASide => (1, 3, 2, 1),
            MatchFormat::EightASide => (1, 3, 3, 1),
        };

        match position {
            Position::Goalkeeper => gk,
            Position::Defender => def,
            Position::Midfielder => mid,
            Position::Forward => fwd,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchFormat::SixASide => "6v6",
            MatchFormat::SevenASide => "7v7",
            MatchFormat::EightASide => "8v8",
        }
    }
}

impl fmt::Display for MatchFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown match format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for MatchFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s.trim())
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// Body of PUT /format.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatSelection {
    pub format: MatchFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotas_sum_to_team_size() {
        for format in MatchFormat::ALL {
            let total: usize = Position::ALL.iter().map(|p| format.quota(*p)).sum();
            assert_eq!(total, format.team_size(), "{}", format);
        }
    }

    #[test]
    fn quota_table() {
        assert_eq!(MatchFormat::SevenASide.quota(Position::Defender), 3);
        assert_eq!(MatchFormat::SevenASide.quota(Position::Midfielder), 2);
        assert_eq!(MatchFormat::EightASide.quota(Position::Midfielder), 3);
        assert_eq!(MatchFormat::EightASide.quota(Position::Goalkeeper), 1);
    }

    #[test]
    fn wire_name_matches_display() {
        let json = serde_json::to_string(&MatchFormat::EightASide).unwrap();
        assert_eq!(json, "\"8v8\"");
        assert_eq!("7v7".parse::<MatchFormat>(), Ok(MatchFormat::SevenASide));
        assert!("5v5".parse::<MatchFormat>().is_err());
    }
}
