use serde::Serialize;

use crate::dto::{
    format_dto::MatchFormat,
    match_dto::Match,
    player_dto::{Player, Position},
    team_dto::Team,
};

use crate::dto::player_dto::Position::{Defender as D, Forward as F, Goalkeeper as G, Midfielder as M};

/// Team A's half as (x%, y%, position), goal line on the left.
const SIX_A_SIDE: [(u8, u8, Position); 6] = [
    (10, 50, G),
    (25, 30, D),
    (25, 70, D),
    (40, 30, M),
    (40, 70, M),
    (55, 50, F),
];

const SEVEN_A_SIDE: [(u8, u8, Position); 7] = [
    (10, 50, G),
    (25, 25, D),
    (25, 50, D),
    (25, 75, D),
    (40, 35, M),
    (40, 65, M),
    (55, 50, F),
];

const EIGHT_A_SIDE: [(u8, u8, Position); 8] = [
    (10, 50, G),
    (25, 25, D),
    (25, 50, D),
    (25, 75, D),
    (40, 30, M),
    (40, 50, M),
    (40, 70, M),
    (55, 50, F),
];

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    #[serde(rename = "teamA")]
    TeamA,
    #[serde(rename = "teamB")]
    TeamB,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlacedPlayer {
    pub side: Side,
    pub x: u8,
    pub y: u8,
    pub team_color: String,
    pub position_color: &'static str,
    pub player: Player,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PitchView {
    pub team_a_average: f64,
    pub team_b_average: f64,
    pub slots: Vec<PlacedPlayer>,
}

fn slots_for(format: MatchFormat) -> &'static [(u8, u8, Position)] {
    match format {
        MatchFormat::SixASide => &SIX_A_SIDE,
        MatchFormat::SevenASide => &SEVEN_A_SIDE,
        MatchFormat::EightASide => &EIGHT_A_SIDE,
    }
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn place_team(team: &Team, side: Side, format: MatchFormat, placed: &mut Vec<PlacedPlayer>) {
    let mut used = [0usize; 4];

    for &(x, y, position) in slots_for(format) {
        let nth = used[position.rank()];
        let Some(player) = team.players.iter().filter(|p| p.position == position).nth(nth) else {
            // under-filled team, leave the slot empty
            continue;
        };
        used[position.rank()] += 1;

        placed.push(PlacedPlayer {
            side,
            x: if side == Side::TeamA { x } else { 100 - x },
            y,
            team_color: team.color.clone(),
            position_color: position.color(),
            player: player.clone(),
        });
    }
}

/// Pairs each diagram slot with the next unplaced player of that position.
pub fn resolve_slots(shown: &Match) -> PitchView {
    let mut slots = Vec::new();
    place_team(&shown.team_a, Side::TeamA, shown.format, &mut slots);
    place_team(&shown.team_b, Side::TeamB, shown.format, &mut slots);

    PitchView {
        team_a_average: one_decimal(shown.team_a.average_skill()),
        team_b_average: one_decimal(shown.team_b.average_skill()),
        slots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn player(id: &str, position: Position, skill_level: u8) -> Player {
        Player {
            id: id.into(),
            name: id.into(),
            position,
            skill_level,
        }
    }

    fn shown(format: MatchFormat, a: Vec<Player>, b: Vec<Player>) -> Match {
        Match {
            id: "m".into(),
            format,
            created_at: Utc::now(),
            team_a: Team::team_a(a),
            team_b: Team::team_b(b),
        }
    }

    #[test]
    fn slot_tables_follow_the_quota() {
        for format in MatchFormat::ALL {
            let slots = slots_for(format);
            assert_eq!(slots.len(), format.team_size());
            for position in Position::ALL {
                let count = slots.iter().filter(|s| s.2 == position).count();
                assert_eq!(count, format.quota(position));
            }
        }
    }

    #[test]
    fn each_defender_gets_their_own_slot() {
        let view = resolve_slots(&shown(
            MatchFormat::SixASide,
            vec![player("d1", D, 3), player("d2", D, 4)],
            vec![],
        ));

        let placed: Vec<(&str, u8, u8)> = view
            .slots
            .iter()
            .map(|s| (s.player.id.as_str(), s.x, s.y))
            .collect();
        assert_eq!(placed, vec![("d1", 25, 30), ("d2", 25, 70)]);
        assert_eq!(view.team_a_average, 3.5);
        assert_eq!(view.team_b_average, 0.0);
    }

    #[test]
    fn missing_players_leave_slots_empty() {
        let view = resolve_slots(&shown(
            MatchFormat::EightASide,
            vec![player("f", F, 5)],
            vec![player("g", G, 2), player("m", M, 3)],
        ));

        assert_eq!(view.slots.len(), 3);
        let keeper = view.slots.iter().find(|s| s.player.id == "g").unwrap();
        assert_eq!(keeper.side, Side::TeamB);
        assert_eq!(keeper.x, 90);
        assert_eq!(keeper.team_color, "#4d79ff");
        assert_eq!(keeper.position_color, "#ffcc00");
    }

    #[test]
    fn averages_round_to_one_decimal() {
        let view = resolve_slots(&shown(
            MatchFormat::SixASide,
            vec![player("a", D, 5), player("b", D, 4), player("c", M, 4)],
            vec![],
        ));
        assert_eq!(view.team_a_average, 4.3);
    }
}
