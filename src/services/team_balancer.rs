//! Greedy two-team split of a roster.
//!
//! Players are grouped by position and sorted by skill (highest first, equal
//! skills in input order). The two best goalkeepers are split by a coin flip,
//! then defenders, midfielders and forwards are dealt out in pairs: the better
//! player of each pair joins whichever team currently has the lower mean
//! skill, Team A winning ties. Only `quota * 2` players of each outfield
//! position take part; anyone beyond that, and every goalkeeper after the
//! first two, sits out.

use rand::Rng;
use std::cmp::Reverse;
use tracing::warn;

use crate::dto::{
    format_dto::MatchFormat,
    player_dto::{Player, Position},
    team_dto::{Lineup, Team},
};

const OUTFIELD: [Position; 3] = [Position::Defender, Position::Midfielder, Position::Forward];

/// Source of the single random decision in a balancer run.
pub trait CoinFlip {
    /// `true` seats the best goalkeeper on Team A.
    fn flip(&mut self) -> bool;
}

/// Fair coin backed by any `rand` generator.
pub struct RandomFlip<R>(pub R);

impl<R: Rng> CoinFlip for RandomFlip<R> {
    fn flip(&mut self) -> bool {
        self.0.random_bool(0.5)
    }
}

/// Coin that always lands the same way.
#[cfg(test)]
pub struct FixedFlip(pub bool);

#[cfg(test)]
impl CoinFlip for FixedFlip {
    fn flip(&mut self) -> bool {
        self.0
    }
}

/// Mean skill of the players seated so far; an empty team is 0.
fn team_strength(players: &[&Player]) -> f64 {
    if players.is_empty() {
        return 0.0;
    }
    let total: u32 = players.iter().map(|p| p.skill_level as u32).sum();
    total as f64 / players.len() as f64
}

fn group_by_position(roster: &[Player]) -> [Vec<&Player>; 4] {
    let mut groups: [Vec<&Player>; 4] = Default::default();
    for player in roster {
        groups[player.position.rank()].push(player);
    }
    // sort_by_key is stable, so equal skills keep roster order
    for group in groups.iter_mut() {
        group.sort_by_key(|p| Reverse(p.skill_level));
    }
    groups
}

fn into_team(mut players: Vec<&Player>, build: fn(Vec<Player>) -> Team) -> Team {
    players.sort_by_key(|p| p.position.rank());
    build(players.into_iter().cloned().collect())
}

pub fn balance<C: CoinFlip + ?Sized>(roster: &[Player], format: MatchFormat, coin: &mut C) -> Lineup {
    let groups = group_by_position(roster);

    let mut team_a: Vec<&Player> = Vec::with_capacity(format.team_size());
    let mut team_b: Vec<&Player> = Vec::with_capacity(format.team_size());

    let keepers = &groups[Position::Goalkeeper.rank()];
    if keepers.len() >= 2 {
        if coin.flip() {
            team_a.push(keepers[0]);
            team_b.push(keepers[1]);
        } else {
            team_b.push(keepers[0]);
            team_a.push(keepers[1]);
        }
    }

    for position in OUTFIELD {
        let group = &groups[position.rank()];
        let take = (format.quota(position) * 2).min(group.len());

        for pair in group[..take].chunks(2) {
            let (weaker, other) = if team_strength(&team_a) <= team_strength(&team_b) {
                (&mut team_a, &mut team_b)
            } else {
                (&mut team_b, &mut team_a)
            };

            weaker.push(pair[0]);
            if let Some(second) = pair.get(1) {
                other.push(*second);
            }
        }
    }

    let seated = team_a.len() + team_b.len();
    if seated < roster.len() {
        warn!(
            "{} of {} players left out of the {} lineup",
            roster.len() - seated,
            roster.len(),
            format
        );
    }

    Lineup {
        team_a: into_team(team_a, Team::team_a),
        team_b: into_team(team_b, Team::team_b),
    }
}

/// Number of players per position, indexed by `Position::rank`.
pub fn position_counts(roster: &[Player]) -> [usize; 4] {
    let mut counts = [0; 4];
    for player in roster {
        counts[player.position.rank()] += 1;
    }
    counts
}

/// True when every position has at least enough players to fill its quota on
/// both teams. Surplus is not checked.
pub fn has_minimum_distribution(roster: &[Player], format: MatchFormat) -> bool {
    let counts = position_counts(roster);
    Position::ALL
        .iter()
        .all(|position| counts[position.rank()] >= format.quota(*position) * 2)
}
