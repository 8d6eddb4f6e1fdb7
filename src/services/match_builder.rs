use chrono::Utc;
use rand::Rng;

use crate::dto::{format_dto::MatchFormat, match_dto::Match, player_dto::Player};
use crate::services::team_balancer::{RandomFlip, balance};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 13;

/// Opaque base-36 identifier for players and matches.
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Balances the roster and stamps the result with a fresh id and the current
/// time. The same generator drives the goalkeeper coin and the id.
pub fn create_match<R: Rng + ?Sized>(roster: &[Player], format: MatchFormat, rng: &mut R) -> Match {
    let lineup = balance(roster, format, &mut RandomFlip(&mut *rng));

    Match {
        id: generate_id(rng),
        format,
        created_at: Utc::now(),
        team_a: lineup.team_a,
        team_b: lineup.team_b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::player_dto::Position;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roster() -> Vec<Player> {
        let mut players = Vec::new();
        for (i, position) in [
            Position::Goalkeeper,
            Position::Goalkeeper,
            Position::Defender,
            Position::Defender,
            Position::Defender,
            Position::Defender,
            Position::Midfielder,
            Position::Midfielder,
            Position::Midfielder,
            Position::Midfielder,
            Position::Forward,
            Position::Forward,
        ]
        .into_iter()
        .enumerate()
        {
            players.push(Player {
                id: format!("p{}", i),
                name: format!("Player {}", i),
                position,
                skill_level: (i % 5) as u8 + 1,
            });
        }
        players
    }

    #[test]
    fn ids_are_base36() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = generate_id(&mut rng);
        assert_eq!(id.len(), 13);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(id, generate_id(&mut rng));
    }

    #[test]
    fn match_carries_format_and_both_teams() {
        let before = Utc::now();
        let created = create_match(&roster(), MatchFormat::SixASide, &mut rand::rng());

        assert_eq!(created.format, MatchFormat::SixASide);
        assert_eq!(created.team_a.players.len(), 6);
        assert_eq!(created.team_b.players.len(), 6);
        assert!(created.created_at >= before);
    }

    #[test]
    fn seeded_generator_reproduces_the_match() {
        let first = create_match(&roster(), MatchFormat::SixASide, &mut StdRng::seed_from_u64(9));
        let second = create_match(&roster(), MatchFormat::SixASide, &mut StdRng::seed_from_u64(9));

        assert_eq!(first.id, second.id);
        assert_eq!(first.team_a, second.team_a);
        assert_eq!(first.team_b, second.team_b);
    }

    #[test]
    fn regenerating_gives_a_new_id() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = create_match(&roster(), MatchFormat::SixASide, &mut rng);
        let second = create_match(&roster(), MatchFormat::SixASide, &mut rng);
        assert_ne!(first.id, second.id);
    }
}
