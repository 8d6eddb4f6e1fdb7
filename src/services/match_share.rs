use crate::dto::{match_dto::Match, team_dto::Team};

fn roster_lines(team: &Team) -> String {
    team.players
        .iter()
        .map(|p| format!("- {} ({}, Skill: {})", p.name, p.position.as_str(), p.skill_level))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain-text summary for the share sheet. Saved matches carry their date.
pub fn share_text(shared: &Match, include_date: bool) -> String {
    let mut message = format!("⚽ Football Match - {} ⚽\n\n", shared.format);

    if include_date {
        message.push_str(&format!("Date: {}\n\n", shared.created_at.format("%Y-%m-%d")));
    }

    message.push_str(&format!("TEAM A:\n{}\n\n", roster_lines(&shared.team_a)));
    message.push_str(&format!("TEAM B:\n{}", roster_lines(&shared.team_b)));
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::format_dto::MatchFormat;
    use crate::dto::player_dto::{Player, Position};
    use chrono::{TimeZone, Utc};

    fn sample() -> Match {
        let player = |id: &str, position, skill_level| Player {
            id: id.into(),
            name: id.into(),
            position,
            skill_level,
        };

        Match {
            id: "abc".into(),
            format: MatchFormat::SevenASide,
            created_at: Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap(),
            team_a: Team::team_a(vec![
                player("Ana", Position::Goalkeeper, 4),
                player("Bo", Position::Defender, 3),
            ]),
            team_b: Team::team_b(vec![player("Cy", Position::Forward, 5)]),
        }
    }

    #[test]
    fn fresh_match_text() {
        let text = share_text(&sample(), false);
        assert_eq!(
            text,
            "⚽ Football Match - 7v7 ⚽\n\n\
             TEAM A:\n- Ana (Goalkeeper, Skill: 4)\n- Bo (Defender, Skill: 3)\n\n\
             TEAM B:\n- Cy (Forward, Skill: 5)"
        );
    }

    #[test]
    fn saved_match_text_is_dated() {
        let text = share_text(&sample(), true);
        assert!(text.starts_with("⚽ Football Match - 7v7 ⚽\n\nDate: 2026-10-17\n\nTEAM A:\n"));
    }
}
