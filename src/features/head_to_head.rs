//! Head-to-head history between two teams

use serde::{Deserialize, Serialize};

use super::team_stats::{mean, TeamGameLine};

/// Prior meetings, seen from the reference side ("team 1")
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeadToHeadRecord {
    pub games_played: u32,
    /// Reference side's win rate in those meetings (0-100)
    #[serde(default)]
    pub team1_win_pct: f64,
    #[serde(default)]
    pub team1_wins: u32,
    #[serde(default)]
    pub team2_wins: u32,
    /// Average margin, positive favors team 1
    #[serde(default)]
    pub avg_point_diff: f64,
}

impl HeadToHeadRecord {
    pub fn new(games_played: u32, team1_win_pct: f64) -> Self {
        HeadToHeadRecord {
            games_played,
            team1_win_pct,
            ..Default::default()
        }
    }

    /// Summarize the `last_n` most recent meetings from team 1's game log
    ///
    /// No meetings yields a zero-game record, which scorers treat as no data.
    pub fn from_meetings(meetings: &[TeamGameLine], last_n: usize) -> Self {
        let recent = &meetings[..meetings.len().min(last_n)];
        if recent.is_empty() {
            return HeadToHeadRecord::default();
        }

        let team1_wins = recent.iter().filter(|g| g.won).count() as u32;
        let games_played = recent.len() as u32;
        HeadToHeadRecord {
            games_played,
            team1_win_pct: team1_wins as f64 / games_played as f64 * 100.0,
            team1_wins,
            team2_wins: games_played - team1_wins,
            avg_point_diff: mean(recent, |g| g.plus_minus as f64),
        }
    }

    pub fn has_data(&self) -> bool {
        self.games_played > 0
    }

    /// Same history seen from the other side
    pub fn inverted(&self) -> Self {
        HeadToHeadRecord {
            games_played: self.games_played,
            team1_win_pct: 100.0 - self.team1_win_pct,
            team1_wins: self.team2_wins,
            team2_wins: self.team1_wins,
            avg_point_diff: -self.avg_point_diff,
        }
    }

    /// Which side won the majority of the last three meetings, if known
    pub fn recent_trend(meetings: &[TeamGameLine]) -> Option<bool> {
        if meetings.len() < 3 {
            return None;
        }
        let wins = meetings.iter().take(3).filter(|g| g.won).count();
        Some(wins >= 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_meeting(won: bool, plus_minus: i32) -> TeamGameLine {
        TeamGameLine {
            date: None,
            matchup: Some("LAL vs. GSW".to_string()),
            won,
            points: 110,
            fg_pct: 0.0,
            fg3_pct: 0.0,
            rebounds: 0,
            assists: 0,
            plus_minus,
        }
    }

    #[test]
    fn test_from_meetings() {
        let meetings = vec![
            make_meeting(true, 12),
            make_meeting(false, -4),
            make_meeting(true, 2),
            make_meeting(true, 6),
        ];

        let h2h = HeadToHeadRecord::from_meetings(&meetings, 5);
        assert_eq!(h2h.games_played, 4);
        assert_eq!(h2h.team1_wins, 3);
        assert_eq!(h2h.team2_wins, 1);
        assert_eq!(h2h.team1_win_pct, 75.0);
        assert_eq!(h2h.avg_point_diff, 4.0);
    }

    #[test]
    fn test_no_meetings_is_no_data() {
        let h2h = HeadToHeadRecord::from_meetings(&[], 5);
        assert!(!h2h.has_data());
    }

    #[test]
    fn test_inverted() {
        let h2h = HeadToHeadRecord {
            games_played: 5,
            team1_win_pct: 80.0,
            team1_wins: 4,
            team2_wins: 1,
            avg_point_diff: 7.5,
        };

        let inv = h2h.inverted();
        assert_eq!(inv.games_played, 5);
        assert_eq!(inv.team1_win_pct, 20.0);
        assert_eq!(inv.team1_wins, 1);
        assert_eq!(inv.avg_point_diff, -7.5);
        assert_eq!(inv.inverted(), h2h);
    }

    #[test]
    fn test_recent_trend() {
        let meetings = vec![
            make_meeting(false, -3),
            make_meeting(false, -8),
            make_meeting(true, 5),
        ];
        assert_eq!(HeadToHeadRecord::recent_trend(&meetings), Some(false));
        assert_eq!(HeadToHeadRecord::recent_trend(&meetings[..2]), None);
    }
}
