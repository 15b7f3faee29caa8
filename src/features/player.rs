//! Player recent-game aggregates

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::team_stats::mean;
use crate::{CourtsideError, Result};

/// One game from a player's log
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerGameLine {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub points: u32,
    #[serde(default)]
    pub rebounds: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub steals: u32,
    #[serde(default)]
    pub blocks: u32,
    /// 0-100
    #[serde(default)]
    pub fg_pct: f64,
    #[serde(default)]
    pub fg3_pct: f64,
    #[serde(default)]
    pub ft_pct: f64,
    #[serde(default)]
    pub plus_minus: i32,
}

/// Recent aggregates for one player
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerStatRecord {
    pub player_name: String,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub avg_points: f64,
    /// None when unknown; impact scoring then assumes league average
    #[serde(default)]
    pub avg_fg_pct: Option<f64>,
    #[serde(default)]
    pub avg_fg3_pct: Option<f64>,
    #[serde(default)]
    pub avg_ft_pct: Option<f64>,
    #[serde(default)]
    pub avg_rebounds: f64,
    #[serde(default)]
    pub avg_assists: f64,
    #[serde(default)]
    pub avg_steals: f64,
    #[serde(default)]
    pub avg_blocks: f64,
    #[serde(default)]
    pub avg_plus_minus: f64,
    /// Most recent first
    #[serde(default)]
    pub recent_games: Vec<PlayerGameLine>,
}

impl PlayerStatRecord {
    pub fn named(player_name: impl Into<String>) -> Self {
        PlayerStatRecord {
            player_name: player_name.into(),
            ..Default::default()
        }
    }

    /// Average the most recent `last_n` games (most-recent-first input)
    pub fn from_games(player_name: &str, games: &[PlayerGameLine], last_n: usize) -> Option<Self> {
        let recent = &games[..games.len().min(last_n)];
        if recent.is_empty() {
            return None;
        }

        Some(PlayerStatRecord {
            player_name: player_name.to_string(),
            games_played: recent.len() as u32,
            avg_points: mean(recent, |g| g.points as f64),
            avg_fg_pct: Some(mean(recent, |g| g.fg_pct)),
            avg_fg3_pct: Some(mean(recent, |g| g.fg3_pct)),
            avg_ft_pct: Some(mean(recent, |g| g.ft_pct)),
            avg_rebounds: mean(recent, |g| g.rebounds as f64),
            avg_assists: mean(recent, |g| g.assists as f64),
            avg_steals: mean(recent, |g| g.steals as f64),
            avg_blocks: mean(recent, |g| g.blocks as f64),
            avg_plus_minus: mean(recent, |g| g.plus_minus as f64),
            recent_games: recent.to_vec(),
        })
    }

    /// Check every number read by impact and outlook scoring is finite
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("avg_points", Some(self.avg_points)),
            ("avg_fg_pct", self.avg_fg_pct),
            ("avg_rebounds", Some(self.avg_rebounds)),
            ("avg_assists", Some(self.avg_assists)),
            ("avg_steals", Some(self.avg_steals)),
            ("avg_blocks", Some(self.avg_blocks)),
            ("avg_plus_minus", Some(self.avg_plus_minus)),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(CourtsideError::InvalidInput(format!(
                        "{} for {} is not a finite number",
                        name, self.player_name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Points from the most recent `n` games
    pub fn recent_points(&self, n: usize) -> Vec<f64> {
        self.recent_games
            .iter()
            .take(n)
            .map(|g| g.points as f64)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_line(points: u32, rebounds: u32, plus_minus: i32) -> PlayerGameLine {
        PlayerGameLine {
            points,
            rebounds,
            assists: 5,
            fg_pct: 50.0,
            plus_minus,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_games() {
        let games = vec![make_line(30, 10, 8), make_line(20, 6, -2), make_line(25, 8, 0)];
        let record = PlayerStatRecord::from_games("Jayson Tatum", &games, 10).unwrap();

        assert_eq!(record.games_played, 3);
        assert_eq!(record.avg_points, 25.0);
        assert_eq!(record.avg_rebounds, 8.0);
        assert_eq!(record.avg_fg_pct, Some(50.0));
        assert_eq!(record.avg_plus_minus, 2.0);
        assert_eq!(record.recent_games.len(), 3);
    }

    #[test]
    fn test_window_limits_games() {
        let games = vec![make_line(30, 0, 0), make_line(10, 0, 0)];
        let record = PlayerStatRecord::from_games("Someone", &games, 1).unwrap();
        assert_eq!(record.avg_points, 30.0);
        assert_eq!(record.recent_games.len(), 1);
    }

    #[test]
    fn test_validate() {
        let mut record = PlayerStatRecord::named("Someone");
        assert!(record.validate().is_ok());

        record.avg_steals = f64::INFINITY;
        assert!(matches!(
            record.validate(),
            Err(CourtsideError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_recent_points() {
        let mut record = PlayerStatRecord::named("Someone");
        record.recent_games = (1..=7).map(|p| make_line(p, 0, 0)).collect();
        assert_eq!(record.recent_points(5), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }
}
