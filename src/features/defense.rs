//! Defensive aggregates
//!
//! Game logs carry only own points and margin, so opponent points are
//! approximated as `points - plus_minus`.

use serde::{Deserialize, Serialize};

use super::team_stats::{mean, TeamGameLine};

/// Points-allowed aggregates for one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefensiveRecord {
    pub avg_points_allowed: f64,
    /// Lower is better; currently the same as points allowed
    #[serde(default)]
    pub defensive_rating: Option<f64>,
    #[serde(default)]
    pub avg_point_differential: Option<f64>,
    #[serde(default)]
    pub games_analyzed: u32,
}

impl DefensiveRecord {
    pub fn new(avg_points_allowed: f64) -> Self {
        DefensiveRecord {
            avg_points_allowed,
            defensive_rating: None,
            avg_point_differential: None,
            games_analyzed: 0,
        }
    }

    /// Build from the most recent `last_n` games (most-recent-first)
    pub fn from_games(games: &[TeamGameLine], last_n: usize) -> Option<Self> {
        let recent = &games[..games.len().min(last_n)];
        if recent.is_empty() {
            return None;
        }

        let allowed = mean(recent, |g| g.points_allowed());
        Some(DefensiveRecord {
            avg_points_allowed: allowed,
            defensive_rating: Some(allowed),
            avg_point_differential: Some(mean(recent, |g| g.plus_minus as f64)),
            games_analyzed: recent.len() as u32,
        })
    }
}
