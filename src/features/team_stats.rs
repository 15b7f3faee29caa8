//! Team recent-performance aggregates
//!
//! The record the scorer consumes, and how to build it from raw game lines.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CourtsideError, Normalization, Result};

/// One game from a team's log, seen from that team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGameLine {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Opponent label, e.g. "LAL vs. GSW"
    #[serde(default)]
    pub matchup: Option<String>,
    pub won: bool,
    pub points: u32,
    /// Field goal percentage, 0-100
    #[serde(default)]
    pub fg_pct: f64,
    /// Three point percentage, 0-100
    #[serde(default)]
    pub fg3_pct: f64,
    #[serde(default)]
    pub rebounds: u32,
    #[serde(default)]
    pub assists: u32,
    /// Point differential for the game (positive = won by)
    #[serde(default)]
    pub plus_minus: i32,
}

impl TeamGameLine {
    /// Opponent points, recovered from own points and margin
    pub fn points_allowed(&self) -> f64 {
        self.points as f64 - self.plus_minus as f64
    }
}

/// Recent-window aggregates for one team
///
/// Weighted fields are optional; a missing one is filled from
/// [`Normalization`] defaults at scoring time rather than failing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamStatRecord {
    pub team_name: String,
    /// Percentage of recent games won (0-100)
    #[serde(default)]
    pub win_percentage: Option<f64>,
    #[serde(default)]
    pub avg_points_scored: Option<f64>,
    #[serde(default)]
    pub avg_fg_pct: Option<f64>,
    #[serde(default)]
    pub avg_fg3_pct: Option<f64>,

    // Informational only, never weighted
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub avg_points_allowed: Option<f64>,
    #[serde(default)]
    pub avg_rebounds: Option<f64>,
    #[serde(default)]
    pub avg_assists: Option<f64>,
}

impl TeamStatRecord {
    /// Record with only a name; every weighted field falls back to defaults
    pub fn named(team_name: impl Into<String>) -> Self {
        TeamStatRecord {
            team_name: team_name.into(),
            ..Default::default()
        }
    }

    /// Record with the four weighted fields set
    pub fn new(
        team_name: impl Into<String>,
        win_percentage: f64,
        avg_points_scored: f64,
        avg_fg_pct: f64,
        avg_fg3_pct: f64,
    ) -> Self {
        TeamStatRecord {
            team_name: team_name.into(),
            win_percentage: Some(win_percentage),
            avg_points_scored: Some(avg_points_scored),
            avg_fg_pct: Some(avg_fg_pct),
            avg_fg3_pct: Some(avg_fg3_pct),
            ..Default::default()
        }
    }

    /// Aggregate the most recent `last_n` games (input is most-recent-first)
    ///
    /// Returns None when there are no games to aggregate.
    pub fn from_games(team_name: &str, games: &[TeamGameLine], last_n: usize) -> Option<Self> {
        let recent = &games[..games.len().min(last_n)];
        if recent.is_empty() {
            return None;
        }

        let n = recent.len() as f64;
        let wins = recent.iter().filter(|g| g.won).count() as u32;
        let losses = recent.len() as u32 - wins;

        Some(TeamStatRecord {
            team_name: team_name.to_string(),
            win_percentage: Some(wins as f64 / n * 100.0),
            avg_points_scored: Some(mean(recent, |g| g.points as f64)),
            avg_fg_pct: Some(mean(recent, |g| g.fg_pct)),
            avg_fg3_pct: Some(mean(recent, |g| g.fg3_pct)),
            games_played: recent.len() as u32,
            wins,
            losses,
            avg_points_allowed: Some(mean(recent, |g| g.points_allowed())),
            avg_rebounds: Some(mean(recent, |g| g.rebounds as f64)),
            avg_assists: Some(mean(recent, |g| g.assists as f64)),
        })
    }

    pub fn win_percentage_or(&self, norm: &Normalization) -> f64 {
        self.win_percentage.unwrap_or(norm.default_win_percentage)
    }

    pub fn points_scored_or(&self, norm: &Normalization) -> f64 {
        self.avg_points_scored.unwrap_or(norm.default_points_scored)
    }

    pub fn fg_pct_or(&self, norm: &Normalization) -> f64 {
        self.avg_fg_pct.unwrap_or(norm.default_fg_pct)
    }

    pub fn fg3_pct_or(&self, norm: &Normalization) -> f64 {
        self.avg_fg3_pct.unwrap_or(norm.default_fg3_pct)
    }

    /// Check the name is set and every present number is finite
    pub fn validate(&self) -> Result<()> {
        if self.team_name.trim().is_empty() {
            return Err(CourtsideError::InvalidInput(
                "team_name must not be empty".to_string(),
            ));
        }

        let fields = [
            ("win_percentage", self.win_percentage),
            ("avg_points_scored", self.avg_points_scored),
            ("avg_fg_pct", self.avg_fg_pct),
            ("avg_fg3_pct", self.avg_fg3_pct),
        ];
        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(CourtsideError::InvalidInput(format!(
                        "{} for {} is not a finite number",
                        name, self.team_name
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Mean of a per-game value over a non-empty slice
pub(crate) fn mean<T>(items: &[T], f: impl Fn(&T) -> f64) -> f64 {
    items.iter().map(f).sum::<f64>() / items.len() as f64
}
