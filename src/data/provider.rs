//! Stats provider seam
//!
//! The engine never fetches data; a [`StatsProvider`] hands it pre-aggregated
//! records or `None` when it has nothing.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::directory::TeamDirectory;
use crate::features::{
    DefensiveRecord, HeadToHeadRecord, PlayerGameLine, PlayerStatRecord, RestRecord, TeamGameLine,
    TeamStatRecord,
};
use crate::Result;

/// Meetings considered for head-to-head history
pub const HEAD_TO_HEAD_WINDOW: usize = 5;

/// Source of aggregate statistics
pub trait StatsProvider {
    fn team_stats(&self, team: &str) -> Option<TeamStatRecord>;

    fn player_stats(&self, player: &str) -> Option<PlayerStatRecord>;

    /// History seen from `team`
    fn head_to_head(&self, team: &str, opponent: &str) -> Option<HeadToHeadRecord>;

    fn rest(&self, team: &str) -> Option<RestRecord>;

    fn defense(&self, team: &str) -> Option<DefensiveRecord>;
}

/// A team's game log, most recent first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamLog {
    pub team: String,
    pub games: Vec<TeamGameLine>,
}

/// A player's game log, most recent first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerLog {
    pub player: String,
    pub games: Vec<PlayerGameLine>,
}

fn default_window() -> usize {
    10
}

/// Game logs captured at one point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Reference date for rest calculations; rest is unknown without it
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// Games aggregated per team and player
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default)]
    pub teams: Vec<TeamLog>,
    #[serde(default)]
    pub players: Vec<PlayerLog>,
}

impl StatsSnapshot {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Provider backed by an in-memory snapshot
pub struct InMemoryProvider {
    directory: TeamDirectory,
    as_of: Option<NaiveDate>,
    window: usize,
    teams: HashMap<String, Vec<TeamGameLine>>,
    players: Vec<PlayerLog>,
}

impl InMemoryProvider {
    pub fn new(snapshot: StatsSnapshot, directory: TeamDirectory) -> Self {
        let mut teams = HashMap::new();
        for log in snapshot.teams {
            let name = Self::canonical(&directory, &log.team);
            teams.insert(name, log.games);
        }

        InMemoryProvider {
            directory,
            as_of: snapshot.as_of,
            window: snapshot.window.max(1),
            teams,
            players: snapshot.players,
        }
    }

    pub fn directory(&self) -> &TeamDirectory {
        &self.directory
    }

    fn canonical(directory: &TeamDirectory, name: &str) -> String {
        directory
            .find(name)
            .map(|t| t.full_name.clone())
            .unwrap_or_else(|| name.trim().to_string())
    }

    fn games(&self, team: &str) -> Option<(String, &[TeamGameLine])> {
        let name = Self::canonical(&self.directory, team);
        let games = self.teams.get(&name)?;
        Some((name, games.as_slice()))
    }
}

impl StatsProvider for InMemoryProvider {
    fn team_stats(&self, team: &str) -> Option<TeamStatRecord> {
        let (name, games) = self.games(team)?;
        TeamStatRecord::from_games(&name, games, self.window)
    }

    fn player_stats(&self, player: &str) -> Option<PlayerStatRecord> {
        let query = player.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        let log = self
            .players
            .iter()
            .find(|p| p.player.to_lowercase().contains(&query))?;
        PlayerStatRecord::from_games(&log.player, &log.games, self.window)
    }

    fn head_to_head(&self, team: &str, opponent: &str) -> Option<HeadToHeadRecord> {
        let (_, games) = self.games(team)?;
        let abbreviation = self.directory.find(opponent)?.abbreviation.clone();

        let meetings: Vec<TeamGameLine> = games
            .iter()
            .filter(|g| {
                g.matchup
                    .as_deref()
                    .is_some_and(|m| m.contains(abbreviation.as_str()))
            })
            .cloned()
            .collect();

        Some(HeadToHeadRecord::from_meetings(&meetings, HEAD_TO_HEAD_WINDOW))
    }

    fn rest(&self, team: &str) -> Option<RestRecord> {
        let today = self.as_of?;
        let (_, games) = self.games(team)?;
        let dates: Vec<NaiveDate> = games.iter().filter_map(|g| g.date).collect();
        Some(RestRecord::from_schedule(&dates, today))
    }

    fn defense(&self, team: &str) -> Option<DefensiveRecord> {
        let (_, games) = self.games(team)?;
        DefensiveRecord::from_games(games, self.window)
    }
}
