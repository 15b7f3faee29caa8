//! Factor weight table and normalization constants
//!
//! Hand-tuned heuristics, not fitted parameters. Kept in config so they can be
//! adjusted without touching the scoring code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A factor contributing to a team's strength score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    RecentForm,
    OffensivePower,
    ShootingEfficiency,
    DefensiveStrength,
    HomeCourt,
    HeadToHead,
    RestAdvantage,
    PlayerImpact,
}

impl Factor {
    pub const ALL: [Factor; 8] = [
        Factor::RecentForm,
        Factor::OffensivePower,
        Factor::ShootingEfficiency,
        Factor::DefensiveStrength,
        Factor::HomeCourt,
        Factor::HeadToHead,
        Factor::RestAdvantage,
        Factor::PlayerImpact,
    ];

    /// Factors computed per team by the scorer
    pub const TEAM: [Factor; 6] = [
        Factor::RecentForm,
        Factor::OffensivePower,
        Factor::ShootingEfficiency,
        Factor::DefensiveStrength,
        Factor::HeadToHead,
        Factor::RestAdvantage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Factor::RecentForm => "recent_form",
            Factor::OffensivePower => "offensive_power",
            Factor::ShootingEfficiency => "shooting_efficiency",
            Factor::DefensiveStrength => "defensive_strength",
            Factor::HomeCourt => "home_court",
            Factor::HeadToHead => "head_to_head",
            Factor::RestAdvantage => "rest_advantage",
            Factor::PlayerImpact => "player_impact",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Factor::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Weight per factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub recent_form: f64,
    pub offensive_power: f64,
    pub shooting_efficiency: f64,
    pub defensive_strength: f64,
    pub home_court: f64,
    pub head_to_head: f64,
    pub rest_advantage: f64,
    pub player_impact: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        FactorWeights {
            recent_form: 0.25,
            offensive_power: 0.18,
            shooting_efficiency: 0.15,
            defensive_strength: 0.15,
            home_court: 0.12,
            head_to_head: 0.10,
            rest_advantage: 0.05,
            player_impact: 0.05,
        }
    }
}

impl FactorWeights {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::RecentForm => self.recent_form,
            Factor::OffensivePower => self.offensive_power,
            Factor::ShootingEfficiency => self.shooting_efficiency,
            Factor::DefensiveStrength => self.defensive_strength,
            Factor::HomeCourt => self.home_court,
            Factor::HeadToHead => self.head_to_head,
            Factor::RestAdvantage => self.rest_advantage,
            Factor::PlayerImpact => self.player_impact,
        }
    }

    pub fn set(&mut self, factor: Factor, weight: f64) {
        let slot = match factor {
            Factor::RecentForm => &mut self.recent_form,
            Factor::OffensivePower => &mut self.offensive_power,
            Factor::ShootingEfficiency => &mut self.shooting_efficiency,
            Factor::DefensiveStrength => &mut self.defensive_strength,
            Factor::HomeCourt => &mut self.home_court,
            Factor::HeadToHead => &mut self.head_to_head,
            Factor::RestAdvantage => &mut self.rest_advantage,
            Factor::PlayerImpact => &mut self.player_impact,
        };
        *slot = weight;
    }

    /// Sum of all eight weights (1.05 for the defaults)
    pub fn total(&self) -> f64 {
        Factor::ALL.iter().map(|f| self.get(*f)).sum()
    }
}

/// Bounds and defaults used to bring raw stats onto a 0-100 scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Normalization {
    /// Sub-score used when a factor has no data
    pub neutral: f64,
    /// Points per game that maps to 0 offense
    pub offense_floor: f64,
    /// Points per game range mapped onto 0-100
    pub offense_span: f64,
    /// Points allowed that maps to 0 defense
    pub defense_ceiling: f64,
    pub defense_span: f64,
    /// Rest sub-score change per fatigue point
    pub rest_step: f64,
    pub default_win_percentage: f64,
    pub default_points_scored: f64,
    pub default_fg_pct: f64,
    pub default_fg3_pct: f64,
}

impl Default for Normalization {
    fn default() -> Self {
        Normalization {
            neutral: 50.0,
            offense_floor: 90.0,
            offense_span: 30.0,
            defense_ceiling: 115.0,
            defense_span: 20.0,
            rest_step: 5.0,
            default_win_percentage: 50.0,
            default_points_scored: 105.0,
            default_fg_pct: 45.0,
            default_fg3_pct: 35.0,
        }
    }
}

impl Normalization {
    /// Offense: 90-120 PPG onto 0-100, clamped
    pub fn offense(&self, ppg: f64) -> f64 {
        ((ppg - self.offense_floor) / self.offense_span * 100.0).clamp(0.0, 100.0)
    }

    /// Defense: 95-115 allowed onto 100-0 (fewer allowed is better), clamped
    pub fn defense(&self, points_allowed: f64) -> f64 {
        ((self.defense_ceiling - points_allowed) / self.defense_span * 100.0).clamp(0.0, 100.0)
    }

    pub fn shooting(&self, fg_pct: f64, fg3_pct: f64) -> f64 {
        (fg_pct + fg3_pct) / 2.0
    }

    /// Rest: centered on neutral, -8..+2 fatigue maps to 10..60
    pub fn rest(&self, fatigue_factor: i32) -> f64 {
        self.neutral + fatigue_factor as f64 * self.rest_step
    }
}
