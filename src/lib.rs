//! Basketball matchup prediction from weighted team factors
//!
//! A heuristic engine that scores each side of a matchup from recent aggregates,
//! turns the two scores into win probabilities, and projects player outlooks.

pub mod data;
pub mod features;
pub mod model;
pub mod predict;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use model::weights::{Factor, FactorWeights, Normalization};

/// Which side of a matchup a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => write!(f, "home"),
            Side::Away => write!(f, "away"),
        }
    }
}

impl std::str::FromStr for Side {
    type Err = CourtsideError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "home" | "h" => Ok(Side::Home),
            "away" | "a" => Ok(Side::Away),
            _ => Err(CourtsideError::Parse(format!(
                "Unknown side: {}. Use home or away.",
                s
            ))),
        }
    }
}

/// Confidence tier, ordered Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLevel::High => write!(f, "High"),
            ConfidenceLevel::Medium => write!(f, "Medium"),
            ConfidenceLevel::Low => write!(f, "Low"),
        }
    }
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum CourtsideError {
    #[error("Missing {side} team statistics")]
    MissingInput { side: Side },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, CourtsideError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub weights: FactorWeights,
    #[serde(default)]
    pub normalization: Normalization,
    #[serde(default)]
    pub prediction: PredictionConfig,
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Match-level tuning: home court, confidence tiers, score projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Home court bonus, scaled by the home court weight and 100
    pub home_court_bonus: f64,
    /// Probability gap above which confidence is High
    pub high_confidence_gap: f64,
    /// Probability gap above which confidence is Medium
    pub medium_confidence_gap: f64,
    /// Points added to (or taken from) a side's projected score
    pub score_bump: f64,
    /// Win probability above which a side gets the full bump
    pub favorite_threshold: f64,
    /// Projected points when a team record has no scoring average
    pub base_points: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        PredictionConfig {
            home_court_bonus: 7.5,
            high_confidence_gap: 20.0,
            medium_confidence_gap: 10.0,
            score_bump: 3.0,
            favorite_threshold: 60.0,
            base_points: 105.0,
        }
    }
}

/// Player outlook tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Most recent games considered for consistency
    pub consistency_window: usize,
    /// Fewer games than this yields neutral consistency
    pub min_games: usize,
    pub great_threshold: f64,
    pub good_threshold: f64,
    pub average_threshold: f64,
    /// Half-width of the expected points range
    pub points_band: f64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        PerformanceConfig {
            consistency_window: 5,
            min_games: 3,
            great_threshold: 70.0,
            good_threshold: 50.0,
            average_threshold: 30.0,
            points_band: 5.0,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CourtsideError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CourtsideError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CourtsideError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject weights and spans that would break normalization
    pub fn validate(&self) -> Result<()> {
        for factor in Factor::ALL {
            let w = self.weights.get(factor);
            if !w.is_finite() || w < 0.0 {
                return Err(CourtsideError::Config(format!(
                    "Weight for {} must be a non-negative number, got {}",
                    factor, w
                )));
            }
        }

        let norm = &self.normalization;
        if !(norm.offense_span > 0.0) || !(norm.defense_span > 0.0) {
            return Err(CourtsideError::Config(
                "Normalization spans must be positive".to_string(),
            ));
        }

        let perf = &self.performance;
        if perf.consistency_window == 0 {
            return Err(CourtsideError::Config(
                "consistency_window must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
