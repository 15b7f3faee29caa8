//! Key player availability
//!
//! Unavailable players lower their side's strength by a fixed percentage
//! according to their impact. The adjustment can be applied to raw strengths
//! before normalization (see [`MatchInputs`](super::MatchInputs)) or to a
//! finished prediction with [`apply_availability`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::matchup::{normalize_probabilities, PredictionResult};
use crate::{CourtsideError, Result, Side};

/// How much a player matters to their team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl ImpactLevel {
    /// Strength change, in percent, when the player is out
    pub fn adjustment(&self) -> i32 {
        match self {
            ImpactLevel::High => -10,
            ImpactLevel::Medium => -5,
            ImpactLevel::Low => -2,
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactLevel::High => write!(f, "HIGH"),
            ImpactLevel::Medium => write!(f, "MEDIUM"),
            ImpactLevel::Low => write!(f, "LOW"),
        }
    }
}

impl std::str::FromStr for ImpactLevel {
    type Err = CourtsideError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "high" => Ok(ImpactLevel::High),
            "medium" | "med" => Ok(ImpactLevel::Medium),
            "low" => Ok(ImpactLevel::Low),
            _ => Err(CourtsideError::Parse(format!(
                "Unknown impact: {}. Use high, medium, or low.",
                s
            ))),
        }
    }
}

/// Whether a key player is playing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub player_name: String,
    pub is_playing: bool,
    #[serde(default)]
    pub impact: ImpactLevel,
}

impl PlayerStatus {
    pub fn out(player_name: impl Into<String>, impact: ImpactLevel) -> Self {
        PlayerStatus {
            player_name: player_name.into(),
            is_playing: false,
            impact,
        }
    }

    pub fn playing(player_name: impl Into<String>, impact: ImpactLevel) -> Self {
        PlayerStatus {
            player_name: player_name.into(),
            is_playing: true,
            impact,
        }
    }

    /// Adjustment this player contributes (zero when playing)
    pub fn adjustment(&self) -> i32 {
        if self.is_playing {
            0
        } else {
            self.impact.adjustment()
        }
    }
}

/// Key player statuses for both sides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    #[serde(default)]
    pub home: Vec<PlayerStatus>,
    #[serde(default)]
    pub away: Vec<PlayerStatus>,
}

impl AvailabilityReport {
    pub fn push(&mut self, side: Side, status: PlayerStatus) {
        match side {
            Side::Home => self.home.push(status),
            Side::Away => self.away.push(status),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.away.is_empty()
    }

    pub fn adjustment(&self) -> AvailabilityAdjustment {
        AvailabilityAdjustment {
            home: self.home.iter().map(PlayerStatus::adjustment).sum(),
            away: self.away.iter().map(PlayerStatus::adjustment).sum(),
        }
    }
}

/// Summed strength change per side, in percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityAdjustment {
    pub home: i32,
    pub away: i32,
}

impl AvailabilityAdjustment {
    pub fn is_zero(&self) -> bool {
        self.home == 0 && self.away == 0
    }
}

/// Re-weight a finished prediction for unavailable players
///
/// The adjustments are added to the probabilities, which are then
/// renormalized to 100. A negative adjustment also lowers that side's
/// projected score by half of it, rounded down; a positive one leaves the
/// score alone. Confidence is carried over from the base prediction.
///
/// The result is not clamped: a side whose adjustment outweighs its
/// probability ends up below 0.
pub fn apply_availability(
    prediction: &PredictionResult,
    adjustment: AvailabilityAdjustment,
) -> PredictionResult {
    let mut adjusted = prediction.clone();
    if adjustment.is_zero() {
        return adjusted;
    }

    log::info!(
        "Adjusting for availability: {} {:+}%, {} {:+}%",
        prediction.home_team,
        adjustment.home,
        prediction.away_team,
        adjustment.away
    );

    let (home_prob, away_prob) = normalize_probabilities(
        prediction.home_win_probability + adjustment.home as f64,
        prediction.away_win_probability + adjustment.away as f64,
    );
    adjusted.home_win_probability = home_prob;
    adjusted.away_win_probability = away_prob;

    if adjustment.home < 0 {
        adjusted.predicted_home_score += adjustment.home.div_euclid(2);
    }
    if adjustment.away < 0 {
        adjusted.predicted_away_score += adjustment.away.div_euclid(2);
    }

    adjusted.refresh_derived();
    adjusted
}
