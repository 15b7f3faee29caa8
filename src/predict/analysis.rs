//! Full matchup analysis
//!
//! Gathers every input for a game from a provider, predicts it, and applies
//! player availability to the finished prediction.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::availability::{apply_availability, AvailabilityAdjustment, AvailabilityReport};
use super::insights::{self, Insight};
use super::matchup::{MatchInputs, MatchPredictor, PredictionResult};
use super::performance::{PerformancePrediction, PerformancePredictor};
use crate::data::provider::StatsProvider;
use crate::features::PlayerStatRecord;
use crate::model::ScoreBreakdown;
use crate::{Config, CourtsideError, Result, Side};

/// Everything that went into and came out of one matchup analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupReport {
    pub inputs: MatchInputs,
    pub home_breakdown: ScoreBreakdown,
    pub away_breakdown: ScoreBreakdown,
    pub availability: AvailabilityReport,
    pub adjustment: AvailabilityAdjustment,
    /// Outlook for each key player found by the provider
    #[serde(default)]
    pub key_players: Vec<PerformancePrediction>,
    /// Before availability adjustments
    pub base_prediction: PredictionResult,
    pub prediction: PredictionResult,
    pub insights: Vec<Insight>,
}

impl MatchupReport {
    /// Write the report as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Runs predictions against a stats provider
pub struct MatchupAnalyzer<P> {
    provider: P,
    predictor: MatchPredictor,
    performance: PerformancePredictor,
}

impl<P: StatsProvider> MatchupAnalyzer<P> {
    pub fn new(provider: P, config: &Config) -> Self {
        MatchupAnalyzer {
            provider,
            predictor: MatchPredictor::from_config(config),
            performance: PerformancePredictor::new(config.performance.clone()),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Collect inputs for a matchup; team stats are required
    pub fn gather(&self, home: &str, away: &str) -> Result<MatchInputs> {
        let home_stats = self
            .provider
            .team_stats(home)
            .ok_or(CourtsideError::MissingInput { side: Side::Home })?;
        let away_stats = self
            .provider
            .team_stats(away)
            .ok_or(CourtsideError::MissingInput { side: Side::Away })?;

        let inputs = MatchInputs::new(home_stats, away_stats)
            .with_head_to_head(self.provider.head_to_head(home, away))
            .with_rest(self.provider.rest(home), self.provider.rest(away))
            .with_defense(self.provider.defense(home), self.provider.defense(away));

        Ok(inputs)
    }

    /// Stats for each named player; players the provider lacks are skipped
    pub fn gather_players(&self, names: &[&str]) -> Vec<PlayerStatRecord> {
        names
            .iter()
            .filter_map(|&name| {
                let stats = self.provider.player_stats(name);
                if stats.is_none() {
                    log::warn!("No recent stats for key player {}, skipping", name);
                }
                stats
            })
            .collect()
    }

    pub fn analyze(
        &self,
        home: &str,
        away: &str,
        availability: Option<&AvailabilityReport>,
        key_players: &[&str],
    ) -> Result<MatchupReport> {
        let mut inputs = self.gather(home, away)?;

        let players = self.gather_players(key_players);
        if !players.is_empty() {
            inputs = inputs.with_key_players(players);
        }

        self.analyze_inputs(inputs, availability.cloned().unwrap_or_default())
    }

    /// Predict from already gathered inputs
    pub fn analyze_inputs(
        &self,
        inputs: MatchInputs,
        availability: AvailabilityReport,
    ) -> Result<MatchupReport> {
        let base_prediction = self.predictor.predict(&inputs)?;

        let adjustment = availability.adjustment();
        let prediction = apply_availability(&base_prediction, adjustment);
        let insights = insights::generate(&prediction);

        let key_players = inputs
            .key_players
            .iter()
            .flatten()
            .filter_map(|player| self.performance.predict(Some(player)))
            .collect();

        let scorer = self.predictor.scorer();
        let (home_breakdown, away_breakdown) = match (&inputs.home, &inputs.away) {
            (Some(home), Some(away)) => (
                scorer.breakdown(
                    home,
                    inputs.home_defense.as_ref(),
                    inputs.head_to_head.as_ref(),
                    inputs.home_rest.as_ref(),
                ),
                scorer.breakdown(
                    away,
                    inputs.away_defense.as_ref(),
                    inputs.away_head_to_head().as_ref(),
                    inputs.away_rest.as_ref(),
                ),
            ),
            // predict() has already rejected missing teams
            (None, _) => return Err(CourtsideError::MissingInput { side: Side::Home }),
            (_, None) => return Err(CourtsideError::MissingInput { side: Side::Away }),
        };

        Ok(MatchupReport {
            inputs,
            home_breakdown,
            away_breakdown,
            availability,
            adjustment,
            key_players,
            base_prediction,
            prediction,
            insights,
        })
    }

    pub fn analyze_player(&self, player: &str) -> Result<PerformancePrediction> {
        let stats = self.provider.player_stats(player);
        self.performance
            .predict(stats.as_ref())
            .ok_or_else(|| CourtsideError::UnknownPlayer(player.to_string()))
    }
}
