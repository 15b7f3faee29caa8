//! Match outcome prediction
//!
//! Scores both sides, tilts toward the home team, and normalizes the two
//! scores into win probabilities.

use serde::{Deserialize, Serialize};

use crate::features::{DefensiveRecord, HeadToHeadRecord, PlayerStatRecord, RestRecord, TeamStatRecord};
use crate::model::TeamScorer;
use crate::predict::availability::AvailabilityAdjustment;
use crate::{Config, ConfidenceLevel, CourtsideError, PredictionConfig, Result, Side};

/// Everything known about a matchup going into a prediction
///
/// Home and away stats are mandatory; every other record is optional and
/// flattens to neutral when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchInputs {
    pub home: Option<TeamStatRecord>,
    pub away: Option<TeamStatRecord>,
    #[serde(default)]
    pub home_defense: Option<DefensiveRecord>,
    #[serde(default)]
    pub away_defense: Option<DefensiveRecord>,
    /// Seen from the home side
    #[serde(default)]
    pub head_to_head: Option<HeadToHeadRecord>,
    #[serde(default)]
    pub home_rest: Option<RestRecord>,
    #[serde(default)]
    pub away_rest: Option<RestRecord>,
    /// Signed percentage per side, added straight to the strength scores
    #[serde(default)]
    pub availability: Option<AvailabilityAdjustment>,
    /// Key players whose impact is shared evenly between both sides
    #[serde(default)]
    pub key_players: Option<Vec<PlayerStatRecord>>,
}

impl MatchInputs {
    pub fn new(home: TeamStatRecord, away: TeamStatRecord) -> Self {
        MatchInputs {
            home: Some(home),
            away: Some(away),
            ..Default::default()
        }
    }

    pub fn with_defense(mut self, home: Option<DefensiveRecord>, away: Option<DefensiveRecord>) -> Self {
        self.home_defense = home;
        self.away_defense = away;
        self
    }

    pub fn with_head_to_head(mut self, h2h: Option<HeadToHeadRecord>) -> Self {
        self.head_to_head = h2h;
        self
    }

    pub fn with_rest(mut self, home: Option<RestRecord>, away: Option<RestRecord>) -> Self {
        self.home_rest = home;
        self.away_rest = away;
        self
    }

    pub fn with_availability(mut self, adjustment: AvailabilityAdjustment) -> Self {
        self.availability = Some(adjustment);
        self
    }

    pub fn with_key_players(mut self, players: Vec<PlayerStatRecord>) -> Self {
        self.key_players = Some(players);
        self
    }

    /// Head-to-head from the away side, only when there were meetings
    pub fn away_head_to_head(&self) -> Option<HeadToHeadRecord> {
        self.head_to_head
            .as_ref()
            .filter(|h| h.has_data())
            .map(HeadToHeadRecord::inverted)
    }

    fn validate(&self) -> Result<(&TeamStatRecord, &TeamStatRecord)> {
        let home = self
            .home
            .as_ref()
            .ok_or(CourtsideError::MissingInput { side: Side::Home })?;
        let away = self
            .away
            .as_ref()
            .ok_or(CourtsideError::MissingInput { side: Side::Away })?;

        home.validate()?;
        away.validate()?;

        let optional = [
            ("home defense", self.home_defense.as_ref().map(|d| d.avg_points_allowed)),
            ("away defense", self.away_defense.as_ref().map(|d| d.avg_points_allowed)),
            ("head-to-head", self.head_to_head.as_ref().map(|h| h.team1_win_pct)),
        ];
        for (name, value) in optional {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(CourtsideError::InvalidInput(format!(
                        "{} is not a finite number",
                        name
                    )));
                }
            }
        }

        for player in self.key_players.iter().flatten() {
            player.validate()?;
        }

        Ok((home, away))
    }
}

/// Outcome of a match prediction
///
/// Probabilities are kept unrounded and always sum to 100. While both
/// strengths are non-negative each lies in [0, 100]; after
/// [`apply_availability`](super::apply_availability) one side can fall below 0
/// (and the other above 100) when its adjustment exceeds its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub home_team: String,
    pub away_team: String,
    pub home_win_probability: f64,
    pub away_win_probability: f64,
    pub confidence: ConfidenceLevel,
    pub favored_team: String,
    pub predicted_home_score: i32,
    pub predicted_away_score: i32,
    pub point_spread: f64,
    /// Raw strength scores the probabilities came from
    pub home_strength: f64,
    pub away_strength: f64,
}

impl PredictionResult {
    pub fn favored_side(&self) -> Side {
        if self.away_win_probability > self.home_win_probability {
            Side::Away
        } else {
            Side::Home
        }
    }

    pub fn probability_gap(&self) -> f64 {
        (self.home_win_probability - self.away_win_probability).abs()
    }

    pub fn predicted_total(&self) -> i32 {
        self.predicted_home_score + self.predicted_away_score
    }

    /// Recompute spread and favorite after scores or probabilities change
    pub(crate) fn refresh_derived(&mut self) {
        self.point_spread = (self.predicted_home_score - self.predicted_away_score).abs() as f64;
        self.favored_team = match self.favored_side() {
            Side::Home => self.home_team.clone(),
            Side::Away => self.away_team.clone(),
        };
    }
}

/// Split two strengths into percentages summing to 100; zero total is 50/50
pub fn normalize_probabilities(home: f64, away: f64) -> (f64, f64) {
    let total = home + away;
    if total == 0.0 {
        return (50.0, 50.0);
    }
    let home_prob = home / total * 100.0;
    (home_prob, 100.0 - home_prob)
}

/// Confidence from the gap between the two probabilities
pub fn classify_confidence(gap: f64, config: &PredictionConfig) -> ConfidenceLevel {
    if gap > config.high_confidence_gap {
        ConfidenceLevel::High
    } else if gap > config.medium_confidence_gap {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Scoring average bumped up for clear favorites and down for underdogs
///
/// Halves round to even.
pub fn project_score(base_points: f64, win_probability: f64, config: &PredictionConfig) -> i32 {
    let adjustment = if win_probability > config.favorite_threshold {
        config.score_bump
    } else if win_probability > 50.0 {
        0.0
    } else {
        -config.score_bump
    };
    (base_points + adjustment).round_ties_even() as i32
}

/// Predicts match outcomes from team aggregates
#[derive(Debug, Clone, Default)]
pub struct MatchPredictor {
    scorer: TeamScorer,
    config: PredictionConfig,
}

impl MatchPredictor {
    pub fn new(scorer: TeamScorer, config: PredictionConfig) -> Self {
        MatchPredictor { scorer, config }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(TeamScorer::from_config(config), config.prediction.clone())
    }

    pub fn scorer(&self) -> &TeamScorer {
        &self.scorer
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Predict a match
    ///
    /// Fails with [`CourtsideError::MissingInput`] if either team is absent.
    pub fn predict(&self, inputs: &MatchInputs) -> Result<PredictionResult> {
        let (home, away) = inputs.validate()?;

        let mut home_score = self.scorer.score(
            home,
            inputs.home_defense.as_ref(),
            inputs.head_to_head.as_ref(),
            inputs.home_rest.as_ref(),
        );

        let away_h2h = inputs.away_head_to_head();
        let mut away_score = self.scorer.score(
            away,
            inputs.away_defense.as_ref(),
            away_h2h.as_ref(),
            inputs.away_rest.as_ref(),
        );

        home_score += self.scorer.home_court_bonus(self.config.home_court_bonus);

        // Players are not attributed to a side; each one moves both equally
        if let Some(players) = &inputs.key_players {
            for player in players {
                let impact = self.scorer.player_impact(player);
                home_score += impact * 0.5;
                away_score += impact * 0.5;
            }
        }

        if let Some(adj) = &inputs.availability {
            home_score += adj.home as f64;
            away_score += adj.away as f64;
        }

        log::debug!(
            "{} strength {:.3}, {} strength {:.3}",
            home.team_name,
            home_score,
            away.team_name,
            away_score
        );

        let (home_prob, away_prob) = normalize_probabilities(home_score, away_score);
        let confidence = classify_confidence((home_prob - away_prob).abs(), &self.config);

        let predicted_home_score = project_score(
            home.avg_points_scored.unwrap_or(self.config.base_points),
            home_prob,
            &self.config,
        );
        let predicted_away_score = project_score(
            away.avg_points_scored.unwrap_or(self.config.base_points),
            away_prob,
            &self.config,
        );

        let mut result = PredictionResult {
            home_team: home.team_name.clone(),
            away_team: away.team_name.clone(),
            home_win_probability: home_prob,
            away_win_probability: away_prob,
            confidence,
            favored_team: String::new(),
            predicted_home_score,
            predicted_away_score,
            point_spread: 0.0,
            home_strength: home_score,
            away_strength: away_score,
        };
        result.refresh_derived();

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lakers() -> TeamStatRecord {
        TeamStatRecord::new("Lakers", 60.0, 112.0, 47.5, 36.8)
    }

    fn warriors() -> TeamStatRecord {
        TeamStatRecord::new("Warriors", 55.0, 115.0, 46.2, 38.5)
    }

    #[test]
    fn test_hand_computed_matchup() {
        let predictor = MatchPredictor::default();
        let result = predictor.predict(&MatchInputs::new(lakers(), warriors())).unwrap();

        // 49.5225 + 90 home court vs 50.1025
        let home = 15.0 + 22.0 / 30.0 * 100.0 * 0.18 + 42.15 * 0.15 + 7.5 + 5.0 + 2.5 + 90.0;
        let away = 13.75 + 25.0 / 30.0 * 100.0 * 0.18 + 42.35 * 0.15 + 7.5 + 5.0 + 2.5;
        let expected = home / (home + away) * 100.0;

        assert!((result.home_strength - 139.5225).abs() < 1e-9);
        assert!((result.away_strength - 50.1025).abs() < 1e-9);
        assert!((result.home_win_probability - expected).abs() < 1e-9);
        assert!(result.home_win_probability > 50.0);
        assert!((result.home_win_probability - 73.578).abs() < 1e-3);
        assert_eq!(result.confidence, ConfidenceLevel::High);
        assert_eq!(result.favored_team, "Lakers");
        assert_eq!(result.predicted_home_score, 115);
        assert_eq!(result.predicted_away_score, 112);
        assert_eq!(result.point_spread, 3.0);
    }

    #[test]
    fn test_identical_teams_favor_home() {
        let predictor = MatchPredictor::default();
        let team = TeamStatRecord::new("Mirror", 50.0, 110.0, 46.0, 36.0);
        let mut away = team.clone();
        away.team_name = "Mirror Away".to_string();

        let result = predictor.predict(&MatchInputs::new(team, away)).unwrap();
        assert!(result.home_win_probability > result.away_win_probability);
        assert!((result.home_strength - result.away_strength - 90.0).abs() < 1e-9);
        assert_eq!(result.favored_side(), Side::Home);
    }

    #[test]
    fn test_probabilities_sum_to_100() {
        let predictor = MatchPredictor::default();
        for (win, ppg) in [(0.0, 80.0), (100.0, 130.0), (33.3, 101.7), (72.5, 119.9)] {
            let home = TeamStatRecord::new("H", win, ppg, 44.0, 33.0);
            let away = TeamStatRecord::new("A", 100.0 - win, 230.0 - ppg, 48.0, 39.0);
            let result = predictor.predict(&MatchInputs::new(home, away)).unwrap();
            let sum = result.home_win_probability + result.away_win_probability;
            assert!((sum - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_missing_team_fails_fast() {
        let predictor = MatchPredictor::default();

        let inputs = MatchInputs {
            away: Some(warriors()),
            ..Default::default()
        };
        assert!(matches!(
            predictor.predict(&inputs),
            Err(CourtsideError::MissingInput { side: Side::Home })
        ));

        let inputs = MatchInputs {
            home: Some(lakers()),
            ..Default::default()
        };
        assert!(matches!(
            predictor.predict(&inputs),
            Err(CourtsideError::MissingInput { side: Side::Away })
        ));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let predictor = MatchPredictor::default();
        let inputs = MatchInputs::new(lakers(), warriors())
            .with_defense(Some(DefensiveRecord::new(f64::INFINITY)), None);
        assert!(matches!(
            predictor.predict(&inputs),
            Err(CourtsideError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_finite_key_player_rejected() {
        let predictor = MatchPredictor::default();
        let mut star = PlayerStatRecord::named("Star");
        star.avg_points = 30.0;
        star.avg_fg_pct = Some(f64::NAN);

        let inputs = MatchInputs::new(lakers(), warriors()).with_key_players(vec![star]);
        assert!(matches!(
            predictor.predict(&inputs),
            Err(CourtsideError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_head_to_head_inverted_for_away() {
        let predictor = MatchPredictor::default();
        let team = TeamStatRecord::new("Even", 50.0, 110.0, 46.0, 36.0);
        let base = predictor
            .predict(&MatchInputs::new(team.clone(), team.clone()))
            .unwrap();

        let inputs = MatchInputs::new(team.clone(), team)
            .with_head_to_head(Some(HeadToHeadRecord::new(5, 80.0)));
        let result = predictor.predict(&inputs).unwrap();

        // Home gains (80-50)*0.1, away loses (50-20)*0.1
        assert!((result.home_strength - base.home_strength - 3.0).abs() < 1e-9);
        assert!((base.away_strength - result.away_strength - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_game_head_to_head_not_inverted() {
        let inputs = MatchInputs::new(lakers(), warriors())
            .with_head_to_head(Some(HeadToHeadRecord::new(0, 0.0)));
        assert!(inputs.away_head_to_head().is_none());
    }

    #[test]
    fn test_rest_and_defense_per_side() {
        let predictor = MatchPredictor::default();
        let base = predictor.predict(&MatchInputs::new(lakers(), warriors())).unwrap();

        let inputs = MatchInputs::new(lakers(), warriors())
            .with_rest(None, Some(RestRecord::new(-8)))
            .with_defense(Some(DefensiveRecord::new(105.0)), None);
        let result = predictor.predict(&inputs).unwrap();

        assert!(result.home_win_probability > base.home_win_probability);
        assert!((base.away_strength - result.away_strength - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_availability_added_to_strength() {
        let predictor = MatchPredictor::default();
        let base = predictor.predict(&MatchInputs::new(lakers(), warriors())).unwrap();

        let inputs = MatchInputs::new(lakers(), warriors())
            .with_availability(AvailabilityAdjustment { home: -10, away: -2 });
        let result = predictor.predict(&inputs).unwrap();

        assert!((base.home_strength - result.home_strength - 10.0).abs() < 1e-9);
        assert!((base.away_strength - result.away_strength - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_key_players_shared_evenly() {
        let predictor = MatchPredictor::default();
        let base = predictor.predict(&MatchInputs::new(lakers(), warriors())).unwrap();

        let mut star = PlayerStatRecord::named("Star");
        star.avg_points = 35.0;
        star.avg_fg_pct = Some(50.0);
        let impact = predictor.scorer().player_impact(&star);

        let inputs = MatchInputs::new(lakers(), warriors()).with_key_players(vec![star]);
        let result = predictor.predict(&inputs).unwrap();

        assert!((result.home_strength - base.home_strength - impact * 0.5).abs() < 1e-9);
        assert!((result.away_strength - base.away_strength - impact * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_missing_scoring_average_projects_base_points() {
        let predictor = MatchPredictor::default();
        let result = predictor
            .predict(&MatchInputs::new(
                TeamStatRecord::named("Home"),
                TeamStatRecord::named("Away"),
            ))
            .unwrap();

        // Home is a heavy favorite from the court bonus alone
        assert_eq!(result.predicted_home_score, 108);
        assert_eq!(result.predicted_away_score, 102);
    }

    #[test]
    fn test_zero_total_is_even() {
        assert_eq!(normalize_probabilities(0.0, 0.0), (50.0, 50.0));
        let (h, a) = normalize_probabilities(30.0, 10.0);
        assert_eq!(h, 75.0);
        assert_eq!(a, 25.0);
    }

    #[test]
    fn test_confidence_tiers_monotonic() {
        let config = PredictionConfig::default();
        assert_eq!(classify_confidence(5.0, &config), ConfidenceLevel::Low);
        assert_eq!(classify_confidence(10.0, &config), ConfidenceLevel::Low);
        assert_eq!(classify_confidence(10.5, &config), ConfidenceLevel::Medium);
        assert_eq!(classify_confidence(20.0, &config), ConfidenceLevel::Medium);
        assert_eq!(classify_confidence(20.1, &config), ConfidenceLevel::High);

        let mut previous = ConfidenceLevel::Low;
        for step in 0..=1000 {
            let tier = classify_confidence(step as f64 * 0.1, &config);
            assert!(tier >= previous);
            previous = tier;
        }
    }

    #[test]
    fn test_project_score() {
        let config = PredictionConfig::default();
        assert_eq!(project_score(110.0, 65.0, &config), 113);
        assert_eq!(project_score(110.0, 60.0, &config), 110);
        assert_eq!(project_score(110.0, 50.0, &config), 107);
        // Halves round to even
        assert_eq!(project_score(112.5, 55.0, &config), 112);
        assert_eq!(project_score(113.5, 55.0, &config), 114);
    }

    #[test]
    fn test_deterministic() {
        let predictor = MatchPredictor::default();
        let inputs = MatchInputs::new(lakers(), warriors())
            .with_head_to_head(Some(HeadToHeadRecord::new(3, 33.3)))
            .with_rest(Some(RestRecord::new(2)), Some(RestRecord::new(-3)));

        let a = predictor.predict(&inputs).unwrap();
        let b = predictor.predict(&inputs).unwrap();
        assert_eq!(a.home_win_probability.to_bits(), b.home_win_probability.to_bits());
        assert_eq!(a, b);
    }
}
