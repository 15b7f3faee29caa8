//! Weighted team strength scoring
//!
//! Each factor is brought onto a 0-100 scale, multiplied by its weight and
//! summed. Missing optional data flattens a factor to neutral; it never removes
//! the factor's contribution.

use serde::{Deserialize, Serialize};

use crate::features::{DefensiveRecord, HeadToHeadRecord, PlayerStatRecord, RestRecord, TeamStatRecord};
use crate::{Config, Factor, FactorWeights, Normalization};

/// One factor's share of a team score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: Factor,
    /// Normalized 0-100 value (offense and defense are clamped)
    pub sub_score: f64,
    pub weight: f64,
    /// True when the sub-score is the neutral stand-in for missing data
    pub neutral: bool,
}

impl FactorContribution {
    pub fn value(&self) -> f64 {
        self.sub_score * self.weight
    }
}

/// Per-factor view of a team score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub team_name: String,
    pub contributions: Vec<FactorContribution>,
}

impl ScoreBreakdown {
    /// Sum of contributions, in factor order
    pub fn total(&self) -> f64 {
        self.contributions
            .iter()
            .fold(0.0, |acc, c| acc + c.value())
    }

    pub fn get(&self, factor: Factor) -> Option<&FactorContribution> {
        self.contributions.iter().find(|c| c.factor == factor)
    }
}

/// Scores one team from its aggregates
#[derive(Debug, Clone, Default)]
pub struct TeamScorer {
    weights: FactorWeights,
    normalization: Normalization,
}

impl TeamScorer {
    pub fn new(weights: FactorWeights, normalization: Normalization) -> Self {
        TeamScorer {
            weights,
            normalization,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.weights.clone(), config.normalization.clone())
    }

    pub fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    pub fn normalization(&self) -> &Normalization {
        &self.normalization
    }

    /// Strength score for a team
    pub fn score(
        &self,
        team: &TeamStatRecord,
        defense: Option<&DefensiveRecord>,
        h2h: Option<&HeadToHeadRecord>,
        rest: Option<&RestRecord>,
    ) -> f64 {
        self.breakdown(team, defense, h2h, rest).total()
    }

    /// Per-factor contributions behind [`TeamScorer::score`]
    pub fn breakdown(
        &self,
        team: &TeamStatRecord,
        defense: Option<&DefensiveRecord>,
        h2h: Option<&HeadToHeadRecord>,
        rest: Option<&RestRecord>,
    ) -> ScoreBreakdown {
        let norm = &self.normalization;
        let neutral = norm.neutral;

        let form = team.win_percentage_or(norm);
        let offense = norm.offense(team.points_scored_or(norm));
        let shooting = norm.shooting(team.fg_pct_or(norm), team.fg3_pct_or(norm));

        let defense_score = match defense {
            Some(d) => Some(norm.defense(d.avg_points_allowed)),
            None => {
                log::debug!("{}: no defensive data, using neutral", team.team_name);
                None
            }
        };

        let h2h_score = match h2h {
            Some(h) if h.has_data() => Some(h.team1_win_pct),
            _ => {
                log::debug!("{}: no head-to-head history, using neutral", team.team_name);
                None
            }
        };

        let rest_score = match rest {
            Some(r) => Some(norm.rest(r.fatigue_factor)),
            None => {
                log::debug!("{}: no rest data, using neutral", team.team_name);
                None
            }
        };

        let contributions = vec![
            self.contribution(Factor::RecentForm, Some(form), neutral),
            self.contribution(Factor::OffensivePower, Some(offense), neutral),
            self.contribution(Factor::ShootingEfficiency, Some(shooting), neutral),
            self.contribution(Factor::DefensiveStrength, defense_score, neutral),
            self.contribution(Factor::HeadToHead, h2h_score, neutral),
            self.contribution(Factor::RestAdvantage, rest_score, neutral),
        ];

        ScoreBreakdown {
            team_name: team.team_name.clone(),
            contributions,
        }
    }

    fn contribution(&self, factor: Factor, sub_score: Option<f64>, neutral: f64) -> FactorContribution {
        FactorContribution {
            factor,
            sub_score: sub_score.unwrap_or(neutral),
            weight: self.weights.get(factor),
            neutral: sub_score.is_none(),
        }
    }

    /// Additive home court term: `bonus * home_court_weight * 100`
    pub fn home_court_bonus(&self, bonus: f64) -> f64 {
        bonus * self.weights.home_court * 100.0
    }

    /// Individual impact of a key player, already scaled by the player weight
    ///
    /// Points (capped at 35 PPG), shooting and an all-around blend of
    /// rebounds, assists, steals and blocks.
    pub fn player_impact(&self, player: &PlayerStatRecord) -> f64 {
        let points_score = (player.avg_points / 35.0 * 100.0).min(100.0);
        let efficiency_score = player.avg_fg_pct.unwrap_or(self.normalization.default_fg_pct);
        let all_around_score = player.avg_rebounds / 12.0 * 30.0
            + player.avg_assists / 10.0 * 30.0
            + player.avg_steals / 2.0 * 20.0
            + player.avg_blocks / 2.0 * 20.0;

        let impact = points_score * 0.4 + efficiency_score * 0.3 + all_around_score * 0.3;
        impact * self.weights.player_impact
    }
}
