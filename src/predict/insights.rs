//! Betting and fantasy insights derived from a prediction

use serde::{Deserialize, Serialize};
use std::fmt;

use super::matchup::PredictionResult;

const STRONG_FAVORITE_GAP: f64 = 20.0;
const CLOSE_GAME_SPREAD: f64 = 5.0;
const HIGH_SCORING_TOTAL: i32 = 220;
const LOW_SCORING_TOTAL: i32 = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Insight {
    StrongFavorite { team: String, probability: f64 },
    CloseGame,
    HighScoring,
    LowScoring,
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::StrongFavorite { team, probability } => {
                write!(f, "Strong favorite: {} ({:.2}% win probability)", team, probability)
            }
            Insight::CloseGame => write!(f, "Expected to be a close game - potential for overtime"),
            Insight::HighScoring => write!(f, "High-scoring game expected - good for Over bets"),
            Insight::LowScoring => write!(f, "Low-scoring game expected - defensive battle"),
        }
    }
}

pub fn generate(prediction: &PredictionResult) -> Vec<Insight> {
    let mut insights = Vec::new();

    if prediction.probability_gap() > STRONG_FAVORITE_GAP {
        insights.push(Insight::StrongFavorite {
            team: prediction.favored_team.clone(),
            probability: prediction
                .home_win_probability
                .max(prediction.away_win_probability),
        });
    }

    if prediction.point_spread < CLOSE_GAME_SPREAD {
        insights.push(Insight::CloseGame);
    }

    let total = prediction.predicted_total();
    if total > HIGH_SCORING_TOTAL {
        insights.push(Insight::HighScoring);
    } else if total < LOW_SCORING_TOTAL {
        insights.push(Insight::LowScoring);
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfidenceLevel;

    fn make_prediction(home_prob: f64, home_score: i32, away_score: i32) -> PredictionResult {
        let mut prediction = PredictionResult {
            home_team: "Celtics".to_string(),
            away_team: "Heat".to_string(),
            home_win_probability: home_prob,
            away_win_probability: 100.0 - home_prob,
            confidence: ConfidenceLevel::Low,
            favored_team: String::new(),
            predicted_home_score: home_score,
            predicted_away_score: away_score,
            point_spread: 0.0,
            home_strength: 0.0,
            away_strength: 0.0,
        };
        prediction.refresh_derived();
        prediction
    }

    #[test]
    fn test_strong_favorite_and_high_scoring() {
        let insights = generate(&make_prediction(75.0, 121, 108));
        assert_eq!(
            insights,
            vec![
                Insight::StrongFavorite {
                    team: "Celtics".to_string(),
                    probability: 75.0
                },
                Insight::HighScoring,
            ]
        );
    }

    #[test]
    fn test_close_low_scoring() {
        let insights = generate(&make_prediction(52.0, 99, 97));
        assert_eq!(insights, vec![Insight::CloseGame, Insight::LowScoring]);
    }

    #[test]
    fn test_away_favorite_probability() {
        let insights = generate(&make_prediction(30.0, 104, 106));
        assert!(matches!(
            &insights[0],
            Insight::StrongFavorite { team, probability } if team == "Heat" && *probability == 70.0
        ));
    }

    #[test]
    fn test_unremarkable_game() {
        assert!(generate(&make_prediction(58.0, 110, 104)).is_empty());
    }
}
