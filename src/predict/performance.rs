//! Individual player outlook

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features::PlayerStatRecord;
use crate::{ConfidenceLevel, PerformanceConfig};

/// Consistency assumed when there is too little to measure it
const NEUTRAL_CONSISTENCY: f64 = 50.0;

/// Qualitative expectation for a player's next game
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outlook {
    Poor,
    Average,
    Good,
    Great,
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outlook::Great => write!(f, "GREAT GAME expected"),
            Outlook::Good => write!(f, "GOOD GAME expected"),
            Outlook::Average => write!(f, "AVERAGE GAME expected"),
            Outlook::Poor => write!(f, "POOR GAME expected"),
        }
    }
}

/// Projected performance for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePrediction {
    pub player_name: String,
    /// Unbounded composite; may fall outside 0-100
    pub performance_score: f64,
    pub outlook: Outlook,
    pub confidence: ConfidenceLevel,
    pub expected_points_range: (f64, f64),
    /// 0-100
    pub consistency_rating: f64,
}

/// Projects a player's next game from recent aggregates
#[derive(Debug, Clone, Default)]
pub struct PerformancePredictor {
    config: PerformanceConfig,
}

impl PerformancePredictor {
    pub fn new(config: PerformanceConfig) -> Self {
        PerformancePredictor { config }
    }

    /// None when there is no player record
    pub fn predict(&self, player: Option<&PlayerStatRecord>) -> Option<PerformancePrediction> {
        let player = player?;

        let consistency = self.consistency(player);
        let fg_pct = player.avg_fg_pct.unwrap_or(0.0);
        let performance_score = player.avg_points / 30.0 * 40.0
            + fg_pct
            + consistency * 0.20
            + (player.avg_plus_minus + 10.0) / 20.0 * 20.0;

        let (outlook, confidence) = self.classify(performance_score);
        let band = self.config.points_band;

        Some(PerformancePrediction {
            player_name: player.player_name.clone(),
            performance_score,
            outlook,
            confidence,
            expected_points_range: ((player.avg_points - band).max(0.0), player.avg_points + band),
            consistency_rating: consistency,
        })
    }

    /// 100 minus the recent scoring range as a percentage of the high game
    pub fn consistency(&self, player: &PlayerStatRecord) -> f64 {
        if player.recent_games.len() < self.config.min_games {
            return NEUTRAL_CONSISTENCY;
        }

        let points = player.recent_points(self.config.consistency_window);
        let max = points.iter().copied().fold(f64::MIN, f64::max);
        let min = points.iter().copied().fold(f64::MAX, f64::min);

        if max > 0.0 {
            100.0 - (max - min) / max * 100.0
        } else {
            NEUTRAL_CONSISTENCY
        }
    }

    fn classify(&self, score: f64) -> (Outlook, ConfidenceLevel) {
        if score > self.config.great_threshold {
            (Outlook::Great, ConfidenceLevel::High)
        } else if score > self.config.good_threshold {
            (Outlook::Good, ConfidenceLevel::Medium)
        } else if score > self.config.average_threshold {
            (Outlook::Average, ConfidenceLevel::Medium)
        } else {
            (Outlook::Poor, ConfidenceLevel::Low)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::PlayerGameLine;

    fn make_player(points: f64, fg_pct: f64, plus_minus: f64, recent: &[u32]) -> PlayerStatRecord {
        PlayerStatRecord {
            player_name: "Test Player".to_string(),
            avg_points: points,
            avg_fg_pct: Some(fg_pct),
            avg_plus_minus: plus_minus,
            recent_games: recent
                .iter()
                .map(|&p| PlayerGameLine {
                    points: p,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_player() {
        assert!(PerformancePredictor::default().predict(None).is_none());
    }

    #[test]
    fn test_floor_player_is_poor() {
        let player = make_player(0.0, 0.0, -10.0, &[0, 0]);
        let prediction = PerformancePredictor::default().predict(Some(&player)).unwrap();

        assert_eq!(prediction.consistency_rating, 50.0);
        assert!((prediction.performance_score - 10.0).abs() < 1e-9);
        assert_eq!(prediction.outlook, Outlook::Poor);
        assert_eq!(prediction.confidence, ConfidenceLevel::Low);
        assert_eq!(prediction.expected_points_range, (0.0, 5.0));
    }

    #[test]
    fn test_star_is_great_and_unclamped() {
        let player = make_player(30.0, 52.0, 10.0, &[30, 30, 30]);
        let prediction = PerformancePredictor::default().predict(Some(&player)).unwrap();

        // 40 + 52 + 20 + 20
        assert!((prediction.performance_score - 132.0).abs() < 1e-9);
        assert_eq!(prediction.outlook, Outlook::Great);
        assert_eq!(prediction.confidence, ConfidenceLevel::High);
        assert_eq!(prediction.expected_points_range, (25.0, 35.0));
    }

    #[test]
    fn test_consistency_uses_five_most_recent() {
        let player = make_player(20.0, 45.0, 0.0, &[20, 25, 15, 20, 25, 0, 0]);
        let consistency = PerformancePredictor::default().consistency(&player);

        // max 25, min 15 over the first five
        assert!((consistency - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_consistency_all_zero_is_neutral() {
        let player = make_player(0.0, 0.0, 0.0, &[0, 0, 0]);
        assert_eq!(PerformancePredictor::default().consistency(&player), 50.0);
    }

    #[test]
    fn test_outlook_thresholds() {
        let predictor = PerformancePredictor::default();
        // Neutral consistency (10) and +/- 0 (10) with 0 points: score = fg + 20
        let cases = [
            (51.0, Outlook::Great),
            (50.0, Outlook::Good),
            (30.5, Outlook::Good),
            (30.0, Outlook::Average),
            (10.5, Outlook::Average),
            (10.0, Outlook::Poor),
        ];
        for (fg, expected) in cases {
            let player = make_player(0.0, fg, 0.0, &[]);
            let prediction = predictor.predict(Some(&player)).unwrap();
            assert_eq!(prediction.outlook, expected, "fg {}", fg);
        }
    }

    #[test]
    fn test_negative_score_preserved() {
        let player = make_player(0.0, 0.0, -40.0, &[]);
        let prediction = PerformancePredictor::default().predict(Some(&player)).unwrap();
        // 0 + 0 + 10 - 30
        assert!((prediction.performance_score + 20.0).abs() < 1e-9);
    }
}
