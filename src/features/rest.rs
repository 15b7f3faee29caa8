//! Rest days and back-to-back detection
//!
//! Turns a team's recent game dates into a signed fatigue adjustment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rest assumed when there are not enough games to measure it
const DEFAULT_REST_DAYS: i64 = 3;

/// Rest state for one team going into a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestRecord {
    /// Signed adjustment, -8 (no rest) to +2 (well rested)
    pub fatigue_factor: i32,
    #[serde(default)]
    pub rest_days: Option<i64>,
    #[serde(default)]
    pub is_back_to_back: bool,
    #[serde(default)]
    pub days_between_last_two: Option<i64>,
    #[serde(default)]
    pub last_game_date: Option<NaiveDate>,
}

impl RestRecord {
    pub fn new(fatigue_factor: i32) -> Self {
        RestRecord {
            fatigue_factor,
            rest_days: None,
            is_back_to_back: false,
            days_between_last_two: None,
            last_game_date: None,
        }
    }

    /// Derive rest from past game dates (any order) relative to `today`
    ///
    /// With fewer than two games the team is assumed rested and neutral.
    pub fn from_schedule(game_dates: &[NaiveDate], today: NaiveDate) -> Self {
        let mut dates: Vec<NaiveDate> = game_dates.to_vec();
        dates.sort_unstable_by(|a, b| b.cmp(a));

        if dates.len() < 2 {
            return RestRecord {
                fatigue_factor: 0,
                rest_days: Some(DEFAULT_REST_DAYS),
                is_back_to_back: false,
                days_between_last_two: None,
                last_game_date: dates.first().copied(),
            };
        }

        let last = dates[0];
        let previous = dates[1];
        let days_since_last = (today - last).num_days();
        let days_between = (last - previous).num_days();

        RestRecord {
            fatigue_factor: Self::fatigue_for(days_since_last),
            rest_days: Some(days_since_last),
            is_back_to_back: days_between <= 1,
            days_between_last_two: Some(days_between),
            last_game_date: Some(last),
        }
    }

    /// 0 days: -8, 1 day: -3, 2 days: 0, anything else: +2
    ///
    /// A negative count (reference date before the last game) lands in the
    /// rested bucket.
    pub fn fatigue_for(days_since_last: i64) -> i32 {
        match days_since_last {
            0 => -8,
            1 => -3,
            2 => 0,
            _ => 2,
        }
    }

    pub fn is_fatigued(&self) -> bool {
        self.fatigue_factor < 0
    }

    pub fn is_well_rested(&self) -> bool {
        self.fatigue_factor > 0
    }
}
