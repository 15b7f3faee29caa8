//! Prediction
//!
//! Match outcomes, player availability, player outlooks and reporting.

pub mod analysis;
pub mod availability;
pub mod insights;
pub mod matchup;
pub mod performance;
pub mod report;

pub use analysis::{MatchupAnalyzer, MatchupReport};
pub use availability::{apply_availability, AvailabilityAdjustment, AvailabilityReport, ImpactLevel, PlayerStatus};
pub use insights::Insight;
pub use matchup::{MatchInputs, MatchPredictor, PredictionResult};
pub use performance::{Outlook, PerformancePrediction, PerformancePredictor};
