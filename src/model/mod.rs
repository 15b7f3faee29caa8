//! Scoring model
//!
//! Fixed-weight team strength scoring.

pub mod scorer;
pub mod weights;

pub use scorer::{ScoreBreakdown, TeamScorer};
pub use weights::{Factor, FactorWeights, Normalization};
