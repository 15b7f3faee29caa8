//! Input records and their builders
//!
//! Converts raw game logs into the aggregates the scorer consumes.

pub mod defense;
pub mod head_to_head;
pub mod player;
pub mod rest;
pub mod team_stats;

pub use defense::DefensiveRecord;
pub use head_to_head::HeadToHeadRecord;
pub use player::{PlayerGameLine, PlayerStatRecord};
pub use rest::RestRecord;
pub use team_stats::{TeamGameLine, TeamStatRecord};
