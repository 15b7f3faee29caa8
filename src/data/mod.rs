//! Data access
//!
//! Stats providers, the fallback store and team name resolution.

pub mod directory;
pub mod fallback;
pub mod provider;

pub use directory::{TeamDirectory, TeamEntry};
pub use fallback::{EmptyProvider, FallbackProvider, FallbackStore};
pub use provider::{InMemoryProvider, StatsProvider, StatsSnapshot};
