//! Core data models for the league engine.

mod franchise;
mod ids;
mod league;
mod lineup;
mod matchup;
mod record;
mod team;
mod week;
mod weekly_stats;

pub use franchise::*;
pub use ids::*;
pub use league::*;
pub use lineup::*;
pub use matchup::*;
pub use record::*;
pub use team::*;
pub use week::*;
pub use weekly_stats::*;
