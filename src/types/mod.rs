//! Tipos compartilhados.

pub mod config;
pub mod errors;
pub mod matches;
pub mod requests;
pub mod responses;

pub use matches::{Match, MatchLifecycle, MatchScore, MatchStatus, SourceResult, Team, Winner};
pub use responses::{AggregatedResult, FinalWinner, ResolutionStatus};
