//! Fontes de resultado do oráculo.
//!
//! Implementações simuladas dos provedores de resultado de Valorant:
//! PandaScore, VLR.gg e Liquipedia. Todas leem do livro de partidas.

mod base;
mod collector;
mod liquipedia;
mod pandascore;
mod vlr;

pub use base::{report_from, ResultSource};
pub use collector::SourceCollector;
pub use liquipedia::LiquipediaSource;
pub use pandascore::PandaScoreSource;
pub use vlr::VlrSource;
