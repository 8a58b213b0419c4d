//! Livro de partidas.
//!
//! Guarda as partidas e o último resultado de cada fonte, em memória.
//! É o lado administrativo que alimenta as fontes simuladas.

mod store;

pub use store::MatchBook;
