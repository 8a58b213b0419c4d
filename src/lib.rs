//! # EcoRound Oracle
//!
//! Oráculo de resultados de partidas de Valorant por consenso de fontes.
//!
//! Várias fontes independentes (PandaScore, VLR.gg, Liquipedia) reportam o
//! resultado de uma partida; o oráculo reconcilia os relatórios em um único
//! resultado confiável, ou marca a partida como em disputa.
//!
//! ## Módulos
//!
//! - [`consensus`] - Contagem de votos, regra de quórum e resolução
//! - [`sources`] - Fontes de resultado simuladas e coleta concorrente
//! - [`book`] - Livro de partidas em memória
//! - [`oracle`] - Fachada que liga livro, fontes e consenso
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Tipos compartilhados

pub mod book;
#[cfg(feature = "cli")]
pub mod cli;
pub mod consensus;
pub mod oracle;
pub mod sources;
pub mod types;

pub use types::config::Config;
pub use types::errors::{OracleError, OracleResult};
