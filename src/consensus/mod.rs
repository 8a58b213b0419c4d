//! Motor de consenso do oráculo.
//!
//! Reconcilia os relatórios de várias fontes em um resultado único.
//!
//! ## Regra de Consenso
//!
//! - Só relatórios marcados como confiáveis votam
//! - Um lado precisa de pelo menos [`CONSENSUS_MIN`] votos (quórum absoluto)
//! - Empate: vence o primeiro lado na ordem canônica `[TeamA, TeamB]`
//! - Sem quórum, a partida fica `disputed`
//!
//! ## Exemplo
//!
//! ```rust,ignore
//! use ecoround::consensus::ConsensusEngine;
//!
//! let engine = ConsensusEngine::default();
//! let result = engine.resolve("42", team_a, team_b, reports);
//! if result.consensus {
//!     println!("Vencedor: {}", result.final_winner);
//! }
//! ```

mod aggregator;
mod clock;
mod engine;
mod rules;
mod tally;

pub use aggregator::ResultAggregator;
pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::ConsensusEngine;
pub use rules::{create_rule, ConsensusRule, QuorumRule, Verdict, CONSENSUS_MIN};
pub use tally::VoteTally;
