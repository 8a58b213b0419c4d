//! Oráculo de resultados.
//!
//! Junta as peças: busca a partida no livro, coleta os relatórios das
//! fontes e entrega o snapshot ao motor de consenso.

use std::sync::Arc;

use crate::book::MatchBook;
use crate::consensus::{Clock, ConsensusEngine, SystemClock};
use crate::sources::SourceCollector;
use crate::types::config::Config;
use crate::types::responses::AggregatedResult;
use crate::OracleResult;

/// Oráculo de partidas.
pub struct MatchOracle {
    book: Arc<MatchBook>,
    collector: SourceCollector,
    engine: ConsensusEngine,
}

impl MatchOracle {
    /// Cria o oráculo com o relógio do sistema.
    pub fn new(config: &Config, book: Arc<MatchBook>) -> OracleResult<Self> {
        Self::with_clock(config, book, Arc::new(SystemClock))
    }

    /// Cria o oráculo com um relógio explícito.
    pub fn with_clock(config: &Config, book: Arc<MatchBook>, clock: Arc<dyn Clock>) -> OracleResult<Self> {
        config.validate()?;

        let collector = SourceCollector::from_config(config, book.clone(), clock.clone());
        let engine = ConsensusEngine::new(config.consensus.clone()).with_clock(clock);

        tracing::debug!(
            sources = ?collector.source_names(),
            consensus_min = engine.consensus_min(),
            "Oráculo configurado"
        );

        Ok(Self {
            book,
            collector,
            engine,
        })
    }

    /// Monta o oráculo a partir de partes já construídas.
    pub fn from_parts(book: Arc<MatchBook>, collector: SourceCollector, engine: ConsensusEngine) -> Self {
        Self {
            book,
            collector,
            engine,
        }
    }

    /// Resolve uma partida registrada no livro.
    pub async fn resolve_match(&self, match_id: &str) -> OracleResult<AggregatedResult> {
        let record = self.book.get_match(match_id).await?;
        let sources = self.collector.collect(match_id).await;

        tracing::debug!(
            match_id,
            received = sources.len(),
            queried = self.collector.len(),
            "Relatórios coletados"
        );

        let result = self
            .engine
            .resolve(&record.id, record.team_a, record.team_b, sources);

        if result.is_resolved() {
            tracing::info!(
                match_id,
                winner = %result.final_winner,
                agreed = result.agreed_sources,
                "Partida resolvida"
            );
        } else {
            tracing::info!(
                match_id,
                agreed = result.agreed_sources,
                consensus_min = result.consensus_min,
                "Partida em disputa"
            );
        }

        Ok(result)
    }

    pub fn book(&self) -> &Arc<MatchBook> {
        &self.book
    }

    pub fn collector(&self) -> &SourceCollector {
        &self.collector
    }
}
