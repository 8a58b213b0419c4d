//! Motor de consenso do oráculo.
//!
//! Ponto de entrada único do núcleo: `resolve(match_id, team_a, team_b, sources)`.
//! Síncrono, sem estado mutável compartilhado; pode ser chamado de várias
//! tarefas ao mesmo tempo.

use std::sync::Arc;

use crate::types::config::ConsensusConfig;
use crate::types::matches::{SourceResult, Team};
use crate::types::responses::AggregatedResult;

use super::aggregator::ResultAggregator;
use super::clock::{Clock, SystemClock};
use super::rules::{create_rule, ConsensusRule, QuorumRule};

/// Motor de consenso.
///
/// Responsável por:
/// - Aplicar a regra de quórum aos relatórios
/// - Montar o resultado agregado
/// - Carimbar a resolução com o relógio injetado
pub struct ConsensusEngine {
    rule: Box<dyn ConsensusRule>,
    clock: Arc<dyn Clock>,
}

impl ConsensusEngine {
    /// Cria um novo motor de consenso.
    pub fn new(config: ConsensusConfig) -> Self {
        Self {
            rule: create_rule(&config),
            clock: Arc::new(SystemClock),
        }
    }

    /// Cria um motor com quórum explícito.
    pub fn with_consensus_min(consensus_min: usize) -> Self {
        Self {
            rule: Box::new(QuorumRule::new(consensus_min)),
            clock: Arc::new(SystemClock),
        }
    }

    /// Substitui o relógio.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Resolve uma partida a partir de um snapshot de relatórios.
    pub fn resolve(
        &self,
        match_id: &str,
        team_a: Team,
        team_b: Team,
        sources: Vec<SourceResult>,
    ) -> AggregatedResult {
        ResultAggregator::aggregate(
            match_id,
            team_a,
            team_b,
            sources,
            self.rule.as_ref(),
            self.clock.as_ref(),
        )
    }

    /// Quórum em uso.
    pub fn consensus_min(&self) -> usize {
        self.rule.min_required()
    }

    /// Retorna o nome da regra de consenso atual.
    pub fn rule_name(&self) -> &str {
        self.rule.name()
    }

    /// Atualiza a regra de consenso.
    pub fn set_rule(&mut self, rule: Box<dyn ConsensusRule>) {
        self.rule = rule;
    }
}

impl Default for ConsensusEngine {
    fn default() -> Self {
        Self::new(ConsensusConfig::default())
    }
}
