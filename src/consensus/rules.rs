//! Regras de consenso do oráculo.
//!
//! A regra padrão é o quórum absoluto: um lado precisa de pelo menos
//! `min_agreeing` relatórios confiáveis, independente de quantas fontes
//! responderam.

use crate::types::config::ConsensusConfig;
use crate::types::matches::Winner;

use super::tally::VoteTally;

/// Quórum padrão: 2 fontes concordando.
pub const CONSENSUS_MIN: usize = 2;

/// Veredito de uma regra sobre uma contagem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Lado líder (desempate em ordem canônica).
    pub leader: Option<Winner>,

    /// Votos do líder.
    pub agreed: usize,

    /// Se o quórum foi alcançado.
    pub reached: bool,
}

/// Trait para regras de consenso.
pub trait ConsensusRule: Send + Sync {
    /// Nome da regra.
    fn name(&self) -> &str;

    /// Número mínimo de votos concordantes para resolver.
    fn min_required(&self) -> usize;

    /// Avalia a contagem e retorna o veredito.
    fn evaluate(&self, tally: &VoteTally) -> Verdict;
}

/// Quórum absoluto.
///
/// Com uma única fonte a partida fica sempre em disputa; com três fontes
/// divididas 1-1 e uma sem confiança, também.
#[derive(Debug, Clone, Copy)]
pub struct QuorumRule {
    min_agreeing: usize,
}

impl QuorumRule {
    pub fn new(min_agreeing: usize) -> Self {
        Self { min_agreeing }
    }
}

impl Default for QuorumRule {
    fn default() -> Self {
        Self::new(CONSENSUS_MIN)
    }
}

impl ConsensusRule for QuorumRule {
    fn name(&self) -> &str {
        "quorum"
    }

    fn min_required(&self) -> usize {
        self.min_agreeing
    }

    fn evaluate(&self, tally: &VoteTally) -> Verdict {
        let (leader, agreed) = match tally.leader() {
            Some((winner, count)) => (Some(winner), count),
            None => (None, 0),
        };

        Verdict {
            leader,
            agreed,
            reached: leader.is_some() && agreed >= self.min_agreeing,
        }
    }
}

/// Cria a regra de consenso a partir da configuração.
pub fn create_rule(config: &ConsensusConfig) -> Box<dyn ConsensusRule> {
    Box::new(QuorumRule::new(config.consensus_min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::matches::SourceResult;
    use chrono::Utc;

    fn tally(votes: &[Winner]) -> VoteTally {
        let sources: Vec<_> = votes
            .iter()
            .enumerate()
            .map(|(i, w)| SourceResult::ended(format!("feed-{}", i), *w, Utc::now()))
            .collect();
        VoteTally::from_sources(&sources)
    }

    #[test]
    fn test_two_of_three_reaches_quorum() {
        let rule = QuorumRule::default();
        let verdict = rule.evaluate(&tally(&[Winner::TeamA, Winner::TeamB, Winner::TeamA]));

        assert!(verdict.reached);
        assert_eq!(verdict.leader, Some(Winner::TeamA));
        assert_eq!(verdict.agreed, 2);
    }

    #[test]
    fn test_single_vote_never_reaches_quorum() {
        let rule = QuorumRule::default();
        let verdict = rule.evaluate(&tally(&[Winner::TeamB]));

        assert!(!verdict.reached);
        assert_eq!(verdict.leader, Some(Winner::TeamB));
        assert_eq!(verdict.agreed, 1);
    }

    #[test]
    fn test_empty_tally() {
        let verdict = QuorumRule::default().evaluate(&VoteTally::default());
        assert_eq!(
            verdict,
            Verdict {
                leader: None,
                agreed: 0,
                reached: false
            }
        );
    }

    #[test]
    fn test_zero_threshold_still_needs_a_vote() {
        let verdict = QuorumRule::new(0).evaluate(&VoteTally::default());
        assert!(!verdict.reached);
    }

    #[test]
    fn test_higher_threshold() {
        let rule = QuorumRule::new(3);
        assert!(!rule.evaluate(&tally(&[Winner::TeamA, Winner::TeamA])).reached);
        assert!(
            rule.evaluate(&tally(&[Winner::TeamA, Winner::TeamA, Winner::TeamA]))
                .reached
        );
    }

    #[test]
    fn test_create_rule() {
        let rule = create_rule(&ConsensusConfig::default());
        assert_eq!(rule.name(), "quorum");
        assert_eq!(rule.min_required(), CONSENSUS_MIN);
    }
}
