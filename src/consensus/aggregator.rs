//! Agregador de relatórios do oráculo.
//!
//! Responsável por:
//! - Contar votos confiáveis
//! - Aplicar a regra de consenso
//! - Montar o resultado agregado
//! - Consolidar um resumo legível

use crate::types::matches::{SourceResult, Team, Winner};
use crate::types::responses::{AggregatedResult, FinalWinner, ResolutionStatus};

use super::clock::Clock;
use super::rules::ConsensusRule;
use super::tally::VoteTally;

/// Agregador de relatórios.
pub struct ResultAggregator;

impl ResultAggregator {
    /// Agrega os relatórios e retorna o resultado da partida.
    ///
    /// O relógio só é lido quando a partida é resolvida.
    pub fn aggregate(
        match_id: &str,
        team_a: Team,
        team_b: Team,
        sources: Vec<SourceResult>,
        rule: &dyn ConsensusRule,
        clock: &dyn Clock,
    ) -> AggregatedResult {
        let tally = VoteTally::from_sources(&sources);
        let verdict = rule.evaluate(&tally);

        let (final_winner, status, resolved_at) = match verdict.leader {
            Some(winner) if verdict.reached => (
                FinalWinner::Team(winner),
                ResolutionStatus::Resolved,
                Some(clock.now()),
            ),
            _ => (FinalWinner::Disputed, ResolutionStatus::Disputed, None),
        };

        tracing::debug!(
            match_id,
            votes_a = tally.count(Winner::TeamA),
            votes_b = tally.count(Winner::TeamB),
            agreed = verdict.agreed,
            %status,
            "Relatórios agregados"
        );

        AggregatedResult {
            match_id: match_id.to_string(),
            team_a,
            team_b,
            sources,
            consensus: status == ResolutionStatus::Resolved,
            consensus_min: rule.min_required(),
            agreed_sources: verdict.agreed,
            final_winner,
            status,
            resolved_at,
        }
    }

    /// Consolida um resumo em markdown do resultado.
    pub fn summarize(result: &AggregatedResult) -> String {
        let mut summary = String::new();

        let header = match result.status {
            ResolutionStatus::Resolved => "## Partida Resolvida",
            ResolutionStatus::Disputed => "## Partida em Disputa",
        };
        summary.push_str(header);
        summary.push_str("\n\n");

        summary.push_str(&format!(
            "**{}** vs **{}** (partida {})\n\n",
            result.team_a.name, result.team_b.name, result.match_id
        ));

        let tally = VoteTally::from_sources(&result.sources);
        summary.push_str(&format!(
            "**Votos:** {} TeamA | {} TeamB | {} sem voto (quórum: {})\n\n",
            tally.count(Winner::TeamA),
            tally.count(Winner::TeamB),
            result.sources.len().saturating_sub(tally.total()),
            result.consensus_min
        ));

        summary.push_str("### Fontes\n\n");
        for source in &result.sources {
            let icon = if source.vote().is_some() { "✓" } else { "○" };
            let claim = source.winner.map(|w| w.as_str()).unwrap_or("-");

            summary.push_str(&format!(
                "- {} **{}**: {} ({}, {}-{}, {} mapas)\n",
                icon,
                source.source,
                claim,
                source.match_status,
                source.result.score_a,
                source.result.score_b,
                source.result.map_count
            ));
        }
        summary.push('\n');

        match (result.winning_team(), result.resolved_at) {
            (Some(team), Some(at)) => {
                summary.push_str(&format!(
                    "Vencedor: **{}** com {} fontes concordando, resolvido em {}.\n",
                    team.name,
                    result.agreed_sources,
                    at.to_rfc3339()
                ));
            }
            _ => {
                summary.push_str(&format!(
                    "Nenhum lado alcançou o quórum (máximo de {} fonte(s) concordando).\n",
                    result.agreed_sources
                ));
            }
        }

        summary
    }
}
