//! Trait base para fontes de resultado.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::book::MatchBook;
use crate::consensus::Clock;
use crate::types::matches::{Match, MatchStatus, SourceResult};
use crate::types::requests::ReportedResult;
use crate::OracleResult;

/// Trait para fontes de resultado de partidas.
///
/// Cada fonte encapsula um provedor externo (PandaScore, VLR, Liquipedia)
/// e decide, pelas próprias regras, se o relatório é confiável.
#[async_trait]
pub trait ResultSource: Send + Sync {
    /// Token da fonte, gravado em `SourceResult::source`.
    fn name(&self) -> &str;

    /// Retorna a partida como a fonte a expõe.
    async fn fetch_match(&self, match_id: &str) -> OracleResult<Match>;

    /// Retorna o relatório atual da fonte para a partida.
    async fn fetch_result(&self, match_id: &str) -> OracleResult<SourceResult>;
}

/// Converte um resultado armazenado no relatório de uma fonte.
///
/// Só é confiável quando a partida terminou e há vencedor declarado.
pub fn report_from(reported: &ReportedResult, timestamp: DateTime<Utc>) -> SourceResult {
    let confident = reported.match_status == MatchStatus::Ended && reported.winner.is_some();

    SourceResult::new(reported.source.clone(), reported.match_status, timestamp)
        .with_winner(reported.winner)
        .with_score(reported.score)
        .with_confidence(confident)
}

/// Feed simulado sobre o livro de partidas, compartilhado pelas fontes.
#[derive(Clone)]
pub(crate) struct SimulatedFeed {
    source: &'static str,
    book: Arc<MatchBook>,
    clock: Arc<dyn Clock>,
}

impl SimulatedFeed {
    pub(crate) fn new(source: &'static str, book: Arc<MatchBook>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            book,
            clock,
        }
    }

    pub(crate) fn source(&self) -> &'static str {
        self.source
    }

    /// Partida com ID externo da fonte e placar próprio anexado.
    pub(crate) async fn match_view(&self, mut record: Match) -> Match {
        record.external_id = Some(format!("{}-{}", self.source, record.id));
        record.result = self
            .book
            .reported_result(&record.id, self.source)
            .await
            .ok()
            .map(|r| r.score);
        record
    }

    pub(crate) async fn fetch_match(&self, match_id: &str) -> OracleResult<Match> {
        let record = self.book.get_match(match_id).await?;
        Ok(self.match_view(record).await)
    }

    pub(crate) async fn fetch_result(&self, match_id: &str) -> OracleResult<SourceResult> {
        let reported = self.book.reported_result(match_id, self.source).await?;
        tracing::debug!(source = self.source, match_id, status = %reported.match_status, "Relatório lido");

        Ok(report_from(&reported, self.clock.now()))
    }

    pub(crate) fn book(&self) -> &MatchBook {
        &self.book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::matches::{MatchScore, Winner};

    fn reported(status: MatchStatus, winner: Option<Winner>) -> ReportedResult {
        ReportedResult {
            source: "vlr".to_string(),
            match_status: status,
            winner,
            score: MatchScore::new(2, 1, 3),
        }
    }

    #[test]
    fn test_report_from_ended() {
        let now = Utc::now();
        let report = report_from(&reported(MatchStatus::Ended, Some(Winner::TeamA)), now);

        assert!(report.confident);
        assert_eq!(report.vote(), Some(Winner::TeamA));
        assert_eq!(report.timestamp, now);
        assert_eq!(report.result.map_count, 3);
    }

    #[test]
    fn test_report_from_unfinished_is_not_confident() {
        let report = report_from(&reported(MatchStatus::Started, None), Utc::now());

        assert!(!report.confident);
        assert_eq!(report.match_status, MatchStatus::Started);
    }
}
