//! Fonte simulada da API REST da PandaScore.

use std::sync::Arc;

use async_trait::async_trait;

use super::base::{ResultSource, SimulatedFeed};
use crate::book::MatchBook;
use crate::consensus::Clock;
use crate::types::matches::{Match, MatchLifecycle, SourceResult};
use crate::OracleResult;

/// Fonte PandaScore.
///
/// Além do resultado por partida, expõe a listagem de partidas.
pub struct PandaScoreSource {
    feed: SimulatedFeed,
}

impl PandaScoreSource {
    /// Token da fonte.
    pub const NAME: &'static str = "pandascore";

    /// Cria uma nova fonte PandaScore.
    pub fn new(book: Arc<MatchBook>, clock: Arc<dyn Clock>) -> Self {
        Self {
            feed: SimulatedFeed::new(Self::NAME, book, clock),
        }
    }

    /// Lista partidas, mais recentes primeiro, opcionalmente filtradas.
    pub async fn list_matches(&self, status: Option<MatchLifecycle>) -> Vec<Match> {
        let mut views = Vec::new();
        for record in self.feed.book().list_matches(status).await {
            views.push(self.feed.match_view(record).await);
        }
        views
    }
}

#[async_trait]
impl ResultSource for PandaScoreSource {
    fn name(&self) -> &str {
        self.feed.source()
    }

    async fn fetch_match(&self, match_id: &str) -> OracleResult<Match> {
        self.feed.fetch_match(match_id).await
    }

    async fn fetch_result(&self, match_id: &str) -> OracleResult<SourceResult> {
        self.feed.fetch_result(match_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::SystemClock;
    use crate::types::matches::Winner;
    use crate::types::requests::{CreateMatchRequest, SetResultRequest};
    use chrono::Utc;

    #[tokio::test]
    async fn test_list_matches_attaches_own_score() {
        let book = Arc::new(MatchBook::new());
        let created = book
            .create_match(CreateMatchRequest::new("Sentinels", "Fnatic", Utc::now()))
            .await
            .unwrap();
        book.create_match(CreateMatchRequest::new("LOUD", "DRX", Utc::now()))
            .await
            .unwrap();
        book.set_result(
            &created.id,
            &SetResultRequest::ended("pandascore", Winner::TeamA).with_score(2, 0, 2),
        )
        .await
        .unwrap();

        let source = PandaScoreSource::new(book, Arc::new(SystemClock));
        let matches = source.list_matches(None).await;

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].external_id.as_deref(), Some("pandascore-1"));
        assert_eq!(matches[1].result.map(|r| r.score_a), Some(2));
        assert!(matches[0].result.is_none());
    }

    #[tokio::test]
    async fn test_name() {
        let source = PandaScoreSource::new(Arc::new(MatchBook::new()), Arc::new(SystemClock));
        assert_eq!(source.name(), "pandascore");
    }
}
