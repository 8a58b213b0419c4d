//! Coleta concorrente de relatórios das fontes.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;

use super::base::ResultSource;
use super::{LiquipediaSource, PandaScoreSource, VlrSource};
use crate::book::MatchBook;
use crate::consensus::Clock;
use crate::types::config::{Config, SourceConfig};
use crate::types::matches::SourceResult;
use crate::OracleError;

/// Coletor de relatórios.
///
/// Consulta todas as fontes em paralelo, cada uma com seu timeout.
/// Fontes que falham ou estouram o tempo ficam de fora do snapshot.
#[derive(Default)]
pub struct SourceCollector {
    sources: Vec<(Arc<dyn ResultSource>, Duration)>,
}

impl SourceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria o coletor com as fontes habilitadas na configuração.
    pub fn from_config(config: &Config, book: Arc<MatchBook>, clock: Arc<dyn Clock>) -> Self {
        let mut collector = Self::new();
        let general = &config.general;
        let enabled = &config.sources;

        let sources: [(&SourceConfig, Arc<dyn ResultSource>); 3] = [
            (
                &enabled.pandascore,
                Arc::new(PandaScoreSource::new(book.clone(), clock.clone())) as Arc<dyn ResultSource>,
            ),
            (
                &enabled.vlr,
                Arc::new(VlrSource::new(book.clone(), clock.clone())) as Arc<dyn ResultSource>,
            ),
            (
                &enabled.liquipedia,
                Arc::new(LiquipediaSource::new(book, clock)) as Arc<dyn ResultSource>,
            ),
        ];

        for (source_config, source) in sources {
            if source_config.enabled {
                collector = collector.with_source(source, source_config.timeout(general));
            } else {
                tracing::debug!(source = source.name(), "Fonte desabilitada");
            }
        }

        collector
    }

    /// Adiciona uma fonte.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn ResultSource>, timeout: Duration) -> Self {
        self.sources.push((source, timeout));
        self
    }

    /// Nomes das fontes registradas, na ordem de registro.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|(s, _)| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Coleta um snapshot de relatórios para a partida.
    ///
    /// O resultado segue a ordem de registro das fontes, independente
    /// da ordem em que as respostas chegam.
    pub async fn collect(&self, match_id: &str) -> Vec<SourceResult> {
        let mut tasks = JoinSet::new();

        for (index, (source, timeout)) in self.sources.iter().enumerate() {
            let source = Arc::clone(source);
            let timeout = *timeout;
            let match_id = match_id.to_string();

            tasks.spawn(async move {
                let outcome = match tokio::time::timeout(timeout, source.fetch_result(&match_id)).await {
                    Ok(outcome) => outcome,
                    Err(_) => Err(OracleError::SourceTimeout(source.name().to_string())),
                };
                (index, source.name().to_string(), outcome)
            });
        }

        let mut slots: Vec<Option<SourceResult>> = vec![None; self.sources.len()];

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, _, Ok(report))) => slots[index] = Some(report),
                Ok((_, name, Err(e))) => {
                    tracing::warn!(
                        source = %name,
                        match_id,
                        error = %e,
                        "Fonte falhou, relatório ignorado"
                    );
                }
                Err(e) => {
                    tracing::warn!(match_id, error = %e, "Tarefa de coleta abortada");
                }
            }
        }

        slots.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::{FixedClock, SystemClock};
    use crate::types::matches::{Match, Winner};
    use crate::types::requests::{CreateMatchRequest, SetResultRequest};
    use crate::OracleResult;
    use async_trait::async_trait;
    use chrono::Utc;

    struct SlowSource {
        delay: Duration,
        winner: Winner,
    }

    #[async_trait]
    impl ResultSource for SlowSource {
        fn name(&self) -> &str {
            "slow"
        }

        async fn fetch_match(&self, match_id: &str) -> OracleResult<Match> {
            Err(OracleError::MatchNotFound(match_id.to_string()))
        }

        async fn fetch_result(&self, _match_id: &str) -> OracleResult<SourceResult> {
            tokio::time::sleep(self.delay).await;
            Ok(SourceResult::ended("slow", self.winner, Utc::now()))
        }
    }

    #[tokio::test]
    async fn test_from_config_skips_disabled() {
        let mut config = Config::default();
        config.sources.vlr.enabled = false;

        let collector = SourceCollector::from_config(
            &config,
            Arc::new(MatchBook::new()),
            Arc::new(SystemClock),
        );

        assert_eq!(collector.source_names(), vec!["pandascore", "liquipedia"]);
    }

    #[tokio::test]
    async fn test_collect_skips_missing_reports() {
        let book = Arc::new(MatchBook::new());
        let created = book
            .create_match(CreateMatchRequest::new("Sentinels", "Fnatic", Utc::now()))
            .await
            .unwrap();
        book.set_result(&created.id, &SetResultRequest::ended("liquipedia", Winner::TeamA))
            .await
            .unwrap();
        book.set_result(&created.id, &SetResultRequest::ended("pandascore", Winner::TeamA))
            .await
            .unwrap();

        let collector = SourceCollector::from_config(
            &Config::default(),
            book,
            Arc::new(FixedClock(Utc::now())),
        );
        let reports = collector.collect(&created.id).await;

        let names: Vec<_> = reports.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(names, vec!["pandascore", "liquipedia"]);
    }

    #[tokio::test]
    async fn test_collect_drops_timed_out_source() {
        let collector = SourceCollector::new()
            .with_source(
                Arc::new(SlowSource {
                    delay: Duration::from_secs(5),
                    winner: Winner::TeamA,
                }),
                Duration::from_millis(20),
            )
            .with_source(
                Arc::new(SlowSource {
                    delay: Duration::from_millis(1),
                    winner: Winner::TeamB,
                }),
                Duration::from_secs(1),
            );

        let reports = collector.collect("1").await;

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].winner, Some(Winner::TeamB));
    }

    #[tokio::test]
    async fn test_empty_collector() {
        let collector = SourceCollector::new();
        assert!(collector.is_empty());
        assert!(collector.collect("1").await.is_empty());
    }
}
