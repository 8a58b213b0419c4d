//! Fonte simulada da API da Liquipedia.

use std::sync::Arc;

use async_trait::async_trait;

use super::base::{ResultSource, SimulatedFeed};
use crate::book::MatchBook;
use crate::consensus::Clock;
use crate::types::matches::{Match, SourceResult};
use crate::OracleResult;

/// Fonte Liquipedia.
pub struct LiquipediaSource {
    feed: SimulatedFeed,
}

impl LiquipediaSource {
    /// Token da fonte.
    pub const NAME: &'static str = "liquipedia";

    /// Cria uma nova fonte Liquipedia.
    pub fn new(book: Arc<MatchBook>, clock: Arc<dyn Clock>) -> Self {
        Self {
            feed: SimulatedFeed::new(Self::NAME, book, clock),
        }
    }
}

#[async_trait]
impl ResultSource for LiquipediaSource {
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
