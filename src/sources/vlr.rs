//! Fonte simulada do scraper do VLR.gg.

use std::sync::Arc;

use async_trait::async_trait;

use super::base::{ResultSource, SimulatedFeed};
use crate::book::MatchBook;
use crate::consensus::Clock;
use crate::types::matches::{Match, SourceResult};
use crate::OracleResult;

/// Fonte VLR.gg.
pub struct VlrSource {
    feed: SimulatedFeed,
}

impl VlrSource {
    /// Token da fonte.
    pub const NAME: &'static str = "vlr";

    /// Cria uma nova fonte VLR.
    pub fn new(book: Arc<MatchBook>, clock: Arc<dyn Clock>) -> Self {
        Self {
            feed: SimulatedFeed::new(Self::NAME, book, clock),
        }
    }
}

#[async_trait]
impl ResultSource for VlrSource {
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
