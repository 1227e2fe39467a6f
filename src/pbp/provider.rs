use anyhow::Result;
use async_trait::async_trait;

use crate::models::PlayRecord;

/// Trait that every play-by-play source must implement.
#[async_trait]
pub trait PlayByPlayProvider: Send + Sync {
    /// Fetch all play records for one season.
    async fn fetch_plays(&self, season: u16) -> Result<Vec<PlayRecord>>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
