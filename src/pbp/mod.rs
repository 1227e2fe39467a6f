pub mod nflverse;
pub mod provider;

pub use nflverse::NflversePbp;
pub use provider::PlayByPlayProvider;

use anyhow::Result;
use tracing::{info, warn};

use crate::models::PlayRecord;

/// Fetch play-by-play data for `season`, substituting `fallback_season` when
/// the request fails or comes back empty.
///
/// The fallback is attempted exactly once and its result is returned as-is,
/// even if it too is empty; an error from the fallback request propagates.
pub async fn fetch_with_fallback(
    provider: &dyn PlayByPlayProvider,
    season: u16,
    fallback_season: u16,
) -> Result<Vec<PlayRecord>> {
    info!(
        "Fetching play-by-play data for the {} season from {}",
        season,
        provider.name()
    );
    match provider.fetch_plays(season).await {
        Ok(plays) if !plays.is_empty() => Ok(plays),
        Ok(_) => {
            warn!(
                "No play-by-play data available for {}; falling back to {}",
                season, fallback_season
            );
            provider.fetch_plays(fallback_season).await
        }
        Err(e) => {
            warn!(
                "Could not fetch data for {}: {}; falling back to {}",
                season, e, fallback_season
            );
            provider.fetch_plays(fallback_season).await
        }
    }
}
