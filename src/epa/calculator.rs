use tracing::warn;

use crate::models::{PlayRecord, ScoredPlay};

/// EPA value attached when the expected-points columns cannot support the
/// computation.
pub const PLACEHOLDER_EPA: f64 = 0.0;
/// Sentinel grouping keys used when play rows are missing identifiers.
pub const SENTINEL_OFFENSE: &str = "OFF";
pub const SENTINEL_DEFENSE: &str = "DEF";
pub const SENTINEL_GAME: &str = "MOCK";

/// Attach a per-play EPA value to every record.
///
/// Three tiers, checked in this order:
/// 1. Empty input: synthesize a single placeholder row so downstream stages
///    always have non-null grouping keys.
/// 2. Expected-points columns unavailable: placeholder EPA on every row, with
///    each missing grouping key backfilled independently.
/// 3. Otherwise: epa = ep - ep_before per row, no clamping.
pub fn calculate_epa(plays: Vec<PlayRecord>) -> Vec<ScoredPlay> {
    if plays.is_empty() {
        warn!("Play-by-play data is empty; creating mock EPA row");
        return vec![ScoredPlay {
            game_id: Some(SENTINEL_GAME.to_string()),
            posteam: Some(SENTINEL_OFFENSE.to_string()),
            defteam: Some(SENTINEL_DEFENSE.to_string()),
            epa: PLACEHOLDER_EPA,
        }];
    }

    if !has_expected_points(&plays) {
        warn!("Columns 'ep' or 'ep_before' missing; using placeholder EPA");
        return plays
            .into_iter()
            .map(|p| ScoredPlay {
                game_id: Some(p.game_id.unwrap_or_else(|| SENTINEL_GAME.to_string())),
                posteam: Some(p.posteam.unwrap_or_else(|| SENTINEL_OFFENSE.to_string())),
                defteam: Some(p.defteam.unwrap_or_else(|| SENTINEL_DEFENSE.to_string())),
                epa: PLACEHOLDER_EPA,
            })
            .collect();
    }

    plays
        .into_iter()
        .map(|p| ScoredPlay {
            game_id: p.game_id,
            posteam: p.posteam,
            defteam: p.defteam,
            epa: p.ep.unwrap_or(PLACEHOLDER_EPA) - p.ep_before.unwrap_or(PLACEHOLDER_EPA),
        })
        .collect()
}

/// The expected-points columns count as present only when every row carries
/// both values; a partially populated column cannot support per-row EPA.
fn has_expected_points(plays: &[PlayRecord]) -> bool {
    plays.iter().all(|p| p.ep.is_some() && p.ep_before.is_some())
}
