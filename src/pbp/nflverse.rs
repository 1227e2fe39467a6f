use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::provider::PlayByPlayProvider;
use crate::models::PlayRecord;

/// Play-by-play provider backed by the nflverse JSON mirror.
pub struct NflversePbp {
    http: Client,
    /// Base URL for overriding in tests
    base_url: String,
}

/// Season payload envelope. Older season files omit the `plays` key entirely
/// when nothing has been published yet.
#[derive(Debug, Deserialize)]
struct PbpResponse {
    #[serde(default)]
    plays: Vec<PlayRecord>,
}

impl NflversePbp {
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(NflversePbp {
            http,
            base_url: base_url.unwrap_or("https://api.nflverse.app/v1").to_string(),
        })
    }
}

#[async_trait]
impl PlayByPlayProvider for NflversePbp {
    fn name(&self) -> &str {
        "nflverse"
    }

    async fn fetch_plays(&self, season: u16) -> Result<Vec<PlayRecord>> {
        let url = format!("{}/pbp?season={}", self.base_url, season);
        debug!("Fetching play-by-play data from {}", url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .context("nflverse request failed")?;

        if !resp.status().is_success() {
            anyhow::bail!("nflverse error: {}", resp.status());
        }

        let body: PbpResponse = resp
            .json()
            .await
            .context("Failed to parse nflverse response")?;

        Ok(body.plays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_parse_full_row() {
        let raw = json!({
            "plays": [
                {
                    "game_id": "2024_01_BAL_KC",
                    "posteam": "BAL",
                    "defteam": "KC",
                    "ep_before": 0.95,
                    "ep": 1.35
                }
            ]
        });
        let body: PbpResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(body.plays.len(), 1);
        let play = &body.plays[0];
        assert_eq!(play.game_id.as_deref(), Some("2024_01_BAL_KC"));
        assert_eq!(play.posteam.as_deref(), Some("BAL"));
        assert_eq!(play.defteam.as_deref(), Some("KC"));
        assert_relative_eq!(play.ep_before.unwrap(), 0.95, epsilon = 1e-9);
        assert_relative_eq!(play.ep.unwrap(), 1.35, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_string_encoded_numbers() {
        // Some season exports serialise every column as text.
        let raw = json!({
            "plays": [
                { "game_id": "g1", "posteam": "A", "defteam": "B", "ep_before": "0.5", "ep": "1.25" }
            ]
        });
        let body: PbpResponse = serde_json::from_value(raw).unwrap();
        assert_relative_eq!(body.plays[0].ep_before.unwrap(), 0.5, epsilon = 1e-9);
        assert_relative_eq!(body.plays[0].ep.unwrap(), 1.25, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_tolerates_missing_fields() {
        let raw = json!({
            "plays": [
                { "game_id": "g1" },
                { "ep": 0.4, "ep_before": null },
                {}
            ]
        });
        let body: PbpResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(body.plays.len(), 3);
        assert_eq!(body.plays[0].game_id.as_deref(), Some("g1"));
        assert!(body.plays[0].ep.is_none());
        assert!(body.plays[1].ep_before.is_none());
        assert_relative_eq!(body.plays[1].ep.unwrap(), 0.4, epsilon = 1e-9);
        assert_eq!(body.plays[2], PlayRecord::default());
    }

    #[test]
    fn test_parse_unparseable_number_treated_as_absent() {
        let raw = json!({
            "plays": [ { "ep": "NA", "ep_before": 0.1 } ]
        });
        let body: PbpResponse = serde_json::from_value(raw).unwrap();
        assert!(body.plays[0].ep.is_none());
        assert!(body.plays[0].ep_before.is_some());
    }

    #[test]
    fn test_parse_missing_plays_key() {
        let raw = json!({});
        let body: PbpResponse = serde_json::from_value(raw).unwrap();
        assert!(body.plays.is_empty());
    }
}
