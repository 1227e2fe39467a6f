use std::fmt;

use serde::{Deserialize, Deserializer};

/// One raw play-by-play row as fetched from the upstream source.
///
/// Every field is optional: the upstream schema varies by season and export,
/// and the pipeline must tolerate any subset being absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayRecord {
    #[serde(default)]
    pub game_id: Option<String>,
    /// Team with possession (offense)
    #[serde(default)]
    pub posteam: Option<String>,
    /// Team on defense
    #[serde(default)]
    pub defteam: Option<String>,
    /// Expected points before the snap
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ep_before: Option<f64>,
    /// Expected points once the play resolved
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ep: Option<f64>,
}

/// Numeric fields arrive either as JSON numbers or as strings depending on
/// which export produced the season file; anything unparseable is treated as
/// absent rather than failing the whole fetch.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        v.as_f64()
            .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
    }))
}

/// A play with its derived EPA value attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPlay {
    pub game_id: Option<String>,
    pub posteam: Option<String>,
    pub defteam: Option<String>,
    pub epa: f64,
}

/// Net EPA for one (game, team) pair: what the team's offense produced per
/// play combined with what its defense conceded (sign-inverted).
#[derive(Debug, Clone, PartialEq)]
pub struct NetEpa {
    pub game_id: String,
    pub team: String,
    pub off_epa_per_play: f64,
    /// Absent when the team has no defensive snaps recorded in this game.
    pub def_epa_per_play: Option<f64>,
    pub net_epa_per_play: f64,
}

/// Categorical bet decision derived from net EPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Bet,
    Avoid,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Bet => write!(f, "Bet"),
            Decision::Avoid => write!(f, "Avoid"),
        }
    }
}

/// Bet-type label chosen by thresholding confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetType {
    Spread,
    NoBet,
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetType::Spread => write!(f, "Spread"),
            BetType::NoBet => write!(f, "No Bet"),
        }
    }
}

/// Final recommendation row for one (game, team) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub game_id: String,
    pub team: String,
    pub off_epa_per_play: f64,
    pub def_epa_per_play: f64,
    pub net_epa_per_play: f64,
    pub decision: Decision,
    /// Absolute value of net EPA per play; always >= 0.
    pub confidence: f64,
    pub bet_type: BetType,
}
