use tracing::warn;

use crate::models::{BetType, Decision, NetEpa, Recommendation};

/// Net EPA must be strictly positive to recommend a bet.
pub const DECISION_THRESHOLD: f64 = 0.0;

/// Map net EPA records to betting recommendations.
///
/// When the input is empty, two fixed mock rows stand in so a demonstration
/// run always produces visible output. `confidence_threshold` separates
/// "Spread" bets from "No Bet"; a confidence exactly at the threshold is
/// "No Bet".
pub fn generate_recommendations(
    net_epa: Vec<NetEpa>,
    confidence_threshold: f64,
) -> Vec<Recommendation> {
    let rows = if net_epa.is_empty() {
        warn!("Net EPA data empty; creating mock recommendations");
        mock_net_epa()
    } else {
        net_epa
    };

    rows.into_iter()
        .map(|r| {
            let decision = if r.net_epa_per_play > DECISION_THRESHOLD {
                Decision::Bet
            } else {
                Decision::Avoid
            };
            let confidence = r.net_epa_per_play.abs();
            let bet_type = if confidence > confidence_threshold {
                BetType::Spread
            } else {
                BetType::NoBet
            };
            Recommendation {
                game_id: r.game_id,
                team: r.team,
                off_epa_per_play: r.off_epa_per_play,
                def_epa_per_play: r.def_epa_per_play.unwrap_or(0.0),
                net_epa_per_play: r.net_epa_per_play,
                decision,
                confidence,
                bet_type,
            }
        })
        .collect()
}

fn mock_net_epa() -> Vec<NetEpa> {
    vec![
        NetEpa {
            game_id: "MOCK_1".to_string(),
            team: "TeamA".to_string(),
            off_epa_per_play: 0.05,
            def_epa_per_play: Some(0.03),
            net_epa_per_play: 0.08,
        },
        NetEpa {
            game_id: "MOCK_1".to_string(),
            team: "TeamB".to_string(),
            off_epa_per_play: -0.02,
            def_epa_per_play: Some(-0.01),
            net_epa_per_play: -0.03,
        },
    ]
}
