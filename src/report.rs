use tabled::{Table, Tabled};

use crate::models::Recommendation;

/// One display row; EPA values are preformatted to three decimals so the
/// table stays readable.
#[derive(Tabled)]
struct RecommendationRow {
    game_id: String,
    team: String,
    off_epa_per_play: String,
    def_epa_per_play: String,
    net_epa_per_play: String,
    decision: String,
    confidence: String,
    bet_type: String,
}

impl From<&Recommendation> for RecommendationRow {
    fn from(rec: &Recommendation) -> Self {
        RecommendationRow {
            game_id: rec.game_id.clone(),
            team: rec.team.clone(),
            off_epa_per_play: format!("{:.3}", rec.off_epa_per_play),
            def_epa_per_play: format!("{:.3}", rec.def_epa_per_play),
            net_epa_per_play: format!("{:.3}", rec.net_epa_per_play),
            decision: rec.decision.to_string(),
            confidence: format!("{:.3}", rec.confidence),
            bet_type: rec.bet_type.to_string(),
        }
    }
}

/// Render the first `limit` recommendations as a human-readable table.
pub fn render_recommendations(recommendations: &[Recommendation], limit: usize) -> String {
    let shown = &recommendations[..recommendations.len().min(limit)];
    if shown.is_empty() {
        return "(no recommendations)".to_string();
    }
    let rows: Vec<RecommendationRow> = shown.iter().map(RecommendationRow::from).collect();
    Table::new(rows).to_string()
}
