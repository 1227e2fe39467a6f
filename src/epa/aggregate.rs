use std::collections::HashMap;

use crate::models::{NetEpa, ScoredPlay};

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    total_epa: f64,
    plays: u32,
}

impl Accumulator {
    fn per_play(&self) -> f64 {
        self.total_epa / self.plays as f64
    }
}

/// Aggregate per-play EPA into net per-team-per-game records.
///
/// Offensive per-play EPA is the mean of EPA over a team's offensive snaps in
/// a game; defensive per-play EPA is the negated mean over its defensive
/// snaps (EPA accrued by the opposing offense is a cost to the defense). Each
/// offensive row is left-joined to the defensive aggregate of the *same* team
/// in the *same* game, and net = offense + defense (defense contributing
/// nothing when absent).
pub fn aggregate_net_epa(plays: &[ScoredPlay]) -> Vec<NetEpa> {
    let mut offense: HashMap<(String, String), Accumulator> = HashMap::new();
    let mut defense: HashMap<(String, String), Accumulator> = HashMap::new();

    for play in plays {
        // Rows missing a grouping key cannot be attributed and are skipped
        // for that grouping.
        if let (Some(game), Some(team)) = (&play.game_id, &play.posteam) {
            let acc = offense.entry((game.clone(), team.clone())).or_default();
            acc.total_epa += play.epa;
            acc.plays += 1;
        }
        if let (Some(game), Some(team)) = (&play.game_id, &play.defteam) {
            let acc = defense.entry((game.clone(), team.clone())).or_default();
            acc.total_epa += play.epa;
            acc.plays += 1;
        }
    }

    let mut records: Vec<NetEpa> = offense
        .into_iter()
        .map(|((game_id, team), off)| {
            let off_per_play = off.per_play();
            let def_per_play = defense
                .get(&(game_id.clone(), team.clone()))
                .map(|d| -d.per_play());
            NetEpa {
                game_id,
                team,
                off_epa_per_play: off_per_play,
                def_epa_per_play: def_per_play,
                net_epa_per_play: off_per_play + def_per_play.unwrap_or(0.0),
            }
        })
        .collect();

    // HashMap iteration order is arbitrary; sort so repeated runs print the
    // same table.
    records.sort_by(|a, b| {
        a.game_id
            .cmp(&b.game_id)
            .then_with(|| a.team.cmp(&b.team))
    });
    records
}
