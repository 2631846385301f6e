//! Finals standings for the round-robin format.
//!
//! Before the decisive match of a round-robin finals series, the qualifiers
//! are re-ranked by what they did in the finals themselves rather than the
//! home-and-away ladder.

use std::collections::HashMap;

use crate::finals::format::{FinalType, FinalsFormat};
use crate::models::{ClubId, Ladder, Round};

/// Re-rank the top qualifiers by finals wins, then finals points scored,
/// with the original ladder order as the last tie-break (stable sort).
/// Only matches short of the grand final count.
pub fn rerank(ladder: &Ladder, format: &FinalsFormat, played: &[Round]) -> Ladder {
    let mut wins: HashMap<ClubId, u32> = HashMap::new();
    let mut scored: HashMap<ClubId, u32> = HashMap::new();

    for round in played {
        for fixture in &round.fixtures {
            if fixture.final_type == Some(FinalType::GrandFinal) {
                continue;
            }
            let Some(score) = fixture.result else { continue };
            if let Some(winner) = fixture.winner() {
                *wins.entry(winner).or_insert(0) += 1;
            }
            *scored.entry(fixture.home).or_insert(0) += score.home;
            *scored.entry(fixture.away).or_insert(0) += score.away;
        }
    }

    let mut entries: Vec<_> =
        ladder.entries.iter().take(format.qualifying_teams).cloned().collect();
    entries.sort_by(|a, b| {
        let wa = wins.get(&a.club).copied().unwrap_or(0);
        let wb = wins.get(&b.club).copied().unwrap_or(0);
        let sa = scored.get(&a.club).copied().unwrap_or(0);
        let sb = scored.get(&b.club).copied().unwrap_or(0);
        wb.cmp(&wa).then(sb.cmp(&sa))
    });

    Ladder { entries }
}
