//! Structural validation of an assembled season.
//!
//! Findings are data, not errors: generation logs them and the retry loop
//! uses them to pick the best attempt.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ClubId, Season};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    SelfPlay,
    DuplicateClubInRound,
    ByeClubFixtured,
    EmptyVenue,
    UnbalancedMatchCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    /// Round number the violation was found in; absent for season-wide checks.
    pub round: Option<u32>,
    pub message: String,
}

impl Violation {
    fn in_round(kind: ViolationKind, round: u32, message: String) -> Self {
        Self { kind, round: Some(round), message }
    }
}

/// Scan every non-finals round for structural problems.
pub fn validate_season(season: &Season) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut totals: HashMap<ClubId, u32> = HashMap::new();

    for round in season.rounds.iter().filter(|r| !r.is_final) {
        let mut seen: HashMap<ClubId, u32> = HashMap::new();
        for fixture in &round.fixtures {
            if fixture.home == fixture.away {
                violations.push(Violation::in_round(
                    ViolationKind::SelfPlay,
                    round.number,
                    format!("club {} is fixtured against itself", fixture.home),
                ));
            }
            if fixture.venue.is_empty() {
                violations.push(Violation::in_round(
                    ViolationKind::EmptyVenue,
                    round.number,
                    format!("fixture {} v {} has no venue", fixture.home, fixture.away),
                ));
            }
            for club in [fixture.home, fixture.away] {
                *seen.entry(club).or_insert(0) += 1;
                *totals.entry(club).or_insert(0) += 1;
                if round.is_on_bye(club) {
                    violations.push(Violation::in_round(
                        ViolationKind::ByeClubFixtured,
                        round.number,
                        format!("club {club} is on bye but also fixtured"),
                    ));
                }
            }
        }
        for (club, count) in seen {
            if count > 1 {
                violations.push(Violation::in_round(
                    ViolationKind::DuplicateClubInRound,
                    round.number,
                    format!("club {club} appears in {count} fixtures"),
                ));
            }
        }
    }

    // Season-wide balance: max and min per-club match counts differ by at
    // most one.
    if let (Some(&max), Some(&min)) = (totals.values().max(), totals.values().min()) {
        if max - min > 1 {
            violations.push(Violation {
                kind: ViolationKind::UnbalancedMatchCounts,
                round: None,
                message: format!("per-club match counts range from {min} to {max}"),
            });
        }
    }

    violations
}
