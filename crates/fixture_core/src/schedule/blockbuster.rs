//! Blockbuster placement: relocates marquee rivalry fixtures into their
//! configured rounds.
//!
//! Moves are planned against cloned rounds and committed only after both
//! touched rounds validate cleanly, so a failed swap never leaves the
//! schedule half-edited. When the blockbuster clubs already play in the
//! target round, their fixtures there are displaced and the two displaced
//! opponents are paired with each other, which keeps the target round full
//! and every club's season total within one match of the rest.

use std::collections::HashSet;

use crate::config::{BlockbusterRound, BlockbusterSpec};
use crate::models::{Club, ClubId, Fixture, Round};

#[derive(Debug, Default)]
pub struct PlacementReport {
    /// Indices of rounds whose day/time slots must be re-assigned.
    pub disturbed: Vec<usize>,
    /// Fixtures removed by the post-placement duplicate sweep, with the
    /// number of the round they were removed from.
    pub removed: Vec<(u32, Fixture)>,
}

/// Auto-mapping from blockbuster name to a target round.
fn auto_round(name: &str, total_rounds: usize) -> u32 {
    let key = name.to_lowercase();
    let mid = (total_rounds / 2).max(1) as u32;
    if key.contains("opener") {
        1
    } else if key.contains("anzac") {
        total_rounds.min(6) as u32
    } else {
        mid
    }
}

fn target_round_number(spec: &BlockbusterSpec, total_rounds: usize) -> u32 {
    match spec.round {
        BlockbusterRound::Fixed(n) => n.clamp(1, total_rounds.max(1) as u32),
        BlockbusterRound::Auto => auto_round(&spec.name, total_rounds),
    }
}

fn home_ground(clubs: &[Club], club: ClubId) -> Option<&str> {
    clubs.iter().find(|c| c.id == club).map(|c| c.home_ground.as_str())
}

/// A round is consistent when no club appears twice and no resting club is
/// fixtured.
fn round_is_consistent(round: &Round) -> bool {
    let mut seen = HashSet::new();
    for fixture in &round.fixtures {
        if fixture.home == fixture.away {
            return false;
        }
        if !seen.insert(fixture.home) || !seen.insert(fixture.away) {
            return false;
        }
        if round.is_on_bye(fixture.home) || round.is_on_bye(fixture.away) {
            return false;
        }
    }
    true
}

fn apply_metadata(fixture: &mut Fixture, spec: &BlockbusterSpec, clubs: &[Club]) {
    if let Some(venue) = &spec.venue {
        fixture.venue = venue.clone();
    } else if let Some(ground) = home_ground(clubs, fixture.home) {
        fixture.venue = ground.to_string();
    }
    if spec.slot.is_some() {
        fixture.slot = spec.slot.clone();
    }
    fixture.blockbuster = Some(spec.name.clone());
}

/// Place every enabled blockbuster whose clubs both exist in the league.
pub fn place_blockbusters(
    rounds: &mut [Round],
    specs: &[BlockbusterSpec],
    clubs: &[Club],
) -> PlacementReport {
    let mut report = PlacementReport::default();
    let total_rounds = rounds.len();

    for spec in specs.iter().filter(|s| s.enabled) {
        let (a, b) = (spec.club_a, spec.club_b);
        if home_ground(clubs, a).is_none() || home_ground(clubs, b).is_none() {
            log::debug!("blockbuster {}: club {} or {} not in league, skipped", spec.name, a, b);
            continue;
        }

        let target_number = target_round_number(spec, total_rounds);
        let Some(target_idx) = rounds.iter().position(|r| r.number == target_number) else {
            continue;
        };

        // There is exactly one fixture for the pairing per season unless
        // repeat rounds created more; the first found is the one moved.
        let located = rounds.iter().enumerate().find_map(|(ri, round)| {
            round.fixtures.iter().position(|f| f.is_matchup(a, b)).map(|fi| (ri, fi))
        });
        let Some((source_idx, fixture_idx)) = located else {
            log::debug!("blockbuster {}: clubs {} and {} never meet, skipped", spec.name, a, b);
            continue;
        };

        if source_idx == target_idx {
            // Already in place; only the metadata is overwritten.
            apply_metadata(&mut rounds[source_idx].fixtures[fixture_idx], spec, clubs);
            continue;
        }

        if rounds[target_idx].is_on_bye(a) || rounds[target_idx].is_on_bye(b) {
            log::warn!(
                "blockbuster {}: a club rests in round {}, placement abandoned",
                spec.name,
                target_number
            );
            continue;
        }

        match plan_move(&rounds[source_idx], &rounds[target_idx], fixture_idx, spec, clubs) {
            Some((source, target)) => {
                rounds[source_idx] = source;
                rounds[target_idx] = target;
                // Both rounds need fresh day/time slots; the blockbuster
                // itself keeps its pre-assigned slot either way.
                for idx in [source_idx, target_idx] {
                    if !report.disturbed.contains(&idx) {
                        report.disturbed.push(idx);
                    }
                }
            }
            None => {
                log::warn!(
                    "blockbuster {}: no clean move into round {}, placement abandoned",
                    spec.name,
                    target_number
                );
            }
        }
    }

    sweep_duplicates(rounds, &mut report);
    report
}

/// Build the rewritten source and target rounds for one move, or `None`
/// when the move cannot be made without corrupting either round.
fn plan_move(
    source_round: &Round,
    target_round: &Round,
    fixture_idx: usize,
    spec: &BlockbusterSpec,
    clubs: &[Club],
) -> Option<(Round, Round)> {
    let (a, b) = (spec.club_a, spec.club_b);
    let mut source = source_round.clone();
    let mut target = target_round.clone();

    let mut moved = source.fixtures.remove(fixture_idx);

    // Drop any duplicate of the matchup already sitting in the target, then
    // displace whatever the blockbuster clubs were due to play there.
    target.fixtures.retain(|f| !f.is_matchup(a, b));
    let mut displaced: Vec<ClubId> = Vec::new();
    let mut insert_at = usize::MAX;
    let mut kept = Vec::with_capacity(target.fixtures.len());
    for (idx, fixture) in target.fixtures.drain(..).enumerate() {
        match fixture.opponent(a).or_else(|| fixture.opponent(b)) {
            Some(opponent) => {
                insert_at = insert_at.min(idx);
                displaced.push(opponent);
            }
            None => kept.push(fixture),
        }
    }
    target.fixtures = kept;
    let insert_at = insert_at.min(target.fixtures.len());

    match displaced.as_slice() {
        // Neither club was due in the target: per-round counts are kept by
        // swapping an unrelated target fixture back into the vacated slot.
        [] => {
            let candidate_idx = target.fixtures.iter().position(|f| {
                !f.involves(a)
                    && !f.involves(b)
                    && !source.has_club(f.home)
                    && !source.has_club(f.away)
                    && !source.is_on_bye(f.home)
                    && !source.is_on_bye(f.away)
            })?;
            let swapped = target.fixtures.remove(candidate_idx);
            source.fixtures.insert(fixture_idx, swapped);
        }
        // Both clubs were due in the target: their opponents pair off, so
        // the target round stays full.
        [x, y] => {
            let repaired = Fixture::new(*x, *y, home_ground(clubs, *x).unwrap_or_default());
            target.fixtures.insert(insert_at, repaired);
        }
        // A lone displaced opponent cannot be repaired.
        _ => return None,
    }

    apply_metadata(&mut moved, spec, clubs);
    let at = insert_at.min(target.fixtures.len());
    target.fixtures.insert(at, moved);

    if round_is_consistent(&source) && round_is_consistent(&target) {
        Some((source, target))
    } else {
        None
    }
}

/// Remove any fixture that makes a club appear twice in a round, keeping the
/// first occurrence. Kept as cleanup after swaps, but every removal is
/// reported upstream.
fn sweep_duplicates(rounds: &mut [Round], report: &mut PlacementReport) {
    for round in rounds.iter_mut() {
        let mut seen: HashSet<ClubId> = HashSet::new();
        let mut kept = Vec::with_capacity(round.fixtures.len());
        for fixture in round.fixtures.drain(..) {
            if seen.contains(&fixture.home) || seen.contains(&fixture.away) {
                log::warn!(
                    "round {}: removing duplicate fixture {} v {}",
                    round.number,
                    fixture.home,
                    fixture.away
                );
                report.removed.push((round.number, fixture));
            } else {
                seen.insert(fixture.home);
                seen.insert(fixture.away);
                kept.push(fixture);
            }
        }
        round.fixtures = kept;
    }
}
