//! The full generation pipeline and its bounded retry loop.
//!
//! Generation is a pure function of `(request, seed)`. When validation finds
//! problems the orchestrator regenerates from scratch with an offset seed,
//! keeps every attempt's diagnostics, and returns the attempt with the
//! fewest violations rather than the last one.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GenerateRequest;
use crate::error::{FixtureError, Result};
use crate::models::{ClubId, Fixture, Season};
use crate::schedule::{
    assembler, blockbuster, byes, match_day, pairing::PairingTracker, round_robin,
    validate::{validate_season, Violation, ViolationKind},
};

/// Total attempts before settling for the best-effort schedule.
pub const MAX_ATTEMPTS: u64 = 3;

/// Generate a season, retrying with an offset seed while validation fails.
///
/// Never fails for a schedulable input; after the retry ceiling the
/// best-effort season is returned together with its violations.
pub fn generate_season(req: &GenerateRequest) -> Result<(Season, Vec<Violation>)> {
    if req.clubs.len() < 2 {
        return Err(FixtureError::NotEnoughClubs { found: req.clubs.len() });
    }

    let (mut season, mut violations) = generate_once(req, req.seed);
    let mut attempt = 1;
    while !violations.is_empty() && attempt < MAX_ATTEMPTS {
        log::warn!(
            "fixture attempt {} of {} produced {} violations, regenerating",
            attempt,
            MAX_ATTEMPTS,
            violations.len()
        );
        let (next_season, next_violations) =
            generate_once(req, req.seed.wrapping_add(attempt));
        if next_violations.len() < violations.len() {
            season = next_season;
            violations = next_violations;
        }
        attempt += 1;
    }

    if !violations.is_empty() {
        log::warn!(
            "settling for best-effort fixture with {} violations after {} attempts",
            violations.len(),
            attempt
        );
    }
    Ok((season, violations))
}

/// One full pipeline run for a concrete seed.
fn generate_once(req: &GenerateRequest, seed: u64) -> (Season, Vec<Violation>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let settings = &req.settings;
    let ids: Vec<ClubId> = req.clubs.iter().map(|c| c.id).collect();
    let grounds: HashMap<ClubId, &str> =
        req.clubs.iter().map(|c| (c.id, c.home_ground.as_str())).collect();

    // Bye planning first: bye rounds replace full rounds within the target.
    let (bye_numbers, bye_groups) = if settings.byes.enabled && settings.byes.rounds > 0 {
        let numbers = byes::bye_round_numbers(settings.target_rounds, settings.byes.rounds);
        let groups = byes::bye_groups(&ids, numbers.len(), &mut rng);
        (numbers, groups)
    } else {
        (Vec::new(), Vec::new())
    };
    let full_target = settings.target_rounds.saturating_sub(bye_numbers.len());

    // Base cycle, then balanced repeat rounds until the target is met.
    let mut full_pairs = round_robin::generate(&ids, &mut rng);
    full_pairs.truncate(full_target);

    let mut tracker = PairingTracker::new();
    for round in &full_pairs {
        for &(home, away) in round {
            tracker.record(home, away);
        }
    }
    while full_pairs.len() < full_target {
        full_pairs.push(tracker.balanced_pairings(&ids, &mut rng));
    }

    let to_fixtures = |pairs: Vec<(ClubId, ClubId)>| -> Vec<Fixture> {
        pairs
            .into_iter()
            .map(|(home, away)| {
                Fixture::new(home, away, grounds.get(&home).copied().unwrap_or_default())
            })
            .collect()
    };

    let full_rounds: Vec<Vec<Fixture>> = full_pairs.into_iter().map(|p| to_fixtures(p)).collect();

    // Bye rounds pair whichever clubs are not resting, against the same
    // meeting counters so season-wide balance holds.
    let bye_rounds: Vec<(Vec<Fixture>, Vec<ClubId>)> = bye_groups
        .into_iter()
        .map(|resting| {
            let playing: Vec<ClubId> =
                ids.iter().copied().filter(|c| !resting.contains(c)).collect();
            let pairs = tracker.balanced_pairings(&playing, &mut rng);
            (to_fixtures(pairs), resting)
        })
        .collect();

    let mut rounds =
        assembler::assemble(full_rounds, bye_rounds, &bye_numbers, settings.target_rounds);

    for round in rounds.iter_mut() {
        match_day::schedule_round(
            round,
            &settings.timeslots,
            settings.preferred_slot,
            req.user_club,
            &mut rng,
        );
    }

    let report = blockbuster::place_blockbusters(&mut rounds, &settings.blockbusters, &req.clubs);
    for &idx in &report.disturbed {
        match_day::schedule_round(
            &mut rounds[idx],
            &settings.timeslots,
            settings.preferred_slot,
            req.user_club,
            &mut rng,
        );
    }

    let mut season = Season::new(req.year);
    season.rounds = rounds;

    // Sweep removals leave a round short a fixture; surface them instead of
    // letting the hole pass silently.
    let mut violations: Vec<Violation> = report
        .removed
        .iter()
        .map(|(round, fixture)| Violation {
            kind: ViolationKind::DuplicateClubInRound,
            round: Some(*round),
            message: format!(
                "fixture {} v {} removed from round {round} after blockbuster swap",
                fixture.home, fixture.away
            ),
        })
        .collect();
    violations.extend(validate_season(&season));

    (season, violations)
}
