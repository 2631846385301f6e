//! Integration tests for the schedule generation pipeline.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{BlockbusterRound, BlockbusterSpec, GenerateRequest, ScheduleSettings};
use crate::models::{Club, ClubId};
use crate::schedule::{byes, generate_season, round_robin, validate_season, ViolationKind};

fn league(count: usize) -> Vec<Club> {
    (1..=count as u32)
        .map(|id| {
            Club::new(id, &format!("Club {id}"), &format!("Ground {id}"))
        })
        .collect()
}

fn request(count: usize, settings: ScheduleSettings) -> GenerateRequest {
    GenerateRequest { year: 2026, seed: 42, clubs: league(count), user_club: Some(1), settings }
}

#[test]
fn circle_method_covers_every_pairing_once() {
    let clubs: Vec<ClubId> = (1..=8).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let rounds = round_robin::generate(&clubs, &mut rng);

    assert_eq!(rounds.len(), 7, "8 clubs should yield 7 rounds");

    let mut meetings: HashSet<(ClubId, ClubId)> = HashSet::new();
    for round in &rounds {
        assert_eq!(round.len(), 4);
        let mut in_round = HashSet::new();
        for &(home, away) in round {
            assert_ne!(home, away);
            assert!(in_round.insert(home) && in_round.insert(away), "club repeated in round");
            let key = (home.min(away), home.max(away));
            assert!(meetings.insert(key), "pairing {key:?} generated twice");
        }
    }
    assert_eq!(meetings.len(), 28, "every pair of 8 clubs meets exactly once");
}

#[test]
fn circle_method_rests_one_club_for_odd_counts() {
    let clubs: Vec<ClubId> = (1..=7).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let rounds = round_robin::generate(&clubs, &mut rng);

    assert_eq!(rounds.len(), 7);
    for round in &rounds {
        assert_eq!(round.len(), 3, "one club rests each round");
    }
}

#[test]
fn bye_groups_partition_the_league() {
    let clubs: Vec<ClubId> = (1..=18).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let groups = byes::bye_groups(&clubs, 3, &mut rng);

    assert_eq!(groups.len(), 3);
    let mut seen = HashSet::new();
    for group in &groups {
        assert_eq!(group.len(), 6);
        assert_eq!((clubs.len() - group.len()) % 2, 0, "playing clubs must pair up");
        for club in group {
            assert!(seen.insert(*club), "club {club} rests twice");
        }
    }
    assert_eq!(seen.len(), 18);
}

#[test]
fn bye_rounds_sit_inside_the_season() {
    let numbers = byes::bye_round_numbers(22, 3);
    assert_eq!(numbers, vec![5, 11, 16]);

    let numbers = byes::bye_round_numbers(10, 2);
    assert_eq!(numbers.len(), 2);
    for n in &numbers {
        assert!(*n >= 2 && *n <= 9, "bye round {n} clamped off the season edges");
    }
}

// The concrete example from the scheduling requirements: 18 clubs over 22
// rounds with 3 bye rounds validates clean, with every club inside one
// match of every other.
#[test]
fn eighteen_club_season_with_byes_is_clean() {
    let mut settings = ScheduleSettings::default();
    settings.target_rounds = 22;
    settings.byes.enabled = true;
    settings.byes.rounds = 3;

    let req = request(18, settings);
    let (season, violations) = generate_season(&req).expect("18 clubs must schedule");

    assert!(violations.is_empty(), "unexpected violations: {violations:?}");
    assert_eq!(season.rounds.len(), 22);
    assert_eq!(season.rounds.iter().filter(|r| r.is_bye).count(), 3);

    let totals: Vec<usize> =
        req.clubs.iter().map(|c| season.matches_scheduled(c.id)).collect();
    for total in &totals {
        assert!(
            *total == 21 || *total == 22,
            "per-club totals should be 21 or 22, got {totals:?}"
        );
    }
    let max = totals.iter().max().unwrap();
    let min = totals.iter().min().unwrap();
    assert!(max - min <= 1);
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let settings = ScheduleSettings::default();
    let (a, _) = generate_season(&request(10, settings.clone())).unwrap();
    let (b, _) = generate_season(&request(10, settings)).unwrap();

    let a = serde_json::to_string(&a).unwrap();
    let b = serde_json::to_string(&b).unwrap();
    assert_eq!(a, b, "same seed and inputs must produce identical seasons");
}

#[test]
fn too_few_clubs_is_an_error() {
    let err = generate_season(&request(1, ScheduleSettings::default()));
    assert!(err.is_err());
}

#[test]
fn every_round_gets_match_day_slots() {
    let (season, _) = generate_season(&request(10, ScheduleSettings::default())).unwrap();
    for round in &season.rounds {
        for fixture in &round.fixtures {
            assert!(fixture.slot.is_some(), "round {} left a fixture unslotted", round.number);
        }
    }
}

#[test]
fn user_club_lands_in_the_preferred_slot() {
    let settings = ScheduleSettings::default();
    let preferred = settings.timeslots[settings.preferred_slot].clone();
    let (season, _) = generate_season(&request(10, settings)).unwrap();

    for round in &season.rounds {
        if let Some(fixture) = round.fixture_for(1) {
            if !fixture.is_blockbuster() {
                assert_eq!(fixture.slot.as_ref(), Some(&preferred));
            }
        }
    }
}

#[test]
fn blockbuster_moves_to_its_target_round() {
    let mut settings = ScheduleSettings::default();
    settings.target_rounds = 9;
    settings.blockbusters.push(BlockbusterSpec {
        name: "Heritage Clash".to_string(),
        club_a: 3,
        club_b: 7,
        enabled: true,
        round: BlockbusterRound::Fixed(5),
        venue: Some("Grand Stadium".to_string()),
        slot: None,
    });

    let req = request(10, settings);
    let (season, violations) = generate_season(&req).unwrap();
    assert!(violations.is_empty(), "unexpected violations: {violations:?}");

    let target = season.round(5).unwrap();
    let fixture = target
        .fixtures
        .iter()
        .find(|f| f.is_matchup(3, 7))
        .expect("blockbuster should sit in round 5");
    assert_eq!(fixture.blockbuster.as_deref(), Some("Heritage Clash"));
    assert_eq!(fixture.venue, "Grand Stadium");

    // The matchup appears nowhere else and the target round kept a full card.
    for round in &season.rounds {
        let count = round.fixtures.iter().filter(|f| f.is_matchup(3, 7)).count();
        assert_eq!(count, usize::from(round.number == 5));
    }
    assert_eq!(target.fixtures.len(), 5);
}

#[test]
fn blockbuster_displaces_target_round_opponents() {
    use crate::schedule::blockbuster::place_blockbusters;

    let clubs = league(8);
    let fixtures = |pairs: &[(ClubId, ClubId)]| -> Vec<crate::models::Fixture> {
        pairs
            .iter()
            .map(|&(h, a)| crate::models::Fixture::new(h, a, &format!("Ground {h}")))
            .collect()
    };

    let mut r1 = crate::models::Round::new(1, "Round 1");
    r1.fixtures = fixtures(&[(3, 7), (1, 2), (4, 5), (6, 8)]);
    let mut r2 = crate::models::Round::new(2, "Round 2");
    r2.fixtures = fixtures(&[(3, 1), (7, 2), (4, 6), (5, 8)]);
    let mut rounds = vec![r1, r2];

    let spec = BlockbusterSpec {
        name: "Heritage Clash".to_string(),
        club_a: 3,
        club_b: 7,
        enabled: true,
        round: BlockbusterRound::Fixed(2),
        venue: None,
        slot: None,
    };
    let report = place_blockbusters(&mut rounds, &[spec], &clubs);

    assert!(report.removed.is_empty(), "no sweep removals expected");
    // Target keeps four fixtures: the blockbuster plus the displaced
    // opponents paired with each other.
    assert_eq!(rounds[1].fixtures.len(), 4);
    assert!(rounds[1].fixtures.iter().any(|f| f.is_matchup(3, 7) && f.is_blockbuster()));
    assert!(rounds[1].fixtures.iter().any(|f| f.is_matchup(1, 2)));
    // Source round is left one fixture short, with the rivals idle.
    assert_eq!(rounds[0].fixtures.len(), 3);
    assert!(!rounds[0].has_club(3) && !rounds[0].has_club(7));
}

#[test]
fn blockbuster_swaps_a_fixture_back_when_target_has_room() {
    use crate::schedule::blockbuster::place_blockbusters;

    let clubs = league(8);
    let mut r1 = crate::models::Round::new(1, "Round 1");
    r1.fixtures = vec![
        crate::models::Fixture::new(1, 2, "Ground 1"),
        crate::models::Fixture::new(3, 4, "Ground 3"),
    ];
    let mut r2 = crate::models::Round::new(2, "Round 2");
    r2.fixtures = vec![
        crate::models::Fixture::new(7, 8, "Ground 7"),
        crate::models::Fixture::new(5, 6, "Ground 5"),
    ];
    let mut rounds = vec![r1, r2];

    let spec = BlockbusterSpec {
        name: "Rivalry Night".to_string(),
        club_a: 1,
        club_b: 2,
        enabled: true,
        round: BlockbusterRound::Fixed(2),
        venue: None,
        slot: None,
    };
    place_blockbusters(&mut rounds, &[spec], &clubs);

    // The unrelated fixture swapped into the vacated slot, so both rounds
    // keep their card size.
    assert_eq!(rounds[0].fixtures.len(), 2);
    assert_eq!(rounds[1].fixtures.len(), 2);
    assert!(rounds[1].fixtures.iter().any(|f| f.is_matchup(1, 2) && f.is_blockbuster()));
    assert!(rounds[0].fixtures.iter().any(|f| f.is_matchup(7, 8))
        || rounds[0].fixtures.iter().any(|f| f.is_matchup(5, 6)));
}

#[test]
fn season_opener_auto_maps_to_round_one() {
    let mut settings = ScheduleSettings::default();
    settings.target_rounds = 9;
    settings.blockbusters.push(BlockbusterSpec {
        name: "Season Opener".to_string(),
        club_a: 2,
        club_b: 9,
        enabled: true,
        round: BlockbusterRound::Auto,
        venue: None,
        slot: None,
    });

    let (season, _) = generate_season(&request(10, settings)).unwrap();
    assert!(season.round(1).unwrap().fixtures.iter().any(|f| f.is_matchup(2, 9)));
}

#[test]
fn disabled_blockbusters_are_ignored() {
    let mut settings = ScheduleSettings::default();
    settings.target_rounds = 9;
    settings.blockbusters.push(BlockbusterSpec {
        name: "Heritage Clash".to_string(),
        club_a: 3,
        club_b: 7,
        enabled: false,
        round: BlockbusterRound::Fixed(5),
        venue: None,
        slot: None,
    });

    let (season, _) = generate_season(&request(10, settings)).unwrap();
    for round in &season.rounds {
        for fixture in &round.fixtures {
            assert!(fixture.blockbuster.is_none());
        }
    }
}

#[test]
fn validator_reports_duplicates_as_data() {
    let (mut season, _) = generate_season(&request(8, ScheduleSettings::default())).unwrap();

    // Corrupt round 1: triple up the first fixture, which also skews the
    // season-wide match counts by two.
    let dup = season.rounds[0].fixtures[0].clone();
    season.rounds[0].fixtures.push(dup.clone());
    season.rounds[0].fixtures.push(dup);

    let violations = validate_season(&season);
    assert!(violations
        .iter()
        .any(|v| v.kind == ViolationKind::DuplicateClubInRound && v.round == Some(1)));
    assert!(violations.iter().any(|v| v.kind == ViolationKind::UnbalancedMatchCounts));
}

#[test]
fn validator_reports_bye_conflicts() {
    let (mut season, _) = generate_season(&request(8, ScheduleSettings::default())).unwrap();
    let club = season.rounds[0].fixtures[0].home;
    season.rounds[0].byes.push(club);

    let violations = validate_season(&season);
    assert!(violations.iter().any(|v| v.kind == ViolationKind::ByeClubFixtured));
}

proptest! {
    // Season-wide fairness: for even club counts, per-club match totals stay
    // within one of each other whatever the round target.
    #[test]
    fn match_counts_stay_balanced(half in 2usize..9, extra in 0usize..12) {
        let count = half * 2;
        let mut settings = ScheduleSettings::default();
        settings.target_rounds = (count - 1) + extra;

        let req = request(count, settings);
        let (season, _) = generate_season(&req).unwrap();
        let totals: Vec<usize> =
            req.clubs.iter().map(|c| season.matches_scheduled(c.id)).collect();
        let max = totals.iter().max().unwrap();
        let min = totals.iter().min().unwrap();
        prop_assert!(max - min <= 1, "unbalanced totals: {:?}", totals);
    }
}
