//! Merges full rounds and bye rounds into one numbered sequence.

use crate::models::{ClubId, Fixture, Round};

/// Interleave bye rounds at the planned round numbers with full rounds
/// everywhere else, assigning final 1-based numbers and names.
pub fn assemble(
    full_rounds: Vec<Vec<Fixture>>,
    bye_rounds: Vec<(Vec<Fixture>, Vec<ClubId>)>,
    bye_numbers: &[usize],
    target_rounds: usize,
) -> Vec<Round> {
    let mut full_iter = full_rounds.into_iter();
    let mut bye_iter = bye_rounds.into_iter();

    let mut rounds = Vec::with_capacity(target_rounds);
    for number in 1..=target_rounds {
        let mut round = Round::new(number as u32, &format!("Round {number}"));
        if bye_numbers.contains(&number) {
            if let Some((fixtures, resting)) = bye_iter.next() {
                round.fixtures = fixtures;
                round.byes = resting;
                round.is_bye = true;
            }
        } else if let Some(fixtures) = full_iter.next() {
            round.fixtures = fixtures;
        }
        rounds.push(round);
    }

    rounds
}
