//! Bye planning: which clubs rest together, and in which rounds.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::models::ClubId;

/// Partition clubs into `bye_rounds` resting groups.
///
/// Groups start at `⌊n/k⌋` clubs (+1 for the first `n mod k` groups). A
/// group's size is bumped by one whenever resting it would leave an odd
/// number of playing clubs, so the remainder can still be fully paired.
/// Clubs left over after the last group joins it.
pub fn bye_groups(clubs: &[ClubId], bye_rounds: usize, rng: &mut ChaCha8Rng) -> Vec<Vec<ClubId>> {
    if bye_rounds == 0 || clubs.is_empty() {
        return Vec::new();
    }

    let mut shuffled = clubs.to_vec();
    shuffled.shuffle(rng);

    let n = clubs.len();
    let base = n / bye_rounds;
    let extra = n % bye_rounds;

    let mut groups = Vec::with_capacity(bye_rounds);
    let mut cursor = 0;
    for g in 0..bye_rounds {
        let mut size = base + usize::from(g < extra);
        if (n - size) % 2 == 1 {
            size += 1;
        }
        let end = (cursor + size).min(shuffled.len());
        groups.push(shuffled[cursor..end].to_vec());
        cursor = end;
    }

    // Leftovers rest with the last group.
    if cursor < shuffled.len() {
        if let Some(last) = groups.last_mut() {
            last.extend_from_slice(&shuffled[cursor..]);
        }
    }

    groups
}

/// 1-based round numbers for the bye rounds, spaced evenly through the
/// season, kept off the opening and closing rounds, bumped on collision.
pub fn bye_round_numbers(target_rounds: usize, bye_rounds: usize) -> Vec<usize> {
    if bye_rounds == 0 || target_rounds < 3 {
        return Vec::new();
    }

    let first = 2;
    let last = target_rounds - 1;
    // A season can only hold as many bye rounds as it has interior rounds.
    let count = bye_rounds.min(last - first + 1);

    let mut numbers: Vec<usize> = Vec::with_capacity(count);
    for i in 0..count {
        let mut candidate = ((i + 1) * target_rounds) / (bye_rounds + 1);
        candidate = candidate.clamp(first, last);
        while numbers.contains(&candidate) {
            candidate += 1;
            if candidate > last {
                candidate = first;
            }
        }
        numbers.push(candidate);
    }

    numbers.sort_unstable();
    numbers
}
