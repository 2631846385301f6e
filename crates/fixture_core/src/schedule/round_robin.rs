//! Circle-method round-robin generation.
//!
//! One club is held fixed while the rest rotate a position per round, which
//! yields every pairing exactly once over `n - 1` rounds.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::models::ClubId;

/// Placeholder appended for an odd club count; pairings touching it are
/// dropped, giving one club an implicit rest that round.
const SENTINEL: ClubId = ClubId::MAX;

/// Oriented `(home, away)` pairs for each round of one full cycle.
pub fn generate(clubs: &[ClubId], rng: &mut ChaCha8Rng) -> Vec<Vec<(ClubId, ClubId)>> {
    if clubs.len() < 2 {
        return Vec::new();
    }

    let mut field = clubs.to_vec();
    if field.len() % 2 == 1 {
        field.push(SENTINEL);
    }
    let n = field.len();

    let fixed = field[0];
    let mut rotating: Vec<ClubId> = field[1..].to_vec();

    let mut rounds = Vec::with_capacity(n - 1);
    for round_idx in 0..n - 1 {
        let mut pairs = Vec::with_capacity(n / 2);

        // The fixed club hosts on even rounds, travels on odd ones.
        let head = rotating[0];
        if round_idx % 2 == 0 {
            pairs.push((fixed, head));
        } else {
            pairs.push((head, fixed));
        }

        // Pair the i-th rotating club with its mirror from the other end.
        let m = rotating.len();
        for i in 1..=(m - 1) / 2 {
            let (a, b) = (rotating[i], rotating[m - i]);
            if rng.gen_bool(0.5) {
                pairs.push((a, b));
            } else {
                pairs.push((b, a));
            }
        }

        pairs.retain(|&(h, a)| h != SENTINEL && a != SENTINEL);
        rounds.push(pairs);

        // Rotate: last moves to front.
        if let Some(last) = rotating.pop() {
            rotating.insert(0, last);
        }
    }

    rounds
}
