//! Greedy balanced pairing.
//!
//! Used for every round the base cycle cannot supply: repeat rounds beyond
//! one full round robin, and the fixtures of a bye round (pairing whichever
//! clubs are not resting). The meeting and match counters span the whole
//! generation so fairness holds across the season, not per round.

use std::collections::HashMap;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::models::ClubId;

#[derive(Debug, Default)]
pub struct PairingTracker {
    meetings: HashMap<(ClubId, ClubId), u32>,
    totals: HashMap<ClubId, u32>,
}

fn pair_key(a: ClubId, b: ClubId) -> (ClubId, ClubId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl PairingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, a: ClubId, b: ClubId) {
        *self.meetings.entry(pair_key(a, b)).or_insert(0) += 1;
        *self.totals.entry(a).or_insert(0) += 1;
        *self.totals.entry(b).or_insert(0) += 1;
    }

    pub fn meetings(&self, a: ClubId, b: ClubId) -> u32 {
        self.meetings.get(&pair_key(a, b)).copied().unwrap_or(0)
    }

    pub fn total(&self, club: ClubId) -> u32 {
        self.totals.get(&club).copied().unwrap_or(0)
    }

    /// One round's worth of pairings over `clubs`.
    ///
    /// Repeatedly takes the club with the fewest matches so far and pairs it
    /// with the remaining opponent it has met least often, ties broken by the
    /// opponent's own match count. Home/away is a coin flip. An odd pool
    /// leaves the last club unpaired.
    pub fn balanced_pairings(
        &mut self,
        clubs: &[ClubId],
        rng: &mut ChaCha8Rng,
    ) -> Vec<(ClubId, ClubId)> {
        let mut pool = clubs.to_vec();
        pool.sort_by_key(|&c| self.total(c));

        let mut pairs = Vec::with_capacity(pool.len() / 2);
        while pool.len() >= 2 {
            let club = pool.remove(0);

            let mut best_idx = 0;
            let mut best_key = (u32::MAX, u32::MAX);
            for (idx, &opponent) in pool.iter().enumerate() {
                let key = (self.meetings(club, opponent), self.total(opponent));
                if key < best_key {
                    best_key = key;
                    best_idx = idx;
                }
            }
            let opponent = pool.remove(best_idx);

            let pair = if rng.gen_bool(0.5) { (club, opponent) } else { (opponent, club) };
            self.record(pair.0, pair.1);
            pairs.push(pair);
        }

        pairs
    }
}
