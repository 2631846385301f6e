use serde::{Deserialize, Serialize};

use super::{ClubId, Round};

const POINTS_WIN: u32 = 4;
const POINTS_DRAW: u32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderEntry {
    pub club: ClubId,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    /// Competition points (4 a win, 2 a draw).
    pub points: u32,
    pub points_for: u32,
    pub points_against: u32,
}

impl LadderEntry {
    pub fn new(club: ClubId) -> Self {
        Self {
            club,
            played: 0,
            won: 0,
            lost: 0,
            drawn: 0,
            points: 0,
            points_for: 0,
            points_against: 0,
        }
    }

    /// Scoring percentage, points for over points against. A club yet to
    /// concede is scored on points-for alone.
    pub fn percentage(&self) -> f32 {
        if self.points_against == 0 {
            self.points_for as f32 * 100.0
        } else {
            self.points_for as f32 / self.points_against as f32 * 100.0
        }
    }
}

/// Ranked standings. Ordering: competition points descending, then
/// percentage descending; remaining ties keep arrival order (stable sort).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ladder {
    pub entries: Vec<LadderEntry>,
}

impl Ladder {
    pub fn new(entries: Vec<LadderEntry>) -> Self {
        let mut ladder = Self { entries };
        ladder.sort();
        ladder
    }

    pub fn sort(&mut self) {
        self.entries.sort_by(|a, b| {
            b.points.cmp(&a.points).then(
                b.percentage()
                    .partial_cmp(&a.percentage())
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
        });
    }

    /// Club at a 1-based ladder rank.
    pub fn club_at(&self, rank: usize) -> Option<ClubId> {
        self.entries.get(rank.checked_sub(1)?).map(|e| e.club)
    }

    /// 1-based rank of a club, if it is on the ladder.
    pub fn rank_of(&self, club: ClubId) -> Option<usize> {
        self.entries.iter().position(|e| e.club == club).map(|i| i + 1)
    }

    /// Recompute standings from the completed home-and-away fixtures of the
    /// given rounds. Clubs keep their given order for unbroken ties.
    pub fn rebuild_from(rounds: &[Round], clubs: &[ClubId]) -> Self {
        let mut entries: Vec<LadderEntry> = clubs.iter().map(|&c| LadderEntry::new(c)).collect();

        let mut update = |club: ClubId, scored: u32, conceded: u32| {
            if let Some(entry) = entries.iter_mut().find(|e| e.club == club) {
                entry.played += 1;
                entry.points_for += scored;
                entry.points_against += conceded;
                match scored.cmp(&conceded) {
                    std::cmp::Ordering::Greater => {
                        entry.won += 1;
                        entry.points += POINTS_WIN;
                    }
                    std::cmp::Ordering::Equal => {
                        entry.drawn += 1;
                        entry.points += POINTS_DRAW;
                    }
                    std::cmp::Ordering::Less => entry.lost += 1,
                }
            }
        };

        for round in rounds.iter().filter(|r| !r.is_final) {
            for fixture in &round.fixtures {
                if let Some(score) = fixture.result {
                    update(fixture.home, score.home, score.away);
                    update(fixture.away, score.away, score.home);
                }
            }
        }

        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fixture, Score};

    #[test]
    fn orders_by_points_then_percentage_then_arrival() {
        let mut a = LadderEntry::new(1);
        a.points = 8;
        a.points_for = 100;
        a.points_against = 100;
        let mut b = LadderEntry::new(2);
        b.points = 8;
        b.points_for = 120;
        b.points_against = 100;
        let mut c = LadderEntry::new(3);
        c.points = 12;
        c.points_for = 90;
        c.points_against = 110;
        // Same points and percentage as club 1: arrival order decides.
        let mut d = LadderEntry::new(4);
        d.points = 8;
        d.points_for = 50;
        d.points_against = 50;

        let ladder = Ladder::new(vec![a, b, c, d]);
        let order: Vec<ClubId> = ladder.entries.iter().map(|e| e.club).collect();
        assert_eq!(order, vec![3, 2, 1, 4]);
        assert_eq!(ladder.rank_of(3), Some(1));
        assert_eq!(ladder.club_at(2), Some(2));
    }

    #[test]
    fn rebuilds_from_completed_fixtures() {
        let mut round = Round::new(1, "Round 1");
        let mut win = Fixture::new(1, 2, "Ground 1");
        win.result = Some(Score::new(90, 60));
        let mut draw = Fixture::new(3, 4, "Ground 3");
        draw.result = Some(Score::new(75, 75));
        let unplayed = Fixture::new(5, 6, "Ground 5");
        round.fixtures = vec![win, draw, unplayed];

        let ladder = Ladder::rebuild_from(&[round], &[1, 2, 3, 4, 5, 6]);
        assert_eq!(ladder.club_at(1), Some(1), "the winner tops the table");
        let top = &ladder.entries[0];
        assert_eq!((top.points, top.won, top.played), (4, 1, 1));

        let drawn = ladder.entries.iter().find(|e| e.club == 3).unwrap();
        assert_eq!((drawn.points, drawn.drawn), (2, 1));

        let idle = ladder.entries.iter().find(|e| e.club == 5).unwrap();
        assert_eq!(idle.played, 0);
    }
}
