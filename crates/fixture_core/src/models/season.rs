use serde::{Deserialize, Serialize};

use super::{ClubId, Fixture, Round};

/// A full competition year: the home-and-away rounds written once at
/// generation time, plus finals rounds appended one week at a time as the
/// bracket resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub year: i32,
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub finals: Vec<Round>,
}

impl Season {
    pub fn new(year: i32) -> Self {
        Self { year, rounds: Vec::new(), finals: Vec::new() }
    }

    /// Regular-season round by 1-based number.
    pub fn round(&self, number: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.number == number)
    }

    pub fn fixtures_for(&self, club: ClubId) -> Vec<&Fixture> {
        self.rounds
            .iter()
            .flat_map(|r| r.fixtures.iter())
            .filter(|f| f.involves(club))
            .collect()
    }

    /// Home-and-away matches scheduled for a club, byes excluded.
    pub fn matches_scheduled(&self, club: ClubId) -> usize {
        self.fixtures_for(club).len()
    }
}
