use serde::{Deserialize, Serialize};

use super::{ClubId, Fixture};

/// One numbered round of the season: its fixtures plus any clubs resting.
///
/// Invariants (checked by the fixture validator, not enforced here):
/// a club appears in at most one fixture per round, and never both in a
/// fixture and in the bye list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    /// 1-based sequence number within the season.
    pub number: u32,
    pub name: String,
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub is_bye: bool,
    /// Clubs resting this round.
    #[serde(default)]
    pub byes: Vec<ClubId>,
    #[serde(default)]
    pub is_final: bool,
}

impl Round {
    pub fn new(number: u32, name: &str) -> Self {
        Self {
            number,
            name: name.to_string(),
            fixtures: Vec::new(),
            is_bye: false,
            byes: Vec::new(),
            is_final: false,
        }
    }

    pub fn fixture_for(&self, club: ClubId) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.involves(club))
    }

    pub fn has_club(&self, club: ClubId) -> bool {
        self.fixture_for(club).is_some()
    }

    pub fn is_on_bye(&self, club: ClubId) -> bool {
        self.byes.contains(&club)
    }
}
