use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::ClubId;
use crate::finals::FinalType;

/// Final score of a completed match, as reported by the match engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// The home side wins a drawn final score.
    pub fn home_won(&self) -> bool {
        self.home >= self.away
    }
}

/// A day/time slot within a round's playing window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSlot {
    pub day: Weekday,
    pub time: NaiveTime,
    pub label: String,
}

impl MatchSlot {
    pub fn new(day: Weekday, time: NaiveTime, label: &str) -> Self {
        Self { day, time, label: label.to_string() }
    }

    /// Anything from 17:00 counts as a night slot.
    pub fn is_night(&self) -> bool {
        self.time >= NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN)
    }
}

/// One scheduled match between two clubs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub home: ClubId,
    pub away: ClubId,
    pub venue: String,
    /// Assigned by the match-day scheduler; `None` until a round is slotted.
    #[serde(default)]
    pub slot: Option<MatchSlot>,
    /// Display name of the marquee fixture, when this is one.
    #[serde(default)]
    pub blockbuster: Option<String>,
    /// Bracket role, set on finals fixtures only.
    #[serde(default)]
    pub final_type: Option<FinalType>,
    /// Filled in by the match engine once the match has been played.
    #[serde(default)]
    pub result: Option<Score>,
}

impl Fixture {
    pub fn new(home: ClubId, away: ClubId, venue: &str) -> Self {
        debug_assert!(home != away, "a club cannot be fixtured against itself");
        Self {
            home,
            away,
            venue: venue.to_string(),
            slot: None,
            blockbuster: None,
            final_type: None,
            result: None,
        }
    }

    pub fn involves(&self, club: ClubId) -> bool {
        self.home == club || self.away == club
    }

    /// True when this fixture is the given pairing, in either orientation.
    pub fn is_matchup(&self, a: ClubId, b: ClubId) -> bool {
        (self.home == a && self.away == b) || (self.home == b && self.away == a)
    }

    pub fn is_blockbuster(&self) -> bool {
        self.blockbuster.is_some()
    }

    /// The other side of this fixture, when `club` is playing in it.
    pub fn opponent(&self, club: ClubId) -> Option<ClubId> {
        if self.home == club {
            Some(self.away)
        } else if self.away == club {
            Some(self.home)
        } else {
            None
        }
    }

    /// Winner of a completed match; `None` until a result is recorded.
    pub fn winner(&self) -> Option<ClubId> {
        self.result.map(|s| if s.home_won() { self.home } else { self.away })
    }

    pub fn loser(&self) -> Option<ClubId> {
        self.result.map(|s| if s.home_won() { self.away } else { self.home })
    }
}
